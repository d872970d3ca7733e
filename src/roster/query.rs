//! Search filtering and sorting over the roster.
//!
//! `query` derives a display view from the store's records; it never
//! mutates its input and the store keeps the only authoritative copy.

use crate::model::StudentRecord;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Keep insertion order.
    #[default]
    None,
    Name,
    Age,
    Class,
}

/// Filter records by a free-text term and sort by the given key.
///
/// An empty term matches everything; otherwise a record matches when its
/// name, class, or interests contains the term, case-insensitively. The
/// sort is stable, so records that compare equal keep their insertion
/// order.
pub fn query(records: &[StudentRecord], term: &str, sort: SortKey) -> Vec<StudentRecord> {
    let term = term.trim().to_lowercase();

    let mut matched: Vec<StudentRecord> = records
        .iter()
        .filter(|s| {
            term.is_empty()
                || s.name.to_lowercase().contains(&term)
                || s.class.to_lowercase().contains(&term)
                || s.interests.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    match sort {
        SortKey::None => {}
        SortKey::Name => matched.sort_by(|a, b| compare_text(&a.name, &b.name)),
        SortKey::Age => matched.sort_by_key(|s| s.age),
        SortKey::Class => matched.sort_by(|a, b| compare_text(&a.class, &b.class)),
    }

    matched
}

// Case-insensitive lexicographic order, standing in for locale collation.
fn compare_text(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
