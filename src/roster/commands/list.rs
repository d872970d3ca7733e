use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{query, SortKey};
use crate::store::RosterStore;

pub fn run(store: &RosterStore, term: &str, sort: SortKey) -> Result<CmdResult> {
    let listed = query(store.all(), term, sort);

    let mut result = CmdResult::default().with_listed(listed);
    result.add_message(CmdMessage::info(format!(
        "Total students: {}",
        store.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::StudentDraft;
    use crate::storage::memory::InMemoryBackend;

    fn seeded() -> RosterStore {
        let mut store = RosterStore::new();
        let mut backend = InMemoryBackend::new();
        add::run(
            &mut store,
            &mut backend,
            StudentDraft::new("Cid", 9, "3A", "reading, math"),
        )
        .unwrap();
        add::run(
            &mut store,
            &mut backend,
            StudentDraft::new("Ann", 12, "4B", "math club"),
        )
        .unwrap();
        add::run(
            &mut store,
            &mut backend,
            StudentDraft::new("Ben", 10, "3A", "chess"),
        )
        .unwrap();
        store
    }

    #[test]
    fn blank_search_lists_everyone_in_insertion_order() {
        let store = seeded();
        let result = run(&store, "", SortKey::None).unwrap();
        let names: Vec<&str> = result.listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Cid", "Ann", "Ben"]);
    }

    #[test]
    fn search_term_narrows_and_sort_orders() {
        let store = seeded();
        let result = run(&store, "math", SortKey::Name).unwrap();
        let names: Vec<&str> = result.listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cid"]);
    }

    #[test]
    fn count_message_reports_the_whole_roster() {
        let store = seeded();
        // The count covers the store, not the filtered view.
        let result = run(&store, "chess", SortKey::None).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.messages[0].content, "Total students: 3");
    }
}
