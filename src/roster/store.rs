//! The authoritative in-memory record collection.
//!
//! `RosterStore` owns the one true copy of the roster plus the id counter.
//! It performs no I/O: callers snapshot it and hand the snapshot to a
//! [`crate::storage::StorageBackend`] after every mutation. Insertion order
//! is preserved and is the default display order.
//!
//! The store assumes drafts were already validated; it never rejects input.
//! Only `update` and `remove` can fail, when the target id is gone.

use crate::model::{today_stamp, RosterData, StudentDraft, StudentRecord};

#[derive(Debug)]
pub struct RosterStore {
    students: Vec<StudentRecord>,
    next_id: u64,
}

// The counter starts at 1, so a derived Default (counter 0) would be wrong.
impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild the store from a persisted snapshot.
    pub fn hydrate(data: RosterData) -> Self {
        Self {
            students: data.students,
            next_id: data.next_id,
        }
    }

    /// Capture the current state for persistence.
    pub fn snapshot(&self) -> RosterData {
        RosterData {
            students: self.students.clone(),
            next_id: self.next_id,
        }
    }

    /// Append a new record, assigning the next id and stamping both dates
    /// with today. The counter only ever moves forward, so ids freed by
    /// deletions are never handed out again.
    pub fn add(&mut self, draft: StudentDraft) -> &StudentRecord {
        let stamp = today_stamp();
        let record = StudentRecord {
            id: self.next_id,
            name: draft.name,
            age: draft.age,
            class: draft.class,
            interests: draft.interests,
            date_added: stamp.clone(),
            last_updated: stamp,
        };
        self.next_id += 1;
        self.students.push(record);
        self.students.last().expect("just pushed")
    }

    /// Overwrite the mutable fields of the record with the given id and
    /// refresh `last_updated`. `id` and `date_added` are untouched.
    pub fn update(&mut self, id: u64, draft: StudentDraft) -> Option<&StudentRecord> {
        let record = self.students.iter_mut().find(|s| s.id == id)?;
        record.name = draft.name;
        record.age = draft.age;
        record.class = draft.class;
        record.interests = draft.interests;
        record.last_updated = today_stamp();
        Some(record)
    }

    /// Remove the record with the given id, returning it so the caller can
    /// name the student in its confirmation message.
    pub fn remove(&mut self, id: u64) -> Option<StudentRecord> {
        let pos = self.students.iter().position(|s| s.id == id)?;
        Some(self.students.remove(pos))
    }

    pub fn find_by_id(&self, id: u64) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == id)
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Drop every record and reset the id counter to its initial value.
    pub fn clear(&mut self) {
        self.students.clear();
        self.next_id = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> StudentDraft {
        StudentDraft::new(name, 10, "3A", "reading")
    }

    #[test]
    fn default_store_allocates_ids_from_one() {
        let mut store = RosterStore::default();
        assert_eq!(store.add(draft("Ann")).id, 1);
    }

    #[test]
    fn add_assigns_strictly_increasing_ids() {
        let mut store = RosterStore::new();
        let a = store.add(draft("Ann")).id;
        let b = store.add(draft("Ben")).id;
        let c = store.add(draft("Cid")).id;
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn add_sets_both_date_stamps() {
        let mut store = RosterStore::new();
        let record = store.add(draft("Ann"));
        assert_eq!(record.date_added, record.last_updated);
        assert!(!record.date_added.is_empty());
    }

    #[test]
    fn find_by_id_returns_the_added_record() {
        let mut store = RosterStore::new();
        let id = store.add(draft("Ann")).id;
        let found = store.find_by_id(id).unwrap();
        assert_eq!(found.name, "Ann");
        assert_eq!(found.age, 10);
        assert_eq!(found.class, "3A");
        assert_eq!(found.interests, "reading");
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut store = RosterStore::new();
        store.add(draft("Ann"));
        store.add(draft("Ben"));
        store.remove(1).unwrap();
        let id = store.add(draft("Cid")).id;
        assert_eq!(id, 3);
        let ids: Vec<u64> = store.all().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn update_touches_only_mutable_fields() {
        let mut store = RosterStore::new();
        let id = store.add(draft("Ann")).id;
        let added = store.find_by_id(id).unwrap().date_added.clone();

        let updated = store
            .update(id, StudentDraft::new("Annie", 11, "4B", "painting"))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Annie");
        assert_eq!(updated.age, 11);
        assert_eq!(updated.date_added, added);
    }

    #[test]
    fn update_missing_id_leaves_store_unchanged() {
        let mut store = RosterStore::new();
        store.add(draft("Ann"));
        assert!(store.update(99, draft("Ben")).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name, "Ann");
    }

    #[test]
    fn remove_takes_exactly_one_record() {
        let mut store = RosterStore::new();
        store.add(draft("Ann"));
        store.add(draft("Ben"));
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.name, "Ann");
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name, "Ben");
    }

    #[test]
    fn remove_missing_id_is_none() {
        let mut store = RosterStore::new();
        store.add(draft("Ann"));
        assert!(store.remove(99).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_resets_the_id_counter() {
        let mut store = RosterStore::new();
        store.add(draft("Ann"));
        store.add(draft("Ben"));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.add(draft("Cid")).id, 1);
    }

    #[test]
    fn snapshot_hydrate_round_trip() {
        let mut store = RosterStore::new();
        store.add(draft("Ann"));
        store.add(draft("Ben"));
        store.remove(1).unwrap();

        let mut revived = RosterStore::hydrate(store.snapshot());
        assert_eq!(revived.all(), store.all());
        assert_eq!(revived.add(draft("Cid")).id, 3);
    }
}
