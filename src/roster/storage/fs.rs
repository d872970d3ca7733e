use super::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::RosterData;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "students.json";

/// File-based storage: one JSON snapshot in the data directory.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<RosterData> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(RosterData::default());
        }
        let content = fs::read_to_string(data_file).map_err(RosterError::Io)?;
        // An unparseable snapshot is indistinguishable from no snapshot as
        // far as the user is concerned, so both load as a first run.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, data: &RosterData) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(data).map_err(RosterError::Serialization)?;
        fs::write(self.data_file(), content).map_err(RosterError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StudentDraft, StudentRecord};
    use crate::store::RosterStore;

    fn sample_data() -> RosterData {
        let mut store = RosterStore::new();
        store.add(StudentDraft::new("Ann", 10, "3A", "art, music"));
        store.add(StudentDraft::new("Ben", 12, "4B", "chess"));
        store.snapshot()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().to_path_buf());

        let data = sample_data();
        backend.save(&data).unwrap();

        let loaded = backend.load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn load_without_a_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nowhere"));

        let loaded = backend.load().unwrap();
        assert_eq!(loaded, RosterData::default());
    }

    #[test]
    fn load_with_corrupt_json_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().to_path_buf());
        backend.save(&sample_data()).unwrap();
        fs::write(backend.data_file(), "{not json!").unwrap();

        let loaded = backend.load().unwrap();
        assert_eq!(loaded, RosterData::default());
    }

    #[test]
    fn load_with_wrong_shape_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().to_path_buf());
        fs::create_dir_all(dir.path()).unwrap();
        // A bare array is the legacy shape without the id counter; it does
        // not parse as a snapshot and loads as a first run.
        fs::write(backend.data_file(), "[]").unwrap();

        let loaded = backend.load().unwrap();
        assert_eq!(loaded, RosterData::default());
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().to_path_buf());

        backend.save(&sample_data()).unwrap();
        let smaller = RosterData {
            students: vec![StudentRecord {
                id: 7,
                name: "Cid".into(),
                age: 9,
                class: "3A".into(),
                interests: "reading".into(),
                date_added: "1/1/2026".into(),
                last_updated: "1/1/2026".into(),
            }],
            next_id: 8,
        };
        backend.save(&smaller).unwrap();

        let loaded = backend.load().unwrap();
        assert_eq!(loaded, smaller);
    }

    #[test]
    fn snapshot_uses_the_wrapped_wire_shape() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().to_path_buf());
        backend.save(&sample_data()).unwrap();

        let raw = fs::read_to_string(backend.data_file()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["nextId"], 3);
        assert_eq!(json["students"].as_array().unwrap().len(), 2);
        assert_eq!(json["students"][0]["dateAdded"], json["students"][0]["lastUpdated"]);
    }
}
