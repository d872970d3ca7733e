use super::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::RosterData;

/// In-memory storage for tests. `fail_writes` simulates an unavailable
/// backing store so the degraded-persistence path can be exercised.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    saved: Option<RosterData>,
    pub fail_writes: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: RosterData) -> Self {
        Self {
            saved: Some(data),
            fail_writes: false,
        }
    }

    /// The last snapshot handed to `save`, if any.
    pub fn saved(&self) -> Option<&RosterData> {
        self.saved.as_ref()
    }
}

impl StorageBackend for InMemoryBackend {
    fn load(&self) -> Result<RosterData> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, data: &RosterData) -> Result<()> {
        if self.fail_writes {
            return Err(RosterError::Storage("storage unavailable".to_string()));
        }
        self.saved = Some(data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_backend_loads_first_run_state() {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.load().unwrap(), RosterData::default());
    }

    #[test]
    fn save_is_visible_to_load() {
        let mut backend = InMemoryBackend::new();
        let data = RosterData {
            students: Vec::new(),
            next_id: 5,
        };
        backend.save(&data).unwrap();
        assert_eq!(backend.load().unwrap(), data);
    }

    #[test]
    fn fail_writes_rejects_saves() {
        let mut backend = InMemoryBackend::new();
        backend.fail_writes = true;
        let err = backend.save(&RosterData::default()).unwrap_err();
        assert!(matches!(err, RosterError::Storage(_)));
        assert!(backend.saved().is_none());
    }
}
