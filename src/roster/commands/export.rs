use crate::commands::{CmdMessage, CmdResult, ExportDocument};
use crate::error::{Result, RosterError};
use crate::store::RosterStore;
use chrono::Local;

/// Build a pretty-printed JSON export of the full roster. The caller
/// decides where (and whether) to write it; the suggested filename embeds
/// the export date.
pub fn run(store: &RosterStore) -> Result<CmdResult> {
    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No students to export"));
        return Ok(result);
    }

    let json = serde_json::to_string_pretty(store.all()).map_err(RosterError::Serialization)?;
    let filename = format!("students_backup_{}.json", Local::now().format("%Y-%m-%d"));

    let mut result = CmdResult::default().with_export(ExportDocument { filename, json });
    result.add_message(CmdMessage::success(format!(
        "Exported {} student(s)",
        store.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{StudentDraft, StudentRecord};
    use crate::storage::memory::InMemoryBackend;

    #[test]
    fn export_is_a_bare_pretty_printed_array() {
        let mut store = RosterStore::new();
        let mut backend = InMemoryBackend::new();
        add::run(
            &mut store,
            &mut backend,
            StudentDraft::new("Ann", 10, "3A", "art, music"),
        )
        .unwrap();
        add::run(
            &mut store,
            &mut backend,
            StudentDraft::new("Ben", 12, "4B", "chess"),
        )
        .unwrap();

        let result = run(&store).unwrap();
        let export = result.export.unwrap();

        assert!(export.filename.starts_with("students_backup_"));
        assert!(export.filename.ends_with(".json"));
        // Pretty output spans lines.
        assert!(export.json.contains('\n'));

        let parsed: Vec<StudentRecord> = serde_json::from_str(&export.json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Ann");
        assert_eq!(parsed[1].id, 2);
    }

    #[test]
    fn empty_roster_exports_nothing() {
        let store = RosterStore::new();
        let result = run(&store).unwrap();
        assert!(result.export.is_none());
        assert_eq!(result.messages[0].content, "No students to export");
    }
}
