use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentDraft;
use crate::storage::StorageBackend;
use crate::store::RosterStore;
use crate::validate::validate;

pub fn run<S: StorageBackend>(
    store: &mut RosterStore,
    backend: &mut S,
    draft: StudentDraft,
) -> Result<CmdResult> {
    let draft = draft.normalized();
    validate(&draft, store.all(), None)?;

    let record = store.add(draft).clone();
    let mut result = CmdResult::default();
    persist(store, backend, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Student \"{}\" added (id {})",
        record.name, record.id
    )));
    result.affected.push(record);
    Ok(result)
}
