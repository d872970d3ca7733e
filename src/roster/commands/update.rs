use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::StudentDraft;
use crate::storage::StorageBackend;
use crate::store::RosterStore;
use crate::validate::validate;

pub fn run<S: StorageBackend>(
    store: &mut RosterStore,
    backend: &mut S,
    id: u64,
    draft: StudentDraft,
) -> Result<CmdResult> {
    let draft = draft.normalized();
    // The edited record is exempt from colliding with its own name.
    validate(&draft, store.all(), Some(id))?;

    let record = store
        .update(id, draft)
        .ok_or(RosterError::NotFound(id))?
        .clone();

    let mut result = CmdResult::default();
    persist(store, backend, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Student \"{}\" updated",
        record.name
    )));
    result.affected.push(record);
    Ok(result)
}
