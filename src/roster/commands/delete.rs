use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::storage::StorageBackend;
use crate::store::RosterStore;

pub fn run<S: StorageBackend>(
    store: &mut RosterStore,
    backend: &mut S,
    id: u64,
) -> Result<CmdResult> {
    let removed = store.remove(id).ok_or(RosterError::NotFound(id))?;

    let mut result = CmdResult::default();
    persist(store, backend, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Student \"{}\" deleted",
        removed.name
    )));
    result.affected.push(removed);
    Ok(result)
}
