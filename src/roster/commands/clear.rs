use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::StorageBackend;
use crate::store::RosterStore;

/// Wipe the whole roster and reset the id counter. Destructive, so the
/// caller must pass an explicit confirmation.
pub fn run<S: StorageBackend>(
    store: &mut RosterStore,
    backend: &mut S,
    confirmed: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !confirmed {
        result.add_message(CmdMessage::warning(
            "This deletes ALL student data and cannot be undone; re-run with --yes to confirm",
        ));
        return Ok(result);
    }

    store.clear();
    persist(store, backend, &mut result);
    result.add_message(CmdMessage::success("All student data cleared"));
    Ok(result)
}
