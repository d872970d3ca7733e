use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::store::RosterStore;

pub fn run(store: &RosterStore, id: u64) -> Result<CmdResult> {
    let record = store.find_by_id(id).ok_or(RosterError::NotFound(id))?;
    Ok(CmdResult::default().with_listed(vec![record.clone()]))
}
