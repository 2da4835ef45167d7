use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::Session;
use crate::store::StateStore;

/// The visible result set under the current filter criteria.
pub fn run<S: StateStore>(session: &Session<S>) -> Result<CmdResult> {
    let listed = session.visible().into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed(listed))
}
