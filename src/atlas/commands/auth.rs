use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::StateStore;

/// Flip the logged-in flag. The gate only affects favorites mutation.
pub fn run<S: StateStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let logged_in = session.toggle_login()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if logged_in {
        "Logged in"
    } else {
        "Logged out"
    }));
    Ok(result)
}
