use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::StateStore;

/// Flip the dark-mode preference. Presentation-only; persisted durably.
pub fn run<S: StateStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let dark = session.toggle_dark_mode()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if dark {
        "Dark mode on"
    } else {
        "Dark mode off"
    }));
    Ok(result)
}
