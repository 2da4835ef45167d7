use crate::commands::CmdResult;
use crate::error::{AtlasError, Result};
use crate::session::Session;
use crate::store::StateStore;

/// Open the detail view for one country. The open record's name is kept in
/// the session scope until the caller closes the view.
pub fn run<S: StateStore>(session: &mut Session<S>, name: &str) -> Result<CmdResult> {
    let record = session
        .catalog()
        .get(name)
        .cloned()
        .ok_or_else(|| AtlasError::Api(format!("No such country: {}", name)))?;
    session.open_detail(&record.name)?;
    Ok(CmdResult::default().with_detail(record))
}
