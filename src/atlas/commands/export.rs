use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AtlasError, Result};
use crate::export::{self, DEFAULT_FILENAME};
use crate::session::Session;
use crate::store::StateStore;
use std::fs::File;
use std::path::PathBuf;

/// Write the document-list report. An empty list still produces a valid
/// document carrying the placeholder line.
pub fn run<S: StateStore>(
    session: &Session<S>,
    output: Option<PathBuf>,
) -> Result<CmdResult> {
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));
    let file = File::create(&path).map_err(AtlasError::Io)?;
    export::render(file, session.documents().entries())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    result.exported_to = Some(path);
    Ok(result)
}
