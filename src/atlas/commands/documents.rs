use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AtlasError, Result};
use crate::selection::Toggle;
use crate::session::Session;
use crate::store::StateStore;

/// Toggle a catalog entry in or out of the document list by name. Ungated.
pub fn toggle<S: StateStore>(session: &mut Session<S>, name: &str) -> Result<CmdResult> {
    let record = session
        .catalog()
        .get(name)
        .cloned()
        .ok_or_else(|| AtlasError::Api(format!("No such country: {}", name)))?;

    let mut result = CmdResult::default();
    match session.toggle_document(&record)? {
        Toggle::Added(name) => {
            result.add_message(CmdMessage::success(format!(
                "{} added to document list",
                name
            )));
        }
        Toggle::Removed(name) => {
            result.add_message(CmdMessage::success(format!(
                "{} removed from document list",
                name
            )));
        }
    }
    Ok(result)
}

/// The document list, in insertion order. Positions shown by the renderer are
/// 1-based and feed [`remove`].
pub fn list<S: StateStore>(session: &Session<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(session.documents().entries().to_vec()))
}

/// Delete the entry at a 1-based list position.
pub fn remove<S: StateStore>(session: &mut Session<S>, position: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let removed = position
        .checked_sub(1)
        .map(|i| session.remove_document_at(i))
        .transpose()?
        .flatten();
    match removed {
        Some(name) => {
            result.add_message(CmdMessage::success(format!(
                "{} removed from document list",
                name
            )));
        }
        None => {
            result.add_message(CmdMessage::error(format!(
                "No document list entry at position {}",
                position
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use crate::model::Country;
    use crate::store::memory::fixtures::{france, japan};
    use crate::store::memory::MemoryStore;

    struct SampleSource;
    impl CatalogSource for SampleSource {
        fn load(&self) -> Result<Vec<Country>> {
            Ok(vec![japan(), france()])
        }
    }

    #[test]
    fn toggle_needs_no_login() {
        let mut session = Session::open(MemoryStore::new(), &SampleSource);
        let result = toggle(&mut session, "France").unwrap();
        assert_eq!(result.messages[0].content, "France added to document list");
        assert_eq!(list(&session).unwrap().listed.len(), 1);
    }

    #[test]
    fn remove_uses_one_based_positions() {
        let mut session = Session::open(MemoryStore::new(), &SampleSource);
        toggle(&mut session, "Japan").unwrap();
        toggle(&mut session, "France").unwrap();

        let result = remove(&mut session, 1).unwrap();
        assert_eq!(result.messages[0].content, "Japan removed from document list");

        let names: Vec<String> = list(&session)
            .unwrap()
            .listed
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["France"]);
    }

    #[test]
    fn remove_out_of_range_reports_an_error_message() {
        let mut session = Session::open(MemoryStore::new(), &SampleSource);
        let result = remove(&mut session, 5).unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
        let result = remove(&mut session, 0).unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }
}
