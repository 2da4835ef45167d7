use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AtlasError, Result};
use crate::session::{FavoriteToggle, Session};
use crate::store::StateStore;

/// Toggle a catalog entry in or out of the favorites set by name.
pub fn toggle<S: StateStore>(session: &mut Session<S>, name: &str) -> Result<CmdResult> {
    let record = session
        .catalog()
        .get(name)
        .cloned()
        .ok_or_else(|| AtlasError::Api(format!("No such country: {}", name)))?;

    let mut result = CmdResult::default();
    match session.toggle_favorite(&record)? {
        FavoriteToggle::Added(name) => {
            result.add_message(CmdMessage::success(format!("{} added to favorites", name)));
        }
        FavoriteToggle::Removed(name) => {
            result.add_message(CmdMessage::success(format!(
                "{} removed from favorites",
                name
            )));
        }
        FavoriteToggle::Unauthorized => {
            result.add_message(CmdMessage::warning(crate::session::LOGIN_REQUIRED_NOTICE));
        }
    }
    Ok(result)
}

/// The favorites set, in insertion order.
pub fn list<S: StateStore>(session: &Session<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(session.favorites().entries().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use crate::model::Country;
    use crate::store::memory::fixtures::{japan, StoreFixture};
    use crate::store::memory::MemoryStore;

    struct SampleSource;
    impl CatalogSource for SampleSource {
        fn load(&self) -> Result<Vec<Country>> {
            Ok(vec![japan()])
        }
    }

    #[test]
    fn toggle_unknown_name_is_an_error() {
        let mut session = Session::open(MemoryStore::new(), &SampleSource);
        assert!(toggle(&mut session, "Atlantis").is_err());
    }

    #[test]
    fn toggle_without_login_warns_and_leaves_the_set() {
        let mut session = Session::open(MemoryStore::new(), &SampleSource);
        let result = toggle(&mut session, "Japan").unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn toggle_round_trip_with_login() {
        let fixture = StoreFixture::new().logged_in();
        let mut session = Session::open(fixture.store, &SampleSource);

        let result = toggle(&mut session, "Japan").unwrap();
        assert_eq!(result.messages[0].content, "Japan added to favorites");
        assert_eq!(list(&session).unwrap().listed.len(), 1);

        let result = toggle(&mut session, "Japan").unwrap();
        assert_eq!(result.messages[0].content, "Japan removed from favorites");
        assert!(list(&session).unwrap().listed.is_empty());
    }
}
