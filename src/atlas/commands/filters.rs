use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Region;
use crate::session::Session;
use crate::store::StateStore;

/// One filter mutation. Each variant touches exactly one criterion and its one
/// persisted key.
#[derive(Debug, Clone)]
pub enum FilterAction {
    Search(String),
    Region(Option<Region>),
    Language(Option<String>),
    FavoritesOnly(bool),
}

pub fn apply<S: StateStore>(session: &mut Session<S>, action: FilterAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        FilterAction::Search(text) => {
            let cleared = text.is_empty();
            session.set_search(text)?;
            result.add_message(CmdMessage::success(if cleared {
                "Search cleared".to_string()
            } else {
                format!("Searching for \"{}\"", session.criteria().search)
            }));
        }
        FilterAction::Region(region) => {
            session.set_region(region)?;
            result.add_message(CmdMessage::success(match region {
                Some(r) => format!("Region filter: {}", r),
                None => "Region filter cleared (All Regions)".to_string(),
            }));
        }
        FilterAction::Language(language) => {
            session.set_language(language)?;
            result.add_message(CmdMessage::success(
                match &session.criteria().language {
                    Some(l) => format!("Language filter: {}", l),
                    None => "Language filter cleared (All Languages)".to_string(),
                },
            ));
        }
        FilterAction::FavoritesOnly(on) => {
            session.set_favorites_only(on)?;
            result.add_message(CmdMessage::success(if on {
                "Showing only favorites"
            } else {
                "Showing all countries"
            }));
        }
    }
    Ok(result)
}

/// Reset all four criteria to their defaults.
pub fn clear<S: StateStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.set_search(String::new())?;
    session.set_region(None)?;
    session.set_language(None)?;
    session.set_favorites_only(false)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Filters cleared"));
    Ok(result)
}

/// The current criteria as readable lines.
pub fn show<S: StateStore>(session: &Session<S>) -> Result<CmdResult> {
    let criteria = session.criteria();
    let mut result = CmdResult::default();
    if criteria.is_default() {
        result.add_message(CmdMessage::info("No filters active"));
        return Ok(result);
    }
    if !criteria.search.is_empty() {
        result.add_message(CmdMessage::info(format!("search: {}", criteria.search)));
    }
    if let Some(region) = criteria.region {
        result.add_message(CmdMessage::info(format!("region: {}", region)));
    }
    if let Some(language) = &criteria.language {
        result.add_message(CmdMessage::info(format!("language: {}", language)));
    }
    if criteria.favorites_only {
        result.add_message(CmdMessage::info("favorites only"));
    }
    Ok(result)
}

/// The derived language index of the loaded catalog.
pub fn languages<S: StateStore>(session: &Session<S>) -> Result<CmdResult> {
    let names: Vec<String> = session.catalog().languages().iter().cloned().collect();
    let mut result = CmdResult::default().with_listed_names(names);
    if result.listed_names.is_empty() {
        result.add_message(CmdMessage::info("No catalog loaded"));
    }
    Ok(result)
}

/// The fixed region set the filter accepts.
pub fn regions() -> CmdResult {
    CmdResult::default()
        .with_listed_names(Region::ALL.iter().map(|r| r.to_string()).collect())
}
