use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::StateStore;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// A one-screen summary: catalog size and freshness, login state, active
/// filters, selection set sizes.
pub fn run<S: StateStore>(session: &Session<S>, dataset: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if session.catalog().is_empty() {
        result.add_message(CmdMessage::warning("Catalog: empty (no dataset loaded)"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Catalog: {} countries, {} languages",
            session.catalog().len(),
            session.catalog().languages().len()
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "Dataset: {}{}",
        dataset.display(),
        dataset_freshness(dataset)
            .map(|f| format!(" (updated {})", f))
            .unwrap_or_default()
    )));
    result.add_message(CmdMessage::info(format!(
        "Login: {}",
        if session.logged_in() {
            "logged in"
        } else {
            "logged out"
        }
    )));

    let criteria = session.criteria();
    let mut active = Vec::new();
    if !criteria.search.is_empty() {
        active.push(format!("search \"{}\"", criteria.search));
    }
    if let Some(region) = criteria.region {
        active.push(format!("region {}", region));
    }
    if let Some(language) = &criteria.language {
        active.push(format!("language {}", language));
    }
    if criteria.favorites_only {
        active.push("favorites only".to_string());
    }
    result.add_message(CmdMessage::info(format!(
        "Filters: {}",
        if active.is_empty() {
            "none".to_string()
        } else {
            active.join(", ")
        }
    )));

    result.add_message(CmdMessage::info(format!(
        "Favorites: {}  Document list: {}",
        session.favorites().len(),
        session.documents().len()
    )));
    Ok(result)
}

fn dataset_freshness(dataset: &Path) -> Option<String> {
    let modified = fs::metadata(dataset).ok()?.modified().ok()?;
    let modified: DateTime<Utc> = modified.into();
    let age = Utc::now().signed_duration_since(modified).to_std().ok()?;
    Some(timeago::Formatter::new().convert(age))
}
