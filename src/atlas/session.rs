//! # Session Facade
//!
//! [`Session`] is the explicit application-state container: it owns the store,
//! the catalog, both selection sets, the filter criteria, the auth and theme
//! flags and the notice board, and exposes the operations the command layer
//! builds on. Nothing in here prints or exits; results come back as plain Rust
//! types.
//!
//! Generic over [`StateStore`] so the whole engine runs against the in-memory
//! store in tests.

use crate::catalog::{Catalog, CatalogSource};
use crate::error::{AtlasError, Result};
use crate::filter::{self, Criteria};
use crate::model::{Country, Region};
use crate::notice::NoticeBoard;
use crate::selection::{SelectionSet, Toggle};
use crate::store::{get_bool, keys, set_bool, Scope, StateStore};

pub const LOGIN_REQUIRED_NOTICE: &str = "Please log in to add to favorites.";

/// Outcome of a favorites toggle. `Unauthorized` is a normal result variant,
/// not an error: the set is untouched and the caller shows a transient notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added(String),
    Removed(String),
    Unauthorized,
}

pub struct Session<S: StateStore> {
    store: S,
    catalog: Catalog,
    favorites: SelectionSet,
    documents: SelectionSet,
    criteria: Criteria,
    logged_in: bool,
    dark_mode: bool,
    notices: NoticeBoard,
    load_warning: Option<String>,
}

impl<S: StateStore> Session<S> {
    /// Hydrate all persisted state, then load the catalog. A failed load is
    /// not fatal: the session starts with an empty catalog and keeps the
    /// warning for the caller to surface.
    pub fn open(store: S, source: &dyn CatalogSource) -> Self {
        let favorites = SelectionSet::hydrate(&store, keys::FAVORITES);
        let documents = SelectionSet::hydrate(&store, keys::DOCUMENT_LIST);
        let criteria = Criteria::hydrate(&store);
        let logged_in = get_bool(&store, Scope::Durable, keys::IS_LOGGED_IN);
        let dark_mode = get_bool(&store, Scope::Durable, keys::DARK_MODE);

        let (catalog, load_warning) = match source.load() {
            Ok(records) => (Catalog::install(records), None),
            Err(e) => (
                Catalog::empty(),
                Some(format!("Could not load the country catalog: {}", e)),
            ),
        };

        Self {
            store,
            catalog,
            favorites,
            documents,
            criteria,
            logged_in,
            dark_mode,
            notices: NoticeBoard::new(),
            load_warning,
        }
    }

    // --- Read access ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &SelectionSet {
        &self.favorites
    }

    pub fn documents(&self) -> &SelectionSet {
        &self.documents
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// The catalog-load warning from startup, if any. Cleared on first read.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    /// The visible result set, recomputed from the current inputs.
    pub fn visible(&self) -> Vec<&Country> {
        filter::visible(&self.catalog, &self.favorites, &self.criteria)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notices.current()
    }

    pub fn post_notice(&mut self, text: impl Into<String>) {
        self.notices.post(text);
    }

    // --- Selection sets ---

    /// Toggle a favorite, gated by the login flag. When logged out, nothing
    /// mutates or persists and the login notice is posted.
    pub fn toggle_favorite(&mut self, record: &Country) -> Result<FavoriteToggle> {
        if !self.logged_in {
            self.notices.post(LOGIN_REQUIRED_NOTICE);
            return Ok(FavoriteToggle::Unauthorized);
        }
        let outcome = match self.favorites.toggle(&mut self.store, record)? {
            Toggle::Added(name) => {
                self.notices.post(format!("{} added to favorites", name));
                FavoriteToggle::Added(name)
            }
            Toggle::Removed(name) => {
                self.notices.post(format!("{} removed from favorites", name));
                FavoriteToggle::Removed(name)
            }
        };
        Ok(outcome)
    }

    /// Toggle a document-list entry. No auth gate.
    pub fn toggle_document(&mut self, record: &Country) -> Result<Toggle> {
        let outcome = self.documents.toggle(&mut self.store, record)?;
        match &outcome {
            Toggle::Added(name) => self.notices.post(format!("{} added to document list", name)),
            Toggle::Removed(name) => self
                .notices
                .post(format!("{} removed from document list", name)),
        }
        Ok(outcome)
    }

    pub fn remove_document_at(&mut self, position: usize) -> Result<Option<String>> {
        self.documents.remove_at(&mut self.store, position)
    }

    pub fn remove_favorite_at(&mut self, position: usize) -> Result<Option<String>> {
        if !self.logged_in {
            self.notices.post(LOGIN_REQUIRED_NOTICE);
            return Ok(None);
        }
        self.favorites.remove_at(&mut self.store, position)
    }

    // --- Filter criteria ---

    pub fn set_search(&mut self, text: String) -> Result<()> {
        self.criteria.set_search(&mut self.store, text)
    }

    pub fn set_region(&mut self, region: Option<Region>) -> Result<()> {
        self.criteria.set_region(&mut self.store, region)
    }

    /// Set the language filter. The value must be one of the catalog's derived
    /// language names—unless the catalog is empty, in which case any value is
    /// accepted (it simply matches nothing until a catalog loads).
    pub fn set_language(&mut self, language: Option<String>) -> Result<()> {
        if let Some(lang) = &language {
            if !self.catalog.is_empty() && !self.catalog.languages().contains(lang) {
                return Err(AtlasError::Api(format!("Unknown language: {}", lang)));
            }
        }
        self.criteria.set_language(&mut self.store, language)
    }

    pub fn set_favorites_only(&mut self, on: bool) -> Result<()> {
        self.criteria.set_favorites_only(&mut self.store, on)
    }

    // --- Durable toggles ---

    /// Flip the login flag. Clears any pending notice either way.
    pub fn toggle_login(&mut self) -> Result<bool> {
        self.logged_in = !self.logged_in;
        set_bool(
            &mut self.store,
            Scope::Durable,
            keys::IS_LOGGED_IN,
            self.logged_in,
        )?;
        self.notices.clear();
        Ok(self.logged_in)
    }

    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        self.dark_mode = !self.dark_mode;
        set_bool(
            &mut self.store,
            Scope::Durable,
            keys::DARK_MODE,
            self.dark_mode,
        )?;
        Ok(self.dark_mode)
    }

    // --- Detail view ---

    /// Record which detail record is open. Session-scoped, so it resets on a
    /// full restart.
    pub fn open_detail(&mut self, name: &str) -> Result<()> {
        self.store.set(Scope::Session, keys::SELECTED_COUNTRY, name)
    }

    pub fn close_detail(&mut self) -> Result<()> {
        self.store.remove(Scope::Session, keys::SELECTED_COUNTRY)
    }

    pub fn open_detail_name(&self) -> Option<String> {
        self.store.get(Scope::Session, keys::SELECTED_COUNTRY)
    }
}
