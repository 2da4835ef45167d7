//! # Storage Layer
//!
//! Key/value persistence behind the [`StateStore`] trait, with two disjoint
//! scopes:
//!
//! - [`Scope::Durable`]: survives application restarts
//! - [`Scope::Session`]: survives navigation within one process, lost on exit
//!
//! A key set in one scope is invisible to the other. All values are canonical
//! strings: booleans as `"true"`/`"false"`, structured values as JSON. `get` on
//! a missing key returns `None`—callers supply their own default and never
//! treat absence as an error.
//!
//! There is no multi-key transactionality. Each `set` is atomic per key; the
//! callers tolerate partial application of multi-key updates because every
//! individual write is idempotent.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. Durable keys are one file each
//!   under the data directory; the session scope is an in-process map (the
//!   process is the session).
//! - [`memory::MemoryStore`]: in-memory storage for testing.

use crate::error::Result;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Durable,
    Session,
}

/// The key namespace. The names match the original storage layout so existing
/// persisted state keeps loading.
pub mod keys {
    // Durable scope
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const DARK_MODE: &str = "darkMode";
    pub const FAVORITES: &str = "favorites";
    pub const DOCUMENT_LIST: &str = "documentList";

    // Session scope
    pub const SEARCH_TERM: &str = "searchTerm";
    pub const SELECTED_REGION: &str = "selectedRegion";
    pub const SELECTED_LANGUAGE: &str = "selectedLanguage";
    pub const SHOW_ONLY_FAVORITES: &str = "showOnlyFavorites";
    pub const SELECTED_COUNTRY: &str = "selectedCountry";
}

/// Abstract interface for scoped key/value state.
pub trait StateStore {
    /// Read a key. Missing keys are `None`, never an error.
    fn get(&self, scope: Scope, key: &str) -> Option<String>;

    /// Write a key, replacing any previous value.
    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is a no-op.
    fn remove(&mut self, scope: Scope, key: &str) -> Result<()>;
}

/// Read a stored boolean. Anything other than the literal `"true"` (including
/// absence or a malformed value) is `false`.
pub fn get_bool<S: StateStore>(store: &S, scope: Scope, key: &str) -> bool {
    store.get(scope, key).as_deref() == Some("true")
}

/// Write a boolean in its canonical string form.
pub fn set_bool<S: StateStore>(store: &mut S, scope: Scope, key: &str, value: bool) -> Result<()> {
    store.set(scope, key, if value { "true" } else { "false" })
}
