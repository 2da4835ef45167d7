//! Filter criteria and the pure visibility function.
//!
//! The four criteria are independent: each setter persists only its own
//! session-scoped key, and `hydrate` reads all four at startup without writing
//! anything back. Visibility is recomputed from scratch on every read; there is
//! no cached result to go stale.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Country, Region};
use crate::selection::SelectionSet;
use crate::store::{get_bool, keys, set_bool, Scope, StateStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub region: Option<Region>,
    pub language: Option<String>,
    pub favorites_only: bool,
}

impl Criteria {
    /// Read all four criteria from the session scope, substituting the default
    /// for any missing or malformed value. Does not re-persist.
    pub fn hydrate<S: StateStore>(store: &S) -> Self {
        let search = store
            .get(Scope::Session, keys::SEARCH_TERM)
            .unwrap_or_default();
        let region = store
            .get(Scope::Session, keys::SELECTED_REGION)
            .and_then(|raw| raw.parse().ok());
        let language = store
            .get(Scope::Session, keys::SELECTED_LANGUAGE)
            .filter(|l| !l.is_empty());
        let favorites_only = get_bool(store, Scope::Session, keys::SHOW_ONLY_FAVORITES);
        Self {
            search,
            region,
            language,
            favorites_only,
        }
    }

    pub fn set_search<S: StateStore>(&mut self, store: &mut S, text: String) -> Result<()> {
        store.set(Scope::Session, keys::SEARCH_TERM, &text)?;
        self.search = text;
        Ok(())
    }

    pub fn set_region<S: StateStore>(
        &mut self,
        store: &mut S,
        region: Option<Region>,
    ) -> Result<()> {
        // Cleared filters persist as the empty string, same as set ones.
        let value = region.map(|r| r.as_str()).unwrap_or("");
        store.set(Scope::Session, keys::SELECTED_REGION, value)?;
        self.region = region;
        Ok(())
    }

    pub fn set_language<S: StateStore>(
        &mut self,
        store: &mut S,
        language: Option<String>,
    ) -> Result<()> {
        store.set(
            Scope::Session,
            keys::SELECTED_LANGUAGE,
            language.as_deref().unwrap_or(""),
        )?;
        self.language = language;
        Ok(())
    }

    pub fn set_favorites_only<S: StateStore>(&mut self, store: &mut S, on: bool) -> Result<()> {
        set_bool(store, Scope::Session, keys::SHOW_ONLY_FAVORITES, on)?;
        self.favorites_only = on;
        Ok(())
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// The visible result set: a pure conjunction of the four predicates, evaluated
/// per catalog entry in catalog order. All predicates must pass:
///
/// 1. favorites-only: membership in the favorites set, by natural key
/// 2. region: exact, case-sensitive equality
/// 3. language: the entry's language display names contain the filter value
/// 4. search: lower-cased substring match on the common name (empty matches all)
pub fn visible<'a>(
    catalog: &'a Catalog,
    favorites: &SelectionSet,
    criteria: &Criteria,
) -> Vec<&'a Country> {
    let search = criteria.search.to_lowercase();
    catalog
        .countries()
        .iter()
        .filter(|country| {
            (!criteria.favorites_only || favorites.contains(&country.name))
                && criteria
                    .region
                    .map_or(true, |region| country.region == region.as_str())
                && criteria.language.as_ref().map_or(true, |language| {
                    country.languages.values().any(|l| l == language)
                })
                && country.name.to_lowercase().contains(&search)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{country, france, japan};
    use crate::store::memory::MemoryStore;

    fn sample_catalog() -> Catalog {
        Catalog::install(vec![
            japan(),
            france(),
            country("Brazil", "Americas", ("por", "Portuguese"), 214000000),
        ])
    }

    fn empty_favorites(store: &MemoryStore) -> SelectionSet {
        SelectionSet::hydrate(store, keys::FAVORITES)
    }

    #[test]
    fn default_criteria_match_everything_in_order() {
        let store = MemoryStore::new();
        let catalog = sample_catalog();
        let favorites = empty_favorites(&store);
        let result = visible(&catalog, &favorites, &Criteria::default());
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Japan", "France", "Brazil"]);
    }

    #[test]
    fn result_is_a_subsequence_of_the_catalog() {
        let store = MemoryStore::new();
        let catalog = sample_catalog();
        let favorites = empty_favorites(&store);
        let criteria = Criteria {
            search: "a".to_string(),
            ..Criteria::default()
        };
        let result = visible(&catalog, &favorites, &criteria);

        let mut catalog_iter = catalog.countries().iter();
        for found in &result {
            assert!(catalog_iter.any(|c| std::ptr::eq(c, *found)));
        }
    }

    #[test]
    fn region_filter_is_exact() {
        let store = MemoryStore::new();
        let catalog = sample_catalog();
        let favorites = empty_favorites(&store);
        let criteria = Criteria {
            region: Some(Region::Asia),
            ..Criteria::default()
        };
        let names: Vec<&str> = visible(&catalog, &favorites, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Japan"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = MemoryStore::new();
        let catalog = sample_catalog();
        let favorites = empty_favorites(&store);
        let criteria = Criteria {
            search: "fra".to_string(),
            ..Criteria::default()
        };
        let names: Vec<&str> = visible(&catalog, &favorites, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["France"]);
    }

    #[test]
    fn language_matches_display_names_not_codes() {
        let store = MemoryStore::new();
        let catalog = sample_catalog();
        let favorites = empty_favorites(&store);

        let criteria = Criteria {
            language: Some("Portuguese".to_string()),
            ..Criteria::default()
        };
        let names: Vec<&str> = visible(&catalog, &favorites, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Brazil"]);

        let by_code = Criteria {
            language: Some("por".to_string()),
            ..Criteria::default()
        };
        assert!(visible(&catalog, &favorites, &by_code).is_empty());
    }

    #[test]
    fn favorites_only_overrides_other_matches() {
        let mut store = MemoryStore::new();
        let catalog = sample_catalog();
        let mut favorites = empty_favorites(&store);
        favorites.toggle(&mut store, &france()).unwrap();

        // Japan would match an empty search, but is not a favorite.
        let criteria = Criteria {
            favorites_only: true,
            ..Criteria::default()
        };
        let names: Vec<&str> = visible(&catalog, &favorites, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["France"]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let mut store = MemoryStore::new();
        let catalog = sample_catalog();
        let mut favorites = empty_favorites(&store);
        favorites.toggle(&mut store, &france()).unwrap();

        let criteria = Criteria {
            favorites_only: true,
            region: Some(Region::Asia),
            ..Criteria::default()
        };
        assert!(visible(&catalog, &favorites, &criteria).is_empty());
    }

    #[test]
    fn setters_persist_and_hydrate_round_trips() {
        let mut store = MemoryStore::new();
        let mut criteria = Criteria::default();
        criteria.set_search(&mut store, "jap".to_string()).unwrap();
        criteria.set_region(&mut store, Some(Region::Asia)).unwrap();
        criteria
            .set_language(&mut store, Some("Japanese".to_string()))
            .unwrap();
        criteria.set_favorites_only(&mut store, true).unwrap();

        let hydrated = Criteria::hydrate(&store);
        assert_eq!(hydrated, criteria);
    }

    #[test]
    fn hydrate_defaults_on_empty_store() {
        let store = MemoryStore::new();
        assert!(Criteria::hydrate(&store).is_default());
    }

    #[test]
    fn hydrate_tolerates_malformed_region() {
        let mut store = MemoryStore::new();
        store
            .set(Scope::Session, keys::SELECTED_REGION, "Atlantis")
            .unwrap();
        let hydrated = Criteria::hydrate(&store);
        assert_eq!(hydrated.region, None);
    }

    #[test]
    fn clearing_a_filter_persists_the_empty_value() {
        let mut store = MemoryStore::new();
        let mut criteria = Criteria::default();
        criteria.set_region(&mut store, Some(Region::Asia)).unwrap();
        criteria.set_region(&mut store, None).unwrap();
        assert_eq!(
            store.get(Scope::Session, keys::SELECTED_REGION).as_deref(),
            Some("")
        );
        assert_eq!(Criteria::hydrate(&store).region, None);
    }
}
