use super::{Scope, StateStore};
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<(Scope, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.values.get(&(scope, key.to_string())).cloned()
    }

    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<()> {
        self.values
            .insert((scope, key.to_string()), value.to_string());
        Ok(())
    }

    fn remove(&mut self, scope: Scope, key: &str) -> Result<()> {
        self.values.remove(&(scope, key.to_string()));
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Country;
    use crate::store::keys;
    use std::collections::BTreeMap;

    pub fn country(name: &str, region: &str, language: (&str, &str), population: u64) -> Country {
        let mut languages = BTreeMap::new();
        languages.insert(language.0.to_string(), language.1.to_string());
        Country {
            name: name.to_string(),
            capital: Some(format!("{} City", name)),
            region: region.to_string(),
            subregion: None,
            cca3: name.chars().take(3).collect::<String>().to_uppercase(),
            population: Some(population),
            languages,
            timezones: None,
            borders: None,
            flag: String::new(),
        }
    }

    pub fn japan() -> Country {
        let mut c = country("Japan", "Asia", ("jpn", "Japanese"), 125000000);
        c.capital = Some("Tokyo".to_string());
        c.cca3 = "JPN".to_string();
        c.subregion = Some("Eastern Asia".to_string());
        c.timezones = Some(vec!["UTC+09:00".to_string()]);
        c
    }

    pub fn france() -> Country {
        let mut c = country("France", "Europe", ("fra", "French"), 67000000);
        c.capital = Some("Paris".to_string());
        c.cca3 = "FRA".to_string();
        c.subregion = Some("Western Europe".to_string());
        c.borders = Some(vec!["BEL".to_string(), "DEU".to_string(), "ESP".to_string()]);
        c
    }

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn logged_in(mut self) -> Self {
            self.store
                .set(Scope::Durable, keys::IS_LOGGED_IN, "true")
                .unwrap();
            self
        }

        pub fn with_favorites(mut self, countries: &[Country]) -> Self {
            let json = serde_json::to_string(countries).unwrap();
            self.store
                .set(Scope::Durable, keys::FAVORITES, &json)
                .unwrap();
            self
        }

        pub fn with_documents(mut self, countries: &[Country]) -> Self {
            let json = serde_json::to_string(countries).unwrap();
            self.store
                .set(Scope::Durable, keys::DOCUMENT_LIST, &json)
                .unwrap();
            self
        }

        pub fn with_session_value(mut self, key: &str, value: &str) -> Self {
            self.store.set(Scope::Session, key, value).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(Scope::Durable, "k"), None);
        store.set(Scope::Durable, "k", "v").unwrap();
        assert_eq!(store.get(Scope::Durable, "k").as_deref(), Some("v"));
        store.remove(Scope::Durable, "k").unwrap();
        assert_eq!(store.get(Scope::Durable, "k"), None);
    }

    #[test]
    fn scopes_do_not_leak() {
        let mut store = MemoryStore::new();
        store.set(Scope::Session, "k", "v").unwrap();
        assert_eq!(store.get(Scope::Durable, "k"), None);
    }
}
