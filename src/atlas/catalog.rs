//! The immutable country catalog and its data sources.
//!
//! The catalog is loaded once per process through a [`CatalogSource`] and never
//! mutated afterwards. A failed or malformed load is not fatal: the session
//! falls back to an empty catalog and surfaces a warning to the caller.

use crate::error::{AtlasError, Result};
use crate::model::Country;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// A one-shot bulk read of country records.
///
/// Implementations must not retry or block indefinitely; the session treats a
/// single `Err` as "no catalog this run".
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<Country>>;
}

/// The ordered catalog plus the derived language index.
///
/// The language set is computed when records are installed, so it can never be
/// partially stale with respect to the record list.
#[derive(Debug, Default)]
pub struct Catalog {
    countries: Vec<Country>,
    languages: BTreeSet<String>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Install a freshly loaded record list, recomputing the language index.
    pub fn install(countries: Vec<Country>) -> Self {
        let languages = countries
            .iter()
            .flat_map(|c| c.languages.values().cloned())
            .collect();
        Self {
            countries,
            languages,
        }
    }

    /// All records, in source order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Distinct language display names across the whole catalog.
    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    /// Look a record up by its natural key.
    pub fn get(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// A REST Countries v3.1 JSON dump on disk.
pub struct DatasetFile {
    path: PathBuf,
}

impl DatasetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for DatasetFile {
    fn load(&self) -> Result<Vec<Country>> {
        let raw = fs::read_to_string(&self.path).map_err(AtlasError::Io)?;
        let dtos: Vec<CountryDto> =
            serde_json::from_str(&raw).map_err(AtlasError::Serialization)?;
        Ok(dtos.into_iter().filter_map(CountryDto::into_country).collect())
    }
}

// Wire shape of the dataset. Only the consumed fields are declared; everything
// else in the dump is ignored. Kept separate from the model so stored
// snapshots use our own flat shape, not the source's nested one.

#[derive(Debug, Deserialize)]
struct CountryDto {
    name: Option<NameDto>,
    #[serde(default)]
    capital: Option<Vec<String>>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    subregion: Option<String>,
    #[serde(default)]
    cca3: Option<String>,
    #[serde(default)]
    population: Option<u64>,
    #[serde(default)]
    languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    timezones: Option<Vec<String>>,
    #[serde(default)]
    borders: Option<Vec<String>>,
    #[serde(default)]
    flags: Option<FlagsDto>,
}

#[derive(Debug, Deserialize)]
struct NameDto {
    common: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlagsDto {
    #[serde(default)]
    png: Option<String>,
}

impl CountryDto {
    /// Map the wire record into the model. A record with no common name has no
    /// usable key and is skipped.
    fn into_country(self) -> Option<Country> {
        let name = self.name.and_then(|n| n.common)?;
        Some(Country {
            name,
            capital: self.capital.and_then(|mut c| {
                if c.is_empty() {
                    None
                } else {
                    Some(c.remove(0))
                }
            }),
            region: self.region.unwrap_or_default(),
            subregion: self.subregion,
            cca3: self.cca3.unwrap_or_default(),
            population: self.population,
            languages: self.languages.unwrap_or_default(),
            timezones: self.timezones,
            borders: self.borders,
            flag: self.flags.and_then(|f| f.png).unwrap_or_default(),
        })
    }
}
