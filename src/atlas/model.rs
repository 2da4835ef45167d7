use crate::error::AtlasError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Placeholder for missing optional fields in any rendered output.
pub const NOT_AVAILABLE: &str = "N/A";

/// The five regions the catalog source uses. A filter with no region matches
/// everything ("All Regions").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    Oceania,
    Americas,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
        Region::Americas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
            Region::Americas => "Americas",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AtlasError::Api(format!("Unknown region: {}", s)))
    }
}

/// One catalog entry. The common name is the natural key: selection sets and
/// the favorites filter compare records by name only, never by full equality.
///
/// Records are created once when the catalog loads and never mutated. Selection
/// sets store full clones of them (snapshots), so a persisted favorite survives
/// a changed dataset with its old data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub capital: Option<String>,
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    pub cca3: String,
    #[serde(default)]
    pub population: Option<u64>,
    /// Language code -> display name. BTreeMap keeps the joined display order
    /// stable across runs.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub flag: String,
}

impl Country {
    /// Language display names joined for rendering, in code order.
    pub fn languages_joined(&self) -> String {
        self.languages
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn population_display(&self) -> String {
        match self.population {
            Some(n) => format_population(n),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Digit grouping with commas, e.g. 125000000 -> "125,000,000".
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_population_groups_digits() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(67000000), "67,000,000");
        assert_eq!(format_population(125000000), "125,000,000");
    }

    #[test]
    fn region_parse_is_case_insensitive() {
        assert_eq!("asia".parse::<Region>().unwrap(), Region::Asia);
        assert_eq!("Americas".parse::<Region>().unwrap(), Region::Americas);
        assert!("Atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn languages_join_in_code_order() {
        let mut languages = BTreeMap::new();
        languages.insert("fra".to_string(), "French".to_string());
        languages.insert("bre".to_string(), "Breton".to_string());
        let country = Country {
            name: "France".into(),
            capital: Some("Paris".into()),
            region: "Europe".into(),
            subregion: Some("Western Europe".into()),
            cca3: "FRA".into(),
            population: Some(67000000),
            languages,
            timezones: None,
            borders: None,
            flag: String::new(),
        };
        assert_eq!(country.languages_joined(), "Breton, French");
    }

    #[test]
    fn missing_population_renders_placeholder() {
        let country = Country {
            name: "Bouvet Island".into(),
            capital: None,
            region: "Antarctic".into(),
            subregion: None,
            cca3: "BVT".into(),
            population: None,
            languages: BTreeMap::new(),
            timezones: None,
            borders: None,
            flag: String::new(),
        };
        assert_eq!(country.population_display(), NOT_AVAILABLE);
    }
}
