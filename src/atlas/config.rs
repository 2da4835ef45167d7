use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DATASET_FILENAME: &str = "countries.json";

/// Configuration for atlas, stored as config.json in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Path to the catalog dataset. Defaults to countries.json in the data
    /// directory when unset.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

impl AtlasConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AtlasError::Io)?;
        let config: AtlasConfig =
            serde_json::from_str(&content).map_err(AtlasError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AtlasError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AtlasError::Serialization)?;
        fs::write(config_path, content).map_err(AtlasError::Io)?;
        Ok(())
    }

    /// The effective dataset path for a given data directory.
    pub fn dataset_path(&self, data_dir: &Path) -> PathBuf {
        self.dataset
            .clone()
            .unwrap_or_else(|| data_dir.join(DATASET_FILENAME))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "dataset" => Some(
                self.dataset
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| format!("(default: {})", DATASET_FILENAME)),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "dataset" => {
                self.dataset = Some(PathBuf::from(value));
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
