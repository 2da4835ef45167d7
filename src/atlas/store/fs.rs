use super::{Scope, StateStore};
use crate::error::{AtlasError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Production store. Each durable key is one file under the data directory;
/// session keys live in an in-process map, which gives them exactly the
/// required lifetime: the process is the session.
pub struct FileStore {
    root: PathBuf,
    session: HashMap<String, String>,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            session: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AtlasError::Io)?;
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        match scope {
            Scope::Durable => fs::read_to_string(self.key_path(key)).ok(),
            Scope::Session => self.session.get(key).cloned(),
        }
    }

    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<()> {
        match scope {
            Scope::Durable => {
                self.ensure_root()?;
                // Write-then-rename keeps each key's update atomic.
                let tmp = self.root.join(format!(".{}.tmp", key));
                fs::write(&tmp, value).map_err(AtlasError::Io)?;
                fs::rename(&tmp, self.key_path(key)).map_err(AtlasError::Io)?;
            }
            Scope::Session => {
                self.session.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    fn remove(&mut self, scope: Scope, key: &str) -> Result<()> {
        match scope {
            Scope::Durable => {
                let path = self.key_path(key);
                if path.exists() {
                    fs::remove_file(path).map_err(AtlasError::Io)?;
                }
            }
            Scope::Session => {
                self.session.remove(key);
            }
        }
        Ok(())
    }
}
