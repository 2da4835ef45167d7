use crate::config::AtlasConfig;
use crate::model::Country;
use std::path::PathBuf;

pub mod auth;
pub mod config;
pub mod documents;
pub mod export;
pub mod favorites;
pub mod filters;
pub mod list;
pub mod show;
pub mod status;
pub mod theme;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Country>,
    pub listed_names: Vec<String>,
    pub detail: Option<Country>,
    pub exported_to: Option<PathBuf>,
    pub config: Option<AtlasConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, countries: Vec<Country>) -> Self {
        self.listed = countries;
        self
    }

    pub fn with_listed_names(mut self, names: Vec<String>) -> Self {
        self.listed_names = names;
        self
    }

    pub fn with_detail(mut self, country: Country) -> Self {
        self.detail = Some(country);
        self
    }

    pub fn with_config(mut self, config: AtlasConfig) -> Self {
        self.config = Some(config);
        self
    }
}
