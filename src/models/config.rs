//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::services::MAX_GENERATED_RECORDS;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Query, paging and gating behavior
    #[serde(default)]
    pub engine: EngineConfig,

    /// Where notice records come from
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Chat proxy settings
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.engine.page_size == 0 {
            return Err(AppError::validation("engine.page_size must be > 0"));
        }
        if self.engine.preview_limit == 0 {
            return Err(AppError::validation("engine.preview_limit must be > 0"));
        }
        if self.engine.max_visible_pages == 0 {
            return Err(AppError::validation(
                "engine.max_visible_pages must be > 0",
            ));
        }
        if self.dataset.generate_count == 0 {
            return Err(AppError::validation("dataset.generate_count must be > 0"));
        }
        if self.dataset.generate_count > MAX_GENERATED_RECORDS {
            return Err(AppError::validation(format!(
                "dataset.generate_count must be <= {MAX_GENERATED_RECORDS}"
            )));
        }
        if self.chat.timeout_secs == 0 {
            return Err(AppError::validation("chat.timeout_secs must be > 0"));
        }
        if self.chat.model.trim().is_empty() {
            return Err(AppError::validation("chat.model is empty"));
        }
        Url::parse(&self.chat.endpoint)
            .map_err(|e| AppError::validation(format!("chat.endpoint is invalid: {e}")))?;
        Ok(())
    }
}

/// Whether notices past their claim deadline are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Drop every notice whose deadline has passed, whatever the filters say
    #[default]
    Hide,
    /// Keep expired notices in results
    Show,
}

/// Query, paging and gating settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rows per page for signed-in viewers
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Rows shown to anonymous viewers
    #[serde(default = "defaults::preview_limit")]
    pub preview_limit: usize,

    /// Page numbers shown at once in the pager
    #[serde(default = "defaults::max_visible_pages")]
    pub max_visible_pages: usize,

    #[serde(default)]
    pub expired: ExpiryPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            preview_limit: defaults::preview_limit(),
            max_visible_pages: defaults::max_visible_pages(),
            expired: ExpiryPolicy::default(),
        }
    }
}

/// Record source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON file of notice records; generated data is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Number of records to generate
    #[serde(default = "defaults::generate_count")]
    pub generate_count: usize,

    /// Generator seed
    #[serde(default = "defaults::seed")]
    pub seed: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            generate_count: defaults::generate_count(),
            seed: defaults::seed(),
        }
    }
}

impl DatasetConfig {
    /// Dataset path resolved against `base_path` when relative.
    pub fn resolved_path(&self, base_path: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                base_path.join(p)
            }
        })
    }
}

/// Chat proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "defaults::chat_endpoint")]
    pub endpoint: String,

    #[serde(default = "defaults::chat_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for proxy requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::chat_endpoint(),
            model: defaults::chat_model(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Engine defaults
    pub fn page_size() -> usize {
        25
    }
    pub fn preview_limit() -> usize {
        15
    }
    pub fn max_visible_pages() -> usize {
        7
    }

    // Dataset defaults
    pub fn generate_count() -> usize {
        150
    }
    pub fn seed() -> u64 {
        2024
    }

    // Chat defaults
    pub fn chat_endpoint() -> String {
        "https://requests.magicpatterns.com/openai/proxy".into()
    }
    pub fn chat_model() -> String {
        "gpt-4-turbo".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        concat!("notices/", env!("CARGO_PKG_VERSION")).into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
