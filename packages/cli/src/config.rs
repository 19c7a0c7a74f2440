use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_editor::{FileStore, IdGenerator, SequentialIds, TimestampIds, DEFAULT_MAX_ENTRIES};

pub const DEFAULT_CONFIG_NAME: &str = "storefront.config.json";

/// Storefront project configuration file format. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Directory holding the saved documents
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Store key of the page layout
    #[serde(default = "default_site_key")]
    pub site_key: String,

    /// Store key of the theme customization
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    /// Undo levels kept per session (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub id_strategy: IdStrategy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `<type>-<millis>-<n>`
    #[default]
    Timestamp,
    /// `<type>-<n>`, reproducible across runs
    Sequential,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_site_key() -> String {
    "site".to_string()
}

fn default_theme_key() -> String {
    "theme".to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_MAX_ENTRIES
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Invalid {}: {}", config_path.display(), e)
            })?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the data directory
    pub fn get_data_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.data_dir)
    }

    pub fn store(&self, cwd: &str) -> FileStore {
        FileStore::new(self.get_data_dir(cwd))
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Timestamp => Box::new(TimestampIds::new()),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            site_key: default_site_key(),
            theme_key: default_theme_key(),
            history_limit: default_history_limit(),
            id_strategy: IdStrategy::default(),
        }
    }
}
