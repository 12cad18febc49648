//! Project configuration stored in quizbank/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file location relative to the project root
pub const CONFIG_PATH: &str = "quizbank/config.toml";

const DEFAULT_STORAGE_FILE: &str = "quizbank/questions.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Question collection file, relative to the project root unless absolute
    #[serde(default = "default_storage_file")]
    pub storage_file: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when neither -v nor QUIZBANK_LOG is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_storage_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            logging: LoggingConfig::default(),
        }
    }
}

impl QuizbankConfig {
    /// Load config from quizbank/config.toml, falling back to defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_PATH);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: QuizbankConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to quizbank/config.toml
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let config_path = project_root.join(CONFIG_PATH);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(())
    }

    /// Absolute location of the question collection
    pub fn storage_path(&self, project_root: &Path) -> PathBuf {
        if self.storage_file.is_absolute() {
            self.storage_file.clone()
        } else {
            project_root.join(&self.storage_file)
        }
    }
}
