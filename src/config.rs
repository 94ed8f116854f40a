//! User configuration loaded from `config.toml` inside the application data
//! directory. Every key is optional; a missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::BaseDirs;
use serde::Deserialize;

use crate::store::DEFAULT_MAX_LEN;

/// Folder name used beneath the user's home directory for application data.
pub const DATA_DIR_NAME: &str = ".library-manager";
/// Config file name stored inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Log file written when the config does not name one.
const DEFAULT_LOG_FILE: &str = "library-manager.log";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fields: FieldConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bounds applied to the title and author fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct FieldConfig {
    pub max_len: usize,
    pub overflow: OverflowPolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            overflow: OverflowPolicy::default(),
        }
    }
}

/// What to do with title/author text longer than `max_len`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the first `max_len` characters.
    #[default]
    Truncate,
    /// Refuse the add and tell the user.
    Reject,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log file name, relative to the data directory unless absolute.
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load `config.toml` from `data_dir`.
    ///
    /// A missing file is not an error. A file that exists but fails to parse
    /// or validate is, so typos do not silently fall back to defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.fields.max_len == 0 {
            bail!("fields.max_len must be greater than zero");
        }
        if self.logging.file.file_name().is_none() {
            bail!("logging.file must name a file");
        }
        Ok(())
    }

    /// Absolute path of the log file for this configuration.
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        if self.logging.file.is_absolute() {
            self.logging.file.clone()
        } else {
            data_dir.join(&self.logging.file)
        }
    }
}

/// Resolve the application data directory inside the user's home.
pub fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
