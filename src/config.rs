//! TOML configuration for the command-line tool.
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [pipeline]
//! operations = ["trim", "lowercase", "remove_extra_spaces"]
//!
//! [replace]
//! censor_phone = true
//! fix_spacing = true
//!
//! [[replace.contractions]]
//! from = "can't"
//! to = "cannot"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{TextSiftError, TextSiftResult};
use crate::transform::{CleanOperation, ReplaceOptions};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "textsift.toml";

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub replace: ReplaceOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Operations run by `clean` when none are given on the command line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub operations: Vec<CleanOperation>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(contents: &str, path: &Path) -> TextSiftResult<Self> {
        toml::from_str(contents).map_err(|e| TextSiftError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: &Path) -> TextSiftResult<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "configuration file not found; using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| TextSiftError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&contents, path)
    }
}
