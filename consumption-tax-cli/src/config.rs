//! Optional TOML configuration.
//!
//! Every key may be omitted; missing keys take the [`AppConfig::default`]
//! value and unknown keys are rejected.
//!
//! ```toml
//! default_rate = "reduced"
//! log_level = "debug"
//! log_file = "tax.log"
//! log_console = true
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use consumption_tax_core::TaxRate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Rate selected when the form opens and used by `calc`.
    pub default_rate: TaxRate,
    /// `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub log_level: String,
    /// Log file, opened in append mode.
    pub log_file: Option<PathBuf>,
    /// Write log records to stderr.
    pub log_console: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_rate: TaxRate::default(),
            log_level: "info".to_string(),
            log_file: None,
            log_console: true,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}
