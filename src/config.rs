//! Search configuration, loaded from TOML.
//!
//! Every field is optional in the file; missing values fall back to the
//! built-in defaults. Example:
//!
//! ```toml
//! default_limit = 5
//!
//! [weights]
//! fuzzy_max_distance = 2
//! multi_term_bonus = 25
//! ```

use crate::error::ConfigError;
use crate::search::{MIN_TERM_LENGTH, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result count used when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Query tokens shorter than this many characters are dropped.
    pub min_term_length: usize,
    pub default_limit: usize,
    pub weights: ScoringWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_term_length: MIN_TERM_LENGTH,
            default_limit: DEFAULT_LIMIT,
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()
    }

    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::info!(path = %path.display(), "Loaded search configuration");
        Ok(config)
    }

    /// `<config dir>/employee-search/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("employee-search").join("config.toml"))
    }

    /// Load `explicit` if given, else the default location if it exists, else defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("No search configuration found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.min_term_length == 0 {
            return Err(ConfigError::Invalid(
                "min_term_length must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
