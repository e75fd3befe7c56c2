//! Estimator configuration
//!
//! Read from an explicit `--config` file, or from the global
//! `~/.config/docsize/config.toml`. Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocsizeError, Result};
use crate::format::DEFAULT_DECIMALS;
use crate::size::MAX_DOCUMENT_SIZE;
use crate::tree::DEFAULT_MAX_DEPTH;

const CONFIG_DIR: &str = "docsize";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "DOCSIZE_CONFIG_DIR";

/// Largest `size` accepted on a field before clamping
pub const DEFAULT_MAX_FIELD_SIZE: u64 = 999_999;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Decimal places in human-readable sizes
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

/// Bounds applied to schemas and results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Document size limit used for percentage reporting
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,

    /// Nesting depth treated as a parent cycle
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Field sizes above this are clamped on load
    #[serde(default = "default_max_field_size")]
    pub max_field_size: u64,
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

fn default_max_document_bytes() -> u64 {
    MAX_DOCUMENT_SIZE
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_max_field_size() -> u64 {
    DEFAULT_MAX_FIELD_SIZE
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: default_max_document_bytes(),
            max_depth: default_max_depth(),
            max_field_size: default_max_field_size(),
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DocsizeError::io_operation("read config", path.display(), e))?;
        let config: EstimatorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DocsizeError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| DocsizeError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Path of the global configuration file
    pub fn global_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    DocsizeError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global configuration, falling back to defaults when absent
    pub fn load_global() -> Result<Self> {
        let path = Self::global_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Resolve configuration: an explicit file wins over the global one
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_global(),
        }
    }
}
