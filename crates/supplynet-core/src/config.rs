use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ErrorCode;

/// Location of the project config relative to the project root.
pub const PROJECT_CONFIG_PATH: &str = ".supplynet/config.toml";

/// Upper bound for any configured risk score.
pub const SCORE_CEILING: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid risk weights: {0}")]
    Invalid(String),
}

impl ConfigError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } | Self::Parse { .. } => ErrorCode::ConfigParseError,
            Self::Invalid(_) => ErrorCode::InvalidConfig,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub risk: RiskWeights,
}

/// Weights for the composite risk formula:
///
/// `score = min(base + connection_weight * degree + cycle? + bridge?, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskWeights {
    #[serde(default = "default_base_score")]
    pub base_score: u32,
    #[serde(default = "default_connection_weight")]
    pub connection_weight: u32,
    #[serde(default = "default_cycle_penalty")]
    pub cycle_penalty: u32,
    #[serde(default = "default_bridge_penalty")]
    pub bridge_penalty: u32,
    #[serde(default = "default_max_score")]
    pub max_score: u32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            connection_weight: default_connection_weight(),
            cycle_penalty: default_cycle_penalty(),
            bridge_penalty: default_bridge_penalty(),
            max_score: default_max_score(),
        }
    }
}

impl RiskWeights {
    /// Check that every score the weights can produce fits in `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `max_score` is outside
    /// `1..=100` or `base_score` exceeds `max_score`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_score == 0 || self.max_score > SCORE_CEILING {
            return Err(ConfigError::Invalid(format!(
                "max_score must be within 1..={SCORE_CEILING}, got {}",
                self.max_score
            )));
        }
        if self.base_score > self.max_score {
            return Err(ConfigError::Invalid(format!(
                "base_score ({}) must not exceed max_score ({})",
                self.base_score, self.max_score
            )));
        }
        Ok(())
    }
}

/// Load `.supplynet/config.toml` under `project_root`, or defaults when absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed, or
/// validated.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = project_root.join(PROJECT_CONFIG_PATH);
    if !path.exists() {
        debug!(path = %path.display(), "no project config, using defaults");
        return Ok(ProjectConfig::default());
    }
    load_config_file(&path)
}

/// Load and validate an explicit config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str::<ProjectConfig>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    config.risk.validate()?;
    debug!(path = %path.display(), risk = ?config.risk, "loaded config");
    Ok(config)
}

/// Resolve the effective config: an explicit path wins over discovery.
///
/// # Errors
///
/// Propagates [`load_config_file`] / [`load_project_config`] failures.
pub fn resolve_config(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<ProjectConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_file(path),
        None => load_project_config(project_root),
    }
}

const fn default_base_score() -> u32 {
    20
}

const fn default_connection_weight() -> u32 {
    5
}

const fn default_cycle_penalty() -> u32 {
    40
}

const fn default_bridge_penalty() -> u32 {
    20
}

const fn default_max_score() -> u32 {
    SCORE_CEILING
}
