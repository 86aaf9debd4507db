use super::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FIXTURE_PREFIX: &str = "fixture-";

fn default_prefix() -> String {
    DEFAULT_FIXTURE_PREFIX.to_string()
}

/// Knobs shared by every fixture in a test binary.
///
/// All fields are optional in YAML; an empty document yields the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureSettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub temp_root: Option<PathBuf>,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            temp_root: None,
            log_path: None,
        }
    }
}

impl FixtureSettings {
    pub fn from_yaml_str(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&raw, &path.display().to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::Settings("`prefix` must be non-empty".to_string()));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(ConfigError::Settings(
                "`prefix` must not contain path separators".to_string(),
            ));
        }
        if let Some(root) = &self.temp_root {
            if !root.is_absolute() {
                return Err(ConfigError::Settings(
                    "`temp_root` must be an absolute path".to_string(),
                ));
            }
        }
        if let Some(log_path) = &self.log_path {
            if !log_path.is_absolute() {
                return Err(ConfigError::Settings(
                    "`log_path` must be an absolute path".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Directory new root paths are allocated under.
    pub fn allocation_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }
}
