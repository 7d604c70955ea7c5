// Configuration for module name construction

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Package names used when building module paths
///
/// The defaults produce `protonfixes.gamefixes-{store}.{id}` and
/// `localfixes.{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root package of the bundled fixes
    #[serde(default = "default_fix_package")]
    pub fix_package: String,

    /// Root package of user-provided fixes
    #[serde(default = "default_local_package")]
    pub local_package: String,

    /// Module stem used instead of the game id when a default fix is requested
    #[serde(default = "default_default_module")]
    pub default_module: String,

    /// Prefix of each per-store package under `fix_package`
    #[serde(default = "default_family_prefix")]
    pub family_prefix: String,
}

// Default values
fn default_fix_package() -> String {
    "protonfixes".to_string()
}
fn default_local_package() -> String {
    "localfixes".to_string()
}
fn default_default_module() -> String {
    "default".to_string()
}
fn default_family_prefix() -> String {
    "gamefixes-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fix_package: default_fix_package(),
            local_package: default_local_package(),
            default_module: default_default_module(),
            family_prefix: default_family_prefix(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Package names must be non-empty dotless segments
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_segment("fix_package", &self.fix_package)?;
        check_segment("local_package", &self.local_package)?;
        check_segment("default_module", &self.default_module)?;
        if self.family_prefix.contains('.') {
            return Err(ConfigError::Invalid {
                field: "family_prefix",
                reason: "must not contain '.'".to_string(),
            });
        }
        Ok(())
    }
}

fn check_segment(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if value.contains('.') {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("`{}` must not contain '.'", value),
        });
    }
    Ok(())
}
