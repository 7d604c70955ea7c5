// Error types for fallible edges (config loading, strict store parsing)

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a resolver [`Config`](crate::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Returned by `Store::from_str` when the name is not on the allow-list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown store `{0}`")]
pub struct UnknownStore(pub String);
