use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the dotted-config library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid config root name '{0}'")]
    InvalidRootName(String),

    #[error("application context requires a configuration")]
    MissingConfig,
}
