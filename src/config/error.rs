use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid config path: '{0}'")]
    InvalidPath(String),

    #[error("no config tree bound to root '{0}'")]
    UnknownRoot(String),

    #[error("config tree for root '{0}' is empty")]
    EmptyRoot(String),

    #[error("config key not found: {0}")]
    KeyNotFound(String),

    #[error("config value at '{0}' is empty or falsy")]
    FalsyValue(String),

    #[error("value does not serialize to a table")]
    NotATable,

    #[error("failed to serialize config tree: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    /// True for every failure that `get` and `set` report as "not found":
    /// unknown or empty roots, missing keys and falsy values.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownRoot(_) | Self::EmptyRoot(_) | Self::KeyNotFound(_) | Self::FalsyValue(_)
        )
    }
}
