//! Application context that owns the configuration service.

use std::sync::Arc;

use crate::{Config, Error};

/// Central application context holding the shared [`Config`].
///
/// Consumers receive the config through [`shared_config()`](Self::shared_config)
/// instead of reaching for a process-wide registry.
///
/// ## Example
///
/// ```
/// use dotted_config::{AppContext, Config, TreeStore};
///
/// let store = TreeStore::new();
/// store.insert("app_config", toml::from_str::<toml::Table>(r#"name = "demo""#)?);
///
/// let ctx = AppContext::builder()
///     .with_config(Config::new(store))
///     .build()?;
///
/// let config = ctx.shared_config();
/// assert_eq!(config.get("app.name", ""), toml::Value::from("demo"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Arc<Config>,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder { config: None }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a handle to the config for handing to another component.
    pub fn shared_config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }
}

/// Builder for constructing an [`AppContext`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    config: Option<Arc<Config>>,
}

impl AppContextBuilder {
    /// Attaches a configuration to the application context.
    pub fn with_config(self, config: Config) -> Self {
        self.with_shared_config(Arc::new(config))
    }

    /// Attaches a config that is already shared elsewhere.
    pub fn with_shared_config(mut self, config: Arc<Config>) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the `AppContext`.
    ///
    /// Returns an error if no configuration was provided.
    pub fn build(self) -> Result<AppContext, Error> {
        Ok(AppContext {
            config: self.config.ok_or(Error::MissingConfig)?,
        })
    }
}
