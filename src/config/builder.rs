use toml::Value;
use tracing::trace;

use super::access::{get_value, is_truthy, set_value};
use super::path::{is_valid_segment, ConfigPath};
use super::registry::{default_bindings, Binding, Bindings, Registry};
use super::tree::TreeStore;
use super::ConfigError;
use crate::Error;

/// Dotted-path access to named configuration trees.
///
/// A path's first segment picks a root registered in the [`Registry`]; the
/// remaining segments walk nested tables inside that root's tree.
///
/// `get` and `set` never fail loudly: an invalid path, an unknown root or a
/// missing key turns into the caller's default (for `get`) or `false` (for
/// `set`). Use [`try_get`](Self::try_get) and [`try_set`](Self::try_set) to
/// see why a lookup failed.
///
/// Found values that are falsy (`0`, `0.0`, `false`, `""`, `"0"`, empty arrays
/// and tables) are also replaced by the default in `get`. A stored `false` is
/// indistinguishable from an absent key.
///
/// ## Example
///
/// ```
/// use dotted_config::{Config, TreeStore, Value};
///
/// let store = TreeStore::new();
/// store.insert(
///     "db_config",
///     toml::from_str::<toml::Table>(
///         r#"
///         encoding = "UTF8"
///
///         [drivers.mysql]
///         host = "localhost"
///         "#,
///     )?,
/// );
///
/// let config = Config::new(store);
/// assert_eq!(config.get("database.encoding", Value::from("")), Value::from("UTF8"));
///
/// assert!(config.set("database.drivers.mysql.host", "10.0.0.1"));
/// assert_eq!(
///     config.get_opt("database.drivers.mysql.host"),
///     Some(Value::from("10.0.0.1"))
/// );
///
/// assert!(!config.set("database.drivers.oracle", "x"));
/// assert_eq!(config.get("database.engine", "innoDB"), Value::from("innoDB"));
/// # Ok::<(), toml::de::Error>(())
/// ```
#[derive(Debug)]
pub struct Config {
    registry: Registry,
}

impl Config {
    /// Creates a builder for a custom set of roots.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Creates a config with the default `app` and `database` roots bound to
    /// the `app_config` and `db_config` entries of `store`.
    pub fn new(store: TreeStore) -> Self {
        Self {
            registry: Registry::with_defaults(store),
        }
    }

    /// The root bindings this config resolves paths against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the value at `path`, or `default` if there is none.
    pub fn get(&self, path: &str, default: impl Into<Value>) -> Value {
        self.get_opt(path).unwrap_or_else(|| default.into())
    }

    /// Returns the value at `path`, or `None` if there is none.
    pub fn get_opt(&self, path: &str) -> Option<Value> {
        self.try_get(path).ok()
    }

    /// Looks up `path`, reporting why nothing usable was found.
    pub fn try_get(&self, path: &str) -> Result<Value, ConfigError> {
        let parsed = ConfigPath::parse(path)?;
        let tree = self.registry.resolve(parsed.root())?;
        let table = tree.read();

        let value =
            get_value(&table, parsed.keys()).ok_or_else(|| ConfigError::KeyNotFound(path.to_string()))?;
        if !is_truthy(value) {
            trace!(path, "config value is falsy");
            return Err(ConfigError::FalsyValue(path.to_string()));
        }

        trace!(path, "config value found");
        Ok(value.clone())
    }

    /// Overwrites the existing value at `path`.
    ///
    /// Returns `false` without touching any tree if the path is invalid, the
    /// root is unknown, or any key along the path is missing.
    pub fn set(&self, path: &str, new_value: impl Into<Value>) -> bool {
        self.try_set(path, new_value).is_ok()
    }

    /// Overwrites the existing value at `path`, reporting why it could not.
    pub fn try_set(&self, path: &str, new_value: impl Into<Value>) -> Result<(), ConfigError> {
        let parsed = ConfigPath::parse(path)?;
        let tree = self.registry.resolve(parsed.root())?;
        let mut table = tree.write();

        if !set_value(&mut table, parsed.keys(), new_value.into()) {
            return Err(ConfigError::KeyNotFound(path.to_string()));
        }

        trace!(path, "config value updated");
        Ok(())
    }

    /// Replaces the root bindings with `mapping`; an empty mapping does nothing.
    ///
    /// Values are either [`TreeHandle`](super::TreeHandle)s or names of trees
    /// in the store:
    ///
    /// ```
    /// # use dotted_config::{Config, TreeStore};
    /// let store = TreeStore::new();
    /// store.insert("sockets_config", toml::from_str::<toml::Table>(r#"port = "3009""#)?);
    ///
    /// let config = Config::new(store);
    /// config.add_files_config([("network", "sockets_config")]);
    /// assert!(config.get_opt("network.port").is_some());
    /// # Ok::<(), toml::de::Error>(())
    /// ```
    pub fn add_files_config<I, K, B>(&self, mapping: I)
    where
        I: IntoIterator<Item = (K, B)>,
        K: Into<String>,
        B: Into<Binding>,
    {
        self.registry.override_bindings(mapping);
    }
}

/// Builder for a [`Config`] with explicitly chosen roots.
///
/// Roots added with [`with_root`](Self::with_root) replace the default `app`
/// and `database` bindings; with none added, the defaults apply.
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder {
    store: Option<TreeStore>,
    roots: Vec<(String, Binding)>,
}

impl ConfigBuilder {
    /// Sets the store that named bindings resolve against.
    ///
    /// Defaults to a fresh, empty store.
    pub fn with_store(mut self, store: TreeStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Binds `root` to a tree handle or to the name of a tree in the store.
    ///
    /// Later bindings for the same root win.
    pub fn with_root(mut self, root: impl Into<String>, binding: impl Into<Binding>) -> Self {
        self.roots.push((root.into(), binding.into()));
        self
    }

    /// Builds the config, rejecting root names no path could address.
    pub fn build(self) -> Result<Config, Error> {
        let store = self.store.unwrap_or_default();

        let bindings = if self.roots.is_empty() {
            default_bindings()
        } else {
            let mut bindings = Bindings::new();
            for (root, binding) in self.roots {
                if !is_valid_segment(&root) {
                    return Err(Error::InvalidRootName(root));
                }
                bindings.insert(root, binding);
            }
            bindings
        };

        Ok(Config {
            registry: Registry::with_bindings(store, bindings),
        })
    }
}
