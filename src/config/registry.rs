//! Root name to tree bindings.
//!
//! The binding table is published through an [`ArcSwap`]: readers load a
//! snapshot without locking and an override swaps in a fully built table, so
//! a lookup never observes a half-applied override.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, warn};

use super::path::is_valid_segment;
use super::tree::{TreeHandle, TreeStore};
use super::ConfigError;

/// Root bound to the application settings tree by default.
pub const APP_ROOT: &str = "app";
/// Root bound to the database settings tree by default.
pub const DATABASE_ROOT: &str = "database";
/// Store name the default `app` root points at.
pub const APP_TREE: &str = "app_config";
/// Store name the default `database` root points at.
pub const DATABASE_TREE: &str = "db_config";

/// What a root name refers to.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A tree handle held directly by the registry.
    Tree(TreeHandle),
    /// The name of a tree in the host's [`TreeStore`], looked up on each resolve.
    Named(String),
}

impl From<TreeHandle> for Binding {
    fn from(tree: TreeHandle) -> Self {
        Self::Tree(tree)
    }
}

impl From<&str> for Binding {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Binding {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

pub(crate) type Bindings = HashMap<String, Binding>;

#[derive(Debug)]
pub struct Registry {
    store: TreeStore,
    bindings: ArcSwap<Bindings>,
}

impl Registry {
    /// Creates a registry with the default `app` and `database` roots, both
    /// resolved through `store`.
    pub fn with_defaults(store: TreeStore) -> Self {
        Self::with_bindings(store, default_bindings())
    }

    pub(crate) fn with_bindings(store: TreeStore, bindings: Bindings) -> Self {
        Self {
            store,
            bindings: ArcSwap::from_pointee(bindings),
        }
    }

    /// Returns the tree bound to `root`.
    ///
    /// Unbound roots, named bindings missing from the store and empty trees
    /// all fail; an empty tree is treated as not yet populated.
    pub fn resolve(&self, root: &str) -> Result<TreeHandle, ConfigError> {
        let bindings = self.bindings.load();

        let tree = match bindings.get(root) {
            Some(Binding::Tree(tree)) => tree.clone(),
            Some(Binding::Named(name)) => self
                .store
                .get(name)
                .ok_or_else(|| ConfigError::UnknownRoot(root.to_string()))?,
            None => return Err(ConfigError::UnknownRoot(root.to_string())),
        };

        if tree.is_empty() {
            return Err(ConfigError::EmptyRoot(root.to_string()));
        }

        Ok(tree)
    }

    /// Replaces every binding with `mapping`.
    ///
    /// An empty mapping leaves the current bindings in place. Any other mapping
    /// is swapped in whole, including root names no path can address.
    pub fn override_bindings<I, K, B>(&self, mapping: I)
    where
        I: IntoIterator<Item = (K, B)>,
        K: Into<String>,
        B: Into<Binding>,
    {
        let mut next = Bindings::new();
        for (root, binding) in mapping {
            let root = root.into();
            if !is_valid_segment(&root) {
                warn!(root = %root, "config root name is unreachable by any path");
            }
            next.insert(root, binding.into());
        }

        if next.is_empty() {
            debug!("empty config root mapping, keeping current bindings");
            return;
        }

        debug!(roots = next.len(), "replacing config root bindings");
        self.bindings.store(Arc::new(next));
    }

    /// Whether `root` is currently bound.
    pub fn contains(&self, root: &str) -> bool {
        self.bindings.load().contains_key(root)
    }

    /// Bound root names in sorted order.
    pub fn roots(&self) -> Vec<String> {
        let mut roots: Vec<String> = self.bindings.load().keys().cloned().collect();
        roots.sort();
        roots
    }
}

pub(crate) fn default_bindings() -> Bindings {
    Bindings::from([
        (APP_ROOT.to_string(), Binding::from(APP_TREE)),
        (DATABASE_ROOT.to_string(), Binding::from(DATABASE_TREE)),
    ])
}
