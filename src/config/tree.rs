//! Shared configuration trees and the host-side store that names them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::Serialize;
use toml::{Table, Value};

use super::ConfigError;

/// A shared, lockable configuration tree.
///
/// Clones point at the same tree: a value written through one handle is
/// observed by every other clone, including the one the host kept.
#[derive(Clone, Default)]
pub struct TreeHandle {
    inner: Arc<RwLock<Table>>,
}

impl TreeHandle {
    /// Wraps `table` in a new shared tree.
    pub fn new(table: Table) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// A shared tree with no entries, resolved as "not populated".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a tree from any value that serializes to a TOML table.
    ///
    /// ## Example
    ///
    /// ```
    /// use dotted_config::TreeHandle;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Sockets {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// let tree = TreeHandle::from_serialize(&Sockets {
    ///     host: "localhost".into(),
    ///     port: 3009,
    /// })?;
    /// assert_eq!(tree.read()["port"].as_integer(), Some(3009));
    /// # Ok::<(), dotted_config::ConfigError>(())
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ConfigError> {
        match Value::try_from(value)? {
            Value::Table(table) => Ok(Self::new(table)),
            _ => Err(ConfigError::NotATable),
        }
    }

    /// Locks the tree for reading; other readers may hold it concurrently.
    pub fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.inner.read()
    }

    /// Locks the tree exclusively for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.inner.write()
    }

    /// Copies the current contents out of the lock.
    pub fn snapshot(&self) -> Table {
        self.inner.read().clone()
    }

    /// Whether the tree currently has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// True when both handles refer to the same tree.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Table> for TreeHandle {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}

impl fmt::Debug for TreeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_read() {
            Some(table) => f.debug_tuple("TreeHandle").field(&*table).finish(),
            None => f.write_str("TreeHandle(<locked>)"),
        }
    }
}

/// Trees owned by the host application, addressed by name.
///
/// Registry bindings of the form `root -> "name"` are looked up here every
/// time the root is resolved, so the host may (re)populate a name at any point
/// before the lookup that needs it.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    trees: Arc<RwLock<HashMap<String, TreeHandle>>>,
}

impl TreeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `tree` under `name`, returning the handle it replaced.
    pub fn insert(&self, name: impl Into<String>, tree: impl Into<TreeHandle>) -> Option<TreeHandle> {
        self.trees.write().insert(name.into(), tree.into())
    }

    /// Returns the tree stored under `name`.
    pub fn get(&self, name: &str) -> Option<TreeHandle> {
        self.trees.read().get(name).cloned()
    }

    /// Removes and returns the tree stored under `name`.
    pub fn remove(&self, name: &str) -> Option<TreeHandle> {
        self.trees.write().remove(name)
    }

    /// Whether a tree is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.trees.read().contains_key(name)
    }
}
