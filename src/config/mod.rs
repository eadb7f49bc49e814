//! Dotted-path access to named configuration trees.

mod access;
mod builder;
mod error;
mod path;
mod registry;
mod tree;

pub use access::is_truthy;
pub use builder::{Config, ConfigBuilder};
pub use error::ConfigError;
pub use path::ConfigPath;
pub use registry::{Binding, Registry, APP_ROOT, APP_TREE, DATABASE_ROOT, DATABASE_TREE};
pub use tree::{TreeHandle, TreeStore};
