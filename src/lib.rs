pub mod config;
pub mod context;
mod error;

pub use config::{Binding, Config, ConfigBuilder, ConfigError, ConfigPath, Registry, TreeHandle, TreeStore};
pub use context::AppContext;
pub use error::Error;
pub use toml::{Table, Value};
