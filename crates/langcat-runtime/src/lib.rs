pub mod config;
pub mod error;
pub mod loader;

pub use config::{Config, resolve_config_path, resolve_data_path};
pub use error::{Error, Result};
pub use loader::{CatalogLoader, LoadEvent, LoadHandle};
