//! Service adapters: storage, sinks, loaders and per-user paths.

pub mod capture;
pub mod catalog;
pub mod file_store;
pub mod memory;
pub mod paths;
pub mod settings;
pub mod sink;

pub use capture::NullCapture;
pub use catalog::{builtin_catalog, load_catalog, parse_catalog, CatalogError};
pub use file_store::{FileStore, StoreError};
pub use memory::MemoryStore;
pub use paths::{ensure_log_dir, get_catalog_path, get_settings_path, get_store_path};
pub use settings::{load_config, load_config_or_default, parse_config, ConfigError};
pub use sink::{LogSink, RecordingSink};
