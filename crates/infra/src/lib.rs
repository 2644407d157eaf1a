//! Infrastructure layer: JSON codec, file persistence, configuration.

pub mod codec;
pub mod config;
pub mod error;
pub mod file_store;

pub use config::StorageConfig;
pub use error::PersistenceError;
pub use file_store::JsonFileStore;
