//! Infrastructure layer for rdw-vehicle-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod rdw;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use rdw::{FetcherError, FetcherSettings, RdwHttpFetcher};
pub use tools::JsonSchemaToolConverter;
