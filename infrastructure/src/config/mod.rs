//! Configuration file loading for rdw-vehicle-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RDW_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./rdw.toml` or `./.rdw.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/rdw-vehicle-mcp/config.toml`
//! 5. Fallback: `~/.config/rdw-vehicle-mcp/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileLoggingConfig, FileRdwConfig};
pub use loader::ConfigLoader;
