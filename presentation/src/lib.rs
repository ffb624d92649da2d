//! Presentation layer for rdw-vehicle-mcp
//!
//! This crate contains CLI definitions, console formatting for the
//! one-shot commands, and the stdio tool server.

pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use server::{ServerError, ServerInfo, StdioServer};
