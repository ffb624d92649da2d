//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dataset_fetcher;
pub mod tool_executor;
pub mod tool_schema;
