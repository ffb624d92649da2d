//! Application layer for rdw-vehicle-mcp
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use ports::{
    dataset_fetcher::DatasetFetcherPort, tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::aggregate_datasets::AggregateDatasetsUseCase;
pub use use_cases::dispatch_tool::VehicleToolDispatcher;
