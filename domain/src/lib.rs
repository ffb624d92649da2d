//! Domain layer for rdw-vehicle-mcp
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Kenteken**: a Dutch license plate, always held in normalized form
//! - **Dataset**: one RDW open-data resource queried by kenteken
//! - **Tool**: a named lookup over one dataset, or several merged together

pub mod core;
pub mod dataset;
pub mod tool;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    kenteken::{Kenteken, normalize_identifier},
};
pub use dataset::{
    AggregatedResult, DatasetCatalog, DatasetDescriptor, DatasetId, DatasetSection, FetchFailure,
    FetchOutcome, Record, RecordShape,
};
pub use tool::{
    DefaultToolValidator, ToolBinding, ToolCall, ToolDefinition, ToolError, ToolParameter,
    ToolResult, ToolResultMetadata, ToolSpec, ToolValidator, vehicle_tool_spec,
};
