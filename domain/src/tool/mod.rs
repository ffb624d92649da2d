//! Tool domain module
//!
//! This module defines the **vehicle tools**: externally callable operations
//! that look up one or more RDW datasets for a license plate and answer in
//! text.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalog)    │    │ (invocation) │    │ (text)       │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        └─ ToolDefinition { binding: Dataset(id) | Aggregated([ids]) }
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`] — Registry of available tools
//! - [`ToolDefinition`] — Name, description, identifier parameter and dataset binding
//! - [`ToolCall`] — An invocation request with arguments
//! - [`ToolResult`] — Text outcome, flagged when the lookup failed
//! - [`ToolError`] — Invocation error (unknown tool, missing kenteken)
//! - [`ToolValidator`] — Pure domain trait for parameter validation
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`, `VehicleToolDispatcher`): dispatch and aggregation
//! - **Infrastructure** (`RdwHttpFetcher`): HTTP requests against the RDW API

pub mod catalog;
pub mod entities;
pub mod traits;
pub mod value_objects;

pub use catalog::vehicle_tool_spec;
pub use entities::{ToolBinding, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
