//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod aggregate_datasets;
pub mod dispatch_tool;
pub(crate) mod render;
