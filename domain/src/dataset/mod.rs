//! Dataset domain module
//!
//! Each RDW open-data dataset exposes one narrow slice of a vehicle's
//! registration (axles, fuel, bodywork, ...) and is queried by kenteken.
//!
//! ```text
//! DatasetId ──▶ DatasetCatalog ──▶ DatasetDescriptor { endpoint, shape }
//!                                         │
//!                              fetch ─────┘
//!                                ▼
//!                          FetchOutcome ──▶ AggregatedResult (multi-dataset tools)
//! ```
//!
//! The catalog is built once at startup and only read afterwards.

pub mod entities;
pub mod value_objects;

pub use entities::{DatasetCatalog, DatasetDescriptor, DatasetId, RecordShape};
pub use value_objects::{AggregatedResult, DatasetSection, FetchFailure, FetchOutcome, Record};
