//! Tool listing support
//!
//! Tool definitions live in the domain layer; this module only renders them
//! for callers.

mod schema;

pub use schema::JsonSchemaToolConverter;
