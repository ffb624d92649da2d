//! Core domain concepts shared across all subdomains.
//!
//! - [`kenteken::Kenteken`] — a normalized license plate
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod kenteken;
pub mod string;
