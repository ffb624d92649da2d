//! RDW open-data adapter
//!
//! Implements [`DatasetFetcherPort`](rdw_application::DatasetFetcherPort) on
//! top of a shared `reqwest::Client`.

pub mod error;
pub mod fetcher;

pub use error::FetcherError;
pub use fetcher::{FetcherSettings, RdwHttpFetcher};
