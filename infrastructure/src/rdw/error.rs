//! Error types for the RDW adapter

use thiserror::Error;

/// Errors raised while setting up the HTTP fetcher.
///
/// Per-request failures never surface here; they become
/// [`FetchFailure`](rdw_domain::FetchFailure) values instead.
#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}
