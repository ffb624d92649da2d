//! Dataset fetcher port
//!
//! Defines how the application layer reads one RDW dataset for one kenteken.

use async_trait::async_trait;
use rdw_domain::{DatasetDescriptor, FetchOutcome, Kenteken};

/// Port for fetching one dataset
///
/// Implementations must never fail outright: transport errors, non-2xx
/// statuses and timeouts are all reported as [`FetchOutcome::Failed`], so
/// callers branch on data and one dataset cannot take down its siblings.
#[async_trait]
pub trait DatasetFetcherPort: Send + Sync {
    /// Issue one bounded-time lookup of `kenteken` against `dataset`
    async fn fetch(&self, dataset: &DatasetDescriptor, kenteken: &Kenteken) -> FetchOutcome;
}
