//! Aggregate Datasets use case
//!
//! Fans one kenteken out over several datasets and folds the outcomes back
//! into a single [`AggregatedResult`].

use crate::ports::dataset_fetcher::DatasetFetcherPort;
use crate::use_cases::render::panic_message;
use futures::FutureExt;
use futures::future::join_all;
use rdw_domain::{
    AggregatedResult, DatasetCatalog, DatasetId, FetchFailure, FetchOutcome, Kenteken,
};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Use case for looking up one kenteken in several datasets at once
pub struct AggregateDatasetsUseCase<F: DatasetFetcherPort + ?Sized> {
    fetcher: Arc<F>,
    catalog: Arc<DatasetCatalog>,
}

impl<F: DatasetFetcherPort + ?Sized> AggregateDatasetsUseCase<F> {
    pub fn new(fetcher: Arc<F>, catalog: Arc<DatasetCatalog>) -> Self {
        Self { fetcher, catalog }
    }

    /// Fetch every dataset concurrently and wait for all of them.
    ///
    /// A failing, slow or panicking dataset never short-circuits the others.
    /// Sections in the result follow `datasets` order, not completion order.
    pub async fn execute(&self, kenteken: &Kenteken, datasets: &[DatasetId]) -> AggregatedResult {
        debug!(
            kenteken = %kenteken,
            datasets = datasets.len(),
            "Fetching datasets concurrently"
        );

        let fetches = datasets.iter().map(|&id| {
            let descriptor = self.catalog.get(id);
            async move {
                let fetch = AssertUnwindSafe(self.fetcher.fetch(descriptor, kenteken));
                let outcome = match fetch.catch_unwind().await {
                    Ok(outcome) => outcome,
                    Err(payload) => {
                        error!(kenteken = %kenteken, dataset = %id, "Dataset fetch panicked");
                        FetchOutcome::Failed(FetchFailure::Transport(panic_message(
                            payload.as_ref(),
                        )))
                    }
                };
                (id, outcome)
            }
        });
        let outcomes = join_all(fetches).await;

        let result = AggregatedResult::from_outcomes(kenteken.clone(), outcomes);
        for (dataset, failure) in result.failures() {
            warn!(kenteken = %kenteken, dataset = %dataset, "Dataset unavailable: {}", failure);
        }
        result
    }
}
