//! HTTP dataset fetcher
//!
//! One GET per call against `{endpoint}?kenteken=<KENTEKEN>`, bounded by the
//! client's timeout. No retries and no caching.

use super::error::FetcherError;
use async_trait::async_trait;
use rdw_application::ports::dataset_fetcher::DatasetFetcherPort;
use rdw_domain::core::string::truncate;
use rdw_domain::{DatasetDescriptor, FetchFailure, FetchOutcome, Kenteken, Record};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Name of the single query parameter sent to every dataset
const KENTEKEN_QUERY: &str = "kenteken";

/// Maximum bytes of an error body kept for diagnostics (2 KiB)
const MAX_ERROR_BODY: usize = 2 * 1024;

/// Settings for [`RdwHttpFetcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherSettings {
    /// Per-request time limit
    pub timeout: Duration,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl FetcherSettings {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn default_user_agent() -> String {
        format!("rdw-vehicle-mcp/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: Self::default_user_agent(),
        }
    }
}

/// Fetcher backed by a shared `reqwest::Client`.
///
/// The client pools connections, so one instance should serve the whole
/// process.
#[derive(Debug, Clone)]
pub struct RdwHttpFetcher {
    client: reqwest::Client,
}

impl RdwHttpFetcher {
    pub fn new(settings: FetcherSettings) -> Result<Self, FetcherError> {
        if settings.timeout.is_zero() {
            return Err(FetcherError::ZeroTimeout);
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .build()?;

        Ok(Self { client })
    }

    async fn request(
        &self,
        dataset: &DatasetDescriptor,
        kenteken: &Kenteken,
    ) -> Result<Vec<Record>, FetchFailure> {
        let response = self
            .client
            .get(&dataset.endpoint)
            .query(&[(KENTEKEN_QUERY, kenteken.as_str())])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: a body that cannot be read is reported as empty
            let body = response.text().await.unwrap_or_default();
            return Err(FetchFailure::Status {
                code: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        serde_json::from_slice::<Vec<Record>>(&bytes)
            .map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}

fn classify(error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_decode() {
        FetchFailure::Decode(error.to_string())
    } else {
        FetchFailure::Transport(error.to_string())
    }
}

#[async_trait]
impl DatasetFetcherPort for RdwHttpFetcher {
    async fn fetch(&self, dataset: &DatasetDescriptor, kenteken: &Kenteken) -> FetchOutcome {
        let started = Instant::now();
        let result = self.request(dataset, kenteken).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(records) => {
                debug!(
                    dataset = %dataset.id,
                    kenteken = %kenteken,
                    records = records.len(),
                    duration_ms,
                    "RDW request completed"
                );
                FetchOutcome::Records(records)
            }
            Err(failure) => {
                warn!(
                    dataset = %dataset.id,
                    kenteken = %kenteken,
                    duration_ms,
                    "RDW request failed: {}",
                    failure
                );
                FetchOutcome::Failed(failure)
            }
        }
    }
}
