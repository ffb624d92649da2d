//! Scripted dataset fetcher shared by the use-case tests

use crate::ports::dataset_fetcher::DatasetFetcherPort;
use async_trait::async_trait;
use rdw_domain::{DatasetDescriptor, DatasetId, FetchOutcome, Kenteken, Record};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Datasets without a scripted outcome answer with an empty record list.
#[derive(Default)]
pub struct MockFetcher {
    outcomes: HashMap<DatasetId, FetchOutcome>,
    delays: HashMap<DatasetId, Duration>,
    panics: HashSet<DatasetId>,
    calls: Mutex<Vec<(DatasetId, String)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, id: DatasetId, records: Vec<Value>) -> Self {
        let records = records
            .into_iter()
            .map(|v| v.as_object().cloned().expect("mock records must be objects"))
            .collect::<Vec<Record>>();
        self.outcomes.insert(id, FetchOutcome::Records(records));
        self
    }

    pub fn with_outcome(mut self, id: DatasetId, outcome: FetchOutcome) -> Self {
        self.outcomes.insert(id, outcome);
        self
    }

    pub fn with_delay(mut self, id: DatasetId, delay: Duration) -> Self {
        self.delays.insert(id, delay);
        self
    }

    pub fn with_panic(mut self, id: DatasetId) -> Self {
        self.panics.insert(id);
        self
    }

    pub fn calls(&self) -> Vec<(DatasetId, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetFetcherPort for MockFetcher {
    async fn fetch(&self, dataset: &DatasetDescriptor, kenteken: &Kenteken) -> FetchOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((dataset.id, kenteken.as_str().to_string()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&dataset.id) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.panics.contains(&dataset.id) {
            panic!("scripted panic for {}", dataset.id);
        }

        self.outcomes
            .get(&dataset.id)
            .cloned()
            .unwrap_or(FetchOutcome::Records(Vec::new()))
    }
}
