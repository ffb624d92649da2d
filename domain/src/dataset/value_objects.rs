//! Dataset value objects — fetch outcomes and merged results
//!
//! A fetch never raises: it resolves to a [`FetchOutcome`], either the
//! decoded records or a typed [`FetchFailure`]. The aggregator folds several
//! outcomes into an [`AggregatedResult`], where a failed dataset contributes
//! an empty record list plus its cause.

use serde_json::{Map, Value};

use super::entities::DatasetId;
use crate::core::kenteken::Kenteken;

/// One JSON object as returned by the RDW API
pub type Record = Map<String, Value>;

/// Why a dataset fetch produced no usable records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The per-call time limit elapsed
    Timeout,
    /// Non-2xx HTTP status; body is kept for diagnostics
    Status { code: u16, body: String },
    /// Connection, DNS or other transport failure
    Transport(String),
    /// Response body was not a JSON array of objects
    Decode(String),
}

impl FetchFailure {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchFailure::Timeout)
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailure::Timeout => write!(f, "timeout"),
            FetchFailure::Status { code, body } if body.is_empty() => {
                write!(f, "HTTP {}", code)
            }
            FetchFailure::Status { code, body } => write!(f, "HTTP {} - {}", code, body),
            FetchFailure::Transport(msg) => write!(f, "transport error: {}", msg),
            FetchFailure::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

/// Result of exactly one dataset fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Records(Vec<Record>),
    Failed(FetchFailure),
}

impl FetchOutcome {
    /// Records, or an empty slice for a failure
    pub fn records(&self) -> &[Record] {
        match self {
            FetchOutcome::Records(records) => records,
            FetchOutcome::Failed(_) => &[],
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchOutcome::Failed(failure) => Some(failure),
            FetchOutcome::Records(_) => None,
        }
    }

    /// `true` for a successful fetch that matched nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, FetchOutcome::Records(records) if records.is_empty())
    }
}

/// One dataset's contribution to an aggregated result
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSection {
    pub dataset: DatasetId,
    pub records: Vec<Record>,
    pub failure: Option<FetchFailure>,
}

/// Merged outcome of a multi-dataset lookup.
///
/// Sections keep the order in which datasets were requested, which is also
/// the rendering order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResult {
    pub kenteken: Kenteken,
    pub sections: Vec<DatasetSection>,
}

impl AggregatedResult {
    pub fn from_outcomes(
        kenteken: Kenteken,
        outcomes: impl IntoIterator<Item = (DatasetId, FetchOutcome)>,
    ) -> Self {
        let sections = outcomes
            .into_iter()
            .map(|(dataset, outcome)| match outcome {
                FetchOutcome::Records(records) => DatasetSection {
                    dataset,
                    records,
                    failure: None,
                },
                FetchOutcome::Failed(failure) => DatasetSection {
                    dataset,
                    records: Vec::new(),
                    failure: Some(failure),
                },
            })
            .collect();

        Self { kenteken, sections }
    }

    /// At least one dataset produced a record
    pub fn has_records(&self) -> bool {
        self.sections.iter().any(|s| !s.records.is_empty())
    }

    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (DatasetId, &FetchFailure)> {
        self.sections
            .iter()
            .filter_map(|s| s.failure.as_ref().map(|f| (s.dataset, f)))
    }

    /// JSON view: `kenteken`, one array per dataset in request order, and an
    /// `unavailable` object only when some dataset failed.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        root.insert(
            "kenteken".to_string(),
            Value::String(self.kenteken.to_string()),
        );

        for section in &self.sections {
            let records = section
                .records
                .iter()
                .cloned()
                .map(Value::Object)
                .collect();
            root.insert(section.dataset.to_string(), Value::Array(records));
        }

        let unavailable: Map<String, Value> = self
            .failures()
            .map(|(dataset, failure)| (dataset.to_string(), Value::String(failure.to_string())))
            .collect();
        if !unavailable.is_empty() {
            root.insert("unavailable".to_string(), Value::Object(unavailable));
        }

        Value::Object(root)
    }
}
