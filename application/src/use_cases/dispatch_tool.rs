//! Dispatch Tool use case
//!
//! [`VehicleToolDispatcher`] is the [`ToolExecutorPort`] the outer layers talk
//! to. It resolves a tool name against the static [`ToolSpec`], normalizes the
//! kenteken argument and runs the tool's dataset binding.
//!
//! # Execution Paths
//!
//! ```text
//! ToolExecutorPort::execute()
//!   ├─ unknown tool / bad argument  → Err(ToolError)
//!   ├─ ToolBinding::Dataset(id)     → one fetch   → first record | all records
//!   └─ ToolBinding::Aggregated(ids) → AggregateDatasetsUseCase → merged JSON
//! ```
//!
//! Empty results render the tool's "not found" sentence. Remote failures and
//! handler panics render as error text with [`ToolResult::is_error`] set.

use crate::ports::dataset_fetcher::DatasetFetcherPort;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::aggregate_datasets::AggregateDatasetsUseCase;
use crate::use_cases::render::{
    aggregated_failure_message, failure_message, panic_message, pretty,
};
use async_trait::async_trait;
use futures::FutureExt;
use rdw_domain::{
    DatasetCatalog, DatasetId, DefaultToolValidator, FetchFailure, FetchOutcome, Kenteken,
    RecordShape, ToolBinding, ToolCall, ToolDefinition, ToolError, ToolResult, ToolSpec,
    ToolValidator, vehicle_tool_spec,
};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Stateless dispatcher from tool invocations to dataset lookups
pub struct VehicleToolDispatcher<F: DatasetFetcherPort + ?Sized> {
    tool_spec: ToolSpec,
    catalog: Arc<DatasetCatalog>,
    fetcher: Arc<F>,
    aggregator: AggregateDatasetsUseCase<F>,
    validator: DefaultToolValidator,
}

impl<F: DatasetFetcherPort + ?Sized> VehicleToolDispatcher<F> {
    /// Dispatcher over every vehicle tool
    pub fn new(fetcher: Arc<F>, catalog: Arc<DatasetCatalog>) -> Self {
        Self {
            tool_spec: vehicle_tool_spec(),
            aggregator: AggregateDatasetsUseCase::new(Arc::clone(&fetcher), Arc::clone(&catalog)),
            catalog,
            fetcher,
            validator: DefaultToolValidator,
        }
    }

    async fn run(&self, tool: &ToolDefinition, kenteken: &Kenteken) -> ToolResult {
        match &tool.binding {
            ToolBinding::Dataset(id) => self.run_single(tool, *id, kenteken).await,
            ToolBinding::Aggregated(ids) => self.run_aggregated(tool, ids, kenteken).await,
        }
    }

    async fn run_single(
        &self,
        tool: &ToolDefinition,
        id: DatasetId,
        kenteken: &Kenteken,
    ) -> ToolResult {
        let descriptor = self.catalog.get(id);

        let records = match self.fetcher.fetch(descriptor, kenteken).await {
            FetchOutcome::Failed(failure) => {
                return ToolResult::failure(&tool.name, failure_message(&failure, kenteken));
            }
            FetchOutcome::Records(records) => records,
        };

        let rendered = match (descriptor.shape, records.first()) {
            (_, None) => {
                return ToolResult::success(&tool.name, tool.not_found_message(kenteken))
                    .with_record_count(0);
            }
            (RecordShape::Single, Some(first)) => pretty(first),
            (RecordShape::Multiple, Some(_)) => pretty(&records),
        };

        match rendered {
            Ok(text) => ToolResult::success(&tool.name, text).with_record_count(records.len()),
            Err(e) => ToolResult::failure(
                &tool.name,
                failure_message(&FetchFailure::Decode(e.to_string()), kenteken),
            ),
        }
    }

    async fn run_aggregated(
        &self,
        tool: &ToolDefinition,
        ids: &[DatasetId],
        kenteken: &Kenteken,
    ) -> ToolResult {
        let result = self.aggregator.execute(kenteken, ids).await;

        if result.has_records() {
            return match pretty(&result.to_json()) {
                Ok(text) => {
                    ToolResult::success(&tool.name, text).with_record_count(result.record_count())
                }
                Err(e) => ToolResult::failure(
                    &tool.name,
                    failure_message(&FetchFailure::Decode(e.to_string()), kenteken),
                ),
            };
        }

        if result.failures().next().is_some() {
            ToolResult::failure(&tool.name, aggregated_failure_message(tool, &result))
        } else {
            ToolResult::success(&tool.name, tool.not_found_message(kenteken)).with_record_count(0)
        }
    }
}

#[async_trait]
impl<F: DatasetFetcherPort + ?Sized> ToolExecutorPort for VehicleToolDispatcher<F> {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let started = Instant::now();

        let tool = self
            .tool_spec
            .get(&call.tool_name)
            .ok_or_else(|| ToolError::unknown_tool(&call.tool_name))?;

        self.validator.validate(call, tool).map_err(|message| {
            ToolError::invalid_argument(message).with_details(tool.identifier_param.clone())
        })?;
        let raw = call
            .require_string(&tool.identifier_param)
            .map_err(ToolError::invalid_argument)?;
        let kenteken = Kenteken::parse(raw);

        info!(tool = %tool.name, kenteken = %kenteken, "Executing tool");

        let result = match AssertUnwindSafe(self.run(tool, &kenteken)).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                error!(tool = %tool.name, kenteken = %kenteken, "Tool handler panicked");
                ToolResult::failure(&tool.name, panic_message(payload.as_ref()))
            }
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        debug!(
            tool = %tool.name,
            is_error = result.is_error,
            duration_ms,
            "Tool finished"
        );

        Ok(result
            .with_kenteken(kenteken.as_str())
            .with_duration(duration_ms))
    }
}
