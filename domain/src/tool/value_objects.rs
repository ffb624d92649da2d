//! Tool domain value objects — immutable result and error types
//!
//! A dispatched tool call ends in one of two ways:
//!
//! - `Ok(`[`ToolResult`]`)` — user-facing text. Lookups that failed remotely
//!   (HTTP status, timeout, transport) still land here, with
//!   [`ToolResult::is_error`] set, so the caller always gets readable text.
//! - `Err(`[`ToolError`]`)` — the call itself was malformed (unknown tool,
//!   missing kenteken). These are surfaced as protocol errors.

use serde::{Deserialize, Serialize};

/// Invocation error: the caller asked for something that cannot be run.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing or non-string identifier argument |
/// | `NOT_FOUND` | Unknown tool name |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "INVALID_ARGUMENT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub const INVALID_ARGUMENT: &'static str = "INVALID_ARGUMENT";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::new(Self::NOT_FOUND, format!("Tool niet gevonden: {}", name.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_ARGUMENT, message)
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == Self::INVALID_ARGUMENT
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Self::NOT_FOUND
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Final text of a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Formatted JSON or a diagnostic sentence
    pub content: String,
    /// Set when the lookup failed (remote error, timeout, internal fault)
    pub is_error: bool,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Normalized kenteken the lookup used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kenteken: Option<String>,
    /// Number of records across all datasets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

impl ToolResult {
    /// Create a successful result (records found, or a plain "not found")
    pub fn success(tool_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            content: content.into(),
            is_error: false,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result that still carries readable text
    pub fn failure(tool_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            content: content.into(),
            is_error: true,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_kenteken(mut self, kenteken: impl Into<String>) -> Self {
        self.metadata.kenteken = Some(kenteken.into());
        self
    }

    pub fn with_record_count(mut self, count: usize) -> Self {
        self.metadata.record_count = Some(count);
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        !self.is_error
    }

    /// Get the output content
    pub fn content(&self) -> &str {
        &self.content
    }
}
