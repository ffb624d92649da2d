//! Tool Executor port
//!
//! Defines the interface for listing and invoking vehicle tools.

use async_trait::async_trait;
use rdw_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolResult},
};

/// Port for tool execution
///
/// This port defines how outer layers (stdio server, CLI) run tools.
/// `Err` is reserved for invocation errors; every lookup outcome,
/// including remote failures, comes back as `Ok` text.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Execute a tool call
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;
}
