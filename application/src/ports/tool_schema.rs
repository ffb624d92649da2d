//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how they are advertised to
//! callers" (infrastructure). The tool-listing operation returns whatever
//! this port produces.

use rdw_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to the listing format (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to `{name, description, inputSchema}`.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a JSON array (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
