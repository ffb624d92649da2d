//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::kenteken::Kenteken;
use crate::dataset::DatasetId;

/// Which dataset(s) a tool reads, and how results are combined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "datasets")]
pub enum ToolBinding {
    /// One dataset; the dataset's record shape decides whether the tool
    /// returns the first record or the full list
    Dataset(DatasetId),
    /// Several datasets fetched concurrently and merged in this order
    Aggregated(Vec<DatasetId>),
}

impl ToolBinding {
    pub fn datasets(&self) -> &[DatasetId] {
        match self {
            ToolBinding::Dataset(id) => std::slice::from_ref(id),
            ToolBinding::Aggregated(ids) => ids,
        }
    }

    pub fn is_aggregated(&self) -> bool {
        matches!(self, ToolBinding::Aggregated(_))
    }
}

/// Definition of a callable vehicle tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_vehicle_info")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
    /// Name of the parameter that carries the license plate
    pub identifier_param: String,
    /// Dataset binding
    pub binding: ToolBinding,
    /// What was looked for, used in the "not found" sentence
    pub subject: String,
    /// Extra remark appended when nothing is found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_note: Option<String>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        binding: ToolBinding,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            identifier_param: String::new(),
            binding,
            subject: "gegevens".to_string(),
            coverage_note: None,
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Declare the required license-plate parameter under its public name
    pub fn with_identifier(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.identifier_param = name.clone();
        self.with_parameter(ToolParameter::new(name, description, true))
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_coverage_note(mut self, note: impl Into<String>) -> Self {
        self.coverage_note = Some(note.into());
        self
    }

    /// `Geen <subject> gevonden voor kenteken: <KENTEKEN>[. <note>]`
    pub fn not_found_message(&self, kenteken: &Kenteken) -> String {
        let sentence = format!("Geen {} gevonden voor kenteken: {}", self.subject, kenteken);
        match &self.coverage_note {
            Some(note) => format!("{}. {}", sentence, note),
            None => sentence,
        }
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Specification of available tools
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// Tool definitions sorted by name, for stable listings
    pub fn sorted(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<&ToolDefinition> = self.tools.values().collect();
        tools.sort_by_key(|t| &t.name);
        tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    #[serde(rename = "name")]
    pub tool_name: String,
    /// Arguments passed to the tool (`null` is treated as none)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub arguments: HashMap<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<HashMap<String, serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_tool() -> ToolDefinition {
        ToolDefinition::new(
            "get_vehicle_info",
            "Vehicle info",
            ToolBinding::Dataset(DatasetId::Info),
        )
        .with_identifier("kenteken", "License plate")
        .with_subject("voertuig")
    }

    #[test]
    fn test_tool_definition() {
        let tool = info_tool();

        assert_eq!(tool.name, "get_vehicle_info");
        assert_eq!(tool.identifier_param, "kenteken");
        assert_eq!(tool.parameters.len(), 1);
        assert!(tool.parameters[0].required);
        assert!(!tool.binding.is_aggregated());
        assert_eq!(tool.binding.datasets(), &[DatasetId::Info]);
    }

    #[test]
    fn test_not_found_message() {
        let kenteken = Kenteken::parse("41-tdk-8");
        assert_eq!(
            info_tool().not_found_message(&kenteken),
            "Geen voertuig gevonden voor kenteken: 41TDK8"
        );

        let with_note = info_tool().with_coverage_note("Let op: dit is een test.");
        assert_eq!(
            with_note.not_found_message(&kenteken),
            "Geen voertuig gevonden voor kenteken: 41TDK8. Let op: dit is een test."
        );
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(info_tool())
            .register(ToolDefinition::new(
                "get_vehicle_axles",
                "Axles",
                ToolBinding::Dataset(DatasetId::Axles),
            ));

        assert!(spec.get("get_vehicle_info").is_some());
        assert!(spec.get("unknown").is_none());
        assert_eq!(spec.len(), 2);

        let sorted: Vec<&str> = spec.sorted().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(sorted, vec!["get_vehicle_axles", "get_vehicle_info"]);
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("get_vehicle_info").with_arg("kenteken", "41-TDK-8");

        assert_eq!(call.tool_name, "get_vehicle_info");
        assert_eq!(call.get_string("kenteken"), Some("41-TDK-8"));
        assert_eq!(call.require_string("kenteken").unwrap(), "41-TDK-8");
        assert!(call.require_string("missing").is_err());
    }

    #[test]
    fn test_tool_call_non_string_argument() {
        let call = ToolCall::new("get_vehicle_info").with_arg("kenteken", 42);
        assert!(call.get_string("kenteken").is_none());
    }

    #[test]
    fn test_tool_call_deserializes_protocol_params() {
        let call: ToolCall = serde_json::from_value(serde_json::json!({
            "name": "get_vehicle_fuel",
            "arguments": {"kenteken": "AB-12-CD"}
        }))
        .unwrap();
        assert_eq!(call.tool_name, "get_vehicle_fuel");
        assert_eq!(call.get_string("kenteken"), Some("AB-12-CD"));

        let bare: ToolCall =
            serde_json::from_value(serde_json::json!({"name": "get_vehicle_fuel"})).unwrap();
        assert!(bare.arguments.is_empty());

        let null_args: ToolCall = serde_json::from_value(
            serde_json::json!({"name": "get_vehicle_fuel", "arguments": null}),
        )
        .unwrap();
        assert!(null_args.arguments.is_empty());
    }
}
