//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async dispatch port is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Only required parameters are checked. Unknown extra arguments are
/// tolerated since callers in the wild send client-specific fields.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in definition.parameters.iter().filter(|p| p.required) {
            match call.arguments.get(&param.name) {
                None | Some(serde_json::Value::Null) => {
                    return Err(format!(
                        "Missing required parameter '{}' for tool '{}'",
                        param.name, definition.name
                    ));
                }
                Some(value) if param.param_type == "string" && !value.is_string() => {
                    return Err(format!(
                        "Parameter '{}' for tool '{}' must be a string",
                        param.name, definition.name
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetId;
    use crate::tool::entities::ToolBinding;

    fn definition() -> ToolDefinition {
        ToolDefinition::new("test", "test tool", ToolBinding::Dataset(DatasetId::Info))
            .with_identifier("kenteken", "A license plate")
    }

    #[test]
    fn test_validator_missing_required() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("test");
        let result = validator.validate(&call, &definition());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Missing required parameter 'kenteken'"));
    }

    #[test]
    fn test_validator_null_counts_as_missing() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("test").with_arg("kenteken", serde_json::Value::Null);
        assert!(validator.validate(&call, &definition()).is_err());
    }

    #[test]
    fn test_validator_wrong_type() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("test").with_arg("kenteken", 12345);
        let result = validator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("must be a string"));
    }

    #[test]
    fn test_validator_tolerates_extra_arguments() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("test")
            .with_arg("kenteken", "41TDK8")
            .with_arg("client_hint", "claude-desktop");
        assert!(validator.validate(&call, &definition()).is_ok());
    }

    #[test]
    fn test_validator_does_not_accept_alias_field() {
        // The public field name is preserved exactly
        let validator = DefaultToolValidator;
        let call = ToolCall::new("test").with_arg("identifier", "41TDK8");
        assert!(validator.validate(&call, &definition()).is_err());
    }
}
