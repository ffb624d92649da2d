//! Text rendering of lookup outcomes
//!
//! Every sentence here contains the normalized kenteken so a caller can tell
//! which lookup a message belongs to.

use rdw_domain::{AggregatedResult, FetchFailure, Kenteken, ToolDefinition};
use serde::Serialize;

pub(crate) fn failure_message(failure: &FetchFailure, kenteken: &Kenteken) -> String {
    match failure {
        FetchFailure::Timeout => format!(
            "Fout: De RDW API reageerde niet binnen de tijdlimiet (kenteken: {}).",
            kenteken
        ),
        FetchFailure::Status { code, body } if body.is_empty() => {
            format!("RDW API fout: {} (kenteken: {})", code, kenteken)
        }
        FetchFailure::Status { code, body } => {
            format!("RDW API fout: {} - {} (kenteken: {})", code, body, kenteken)
        }
        FetchFailure::Transport(cause) | FetchFailure::Decode(cause) => format!(
            "Fout bij het ophalen van RDW-gegevens voor kenteken {}: {}",
            kenteken, cause
        ),
    }
}

/// Error text for an aggregated lookup where nothing came back and at least
/// one dataset failed
pub(crate) fn aggregated_failure_message(
    tool: &ToolDefinition,
    result: &AggregatedResult,
) -> String {
    let causes: Vec<String> = result
        .failures()
        .map(|(dataset, failure)| format!("{}: {}", dataset, failure))
        .collect();
    format!(
        "Fout bij het ophalen van {} voor kenteken {}: {}",
        tool.subject,
        result.kenteken,
        causes.join("; ")
    )
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "onbekende oorzaak".to_string());
    format!("Er is een onverwachte fout opgetreden: {}", detail)
}

/// Two-space indented JSON
pub(crate) fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdw_domain::{DatasetId, FetchOutcome, tool::catalog::vehicle_bodywork_definition};
    use serde_json::json;

    #[test]
    fn test_failure_messages_contain_kenteken() {
        let kenteken = Kenteken::parse("41-tdk-8");
        let cases = [
            FetchFailure::Timeout,
            FetchFailure::Status {
                code: 500,
                body: "Internal".to_string(),
            },
            FetchFailure::Transport("connection refused".to_string()),
            FetchFailure::Decode("expected array".to_string()),
        ];
        for failure in cases {
            assert!(failure_message(&failure, &kenteken).contains("41TDK8"));
        }
    }

    #[test]
    fn test_status_message_format() {
        let kenteken = Kenteken::parse("AB12CD");
        let with_body = FetchFailure::Status {
            code: 503,
            body: "Service Unavailable".to_string(),
        };
        assert_eq!(
            failure_message(&with_body, &kenteken),
            "RDW API fout: 503 - Service Unavailable (kenteken: AB12CD)"
        );
        let bare = FetchFailure::Status {
            code: 404,
            body: String::new(),
        };
        assert_eq!(
            failure_message(&bare, &kenteken),
            "RDW API fout: 404 (kenteken: AB12CD)"
        );
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            failure_message(&FetchFailure::Timeout, &Kenteken::parse("AB12CD")),
            "Fout: De RDW API reageerde niet binnen de tijdlimiet (kenteken: AB12CD)."
        );
    }

    #[test]
    fn test_aggregated_failure_lists_every_cause() {
        let result = AggregatedResult::from_outcomes(
            Kenteken::parse("AB12CD"),
            vec![
                (DatasetId::BodyworkBasic, FetchOutcome::Failed(FetchFailure::Timeout)),
                (DatasetId::BodyworkSpecification, FetchOutcome::Records(vec![])),
                (
                    DatasetId::VehicleClass,
                    FetchOutcome::Failed(FetchFailure::Transport("reset".to_string())),
                ),
            ],
        );
        let message = aggregated_failure_message(&vehicle_bodywork_definition(), &result);
        assert_eq!(
            message,
            "Fout bij het ophalen van carrosseriegegevens voor kenteken AB12CD: \
             bodywork-basic: timeout; vehicle-class: transport error: reset"
        );
    }

    #[test]
    fn test_panic_message_extracts_payload() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("kapot");
        assert_eq!(
            panic_message(payload.as_ref()),
            "Er is een onverwachte fout opgetreden: kapot"
        );
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("ook kapot"));
        assert!(panic_message(owned.as_ref()).ends_with("ook kapot"));
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let text = pretty(&json!({"merk": "VOLKSWAGEN"})).unwrap();
        assert_eq!(text, "{\n  \"merk\": \"VOLKSWAGEN\"\n}");
    }
}
