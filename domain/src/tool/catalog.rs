//! The fixed set of vehicle tools
//!
//! Every tool takes the license plate under the public parameter name
//! `kenteken`; existing callers depend on that exact name.

use super::entities::{ToolBinding, ToolDefinition, ToolSpec};
use crate::dataset::DatasetId;

pub const GET_VEHICLE_INFO: &str = "get_vehicle_info";
pub const GET_VEHICLE_AXLES: &str = "get_vehicle_axles";
pub const GET_VEHICLE_FUEL: &str = "get_vehicle_fuel";
pub const GET_ODOMETER_JUDGMENT: &str = "get_odometer_judgment";
pub const GET_VEHICLE_REMARKS: &str = "get_vehicle_remarks";
pub const GET_VEHICLE_SUBCATEGORY: &str = "get_vehicle_subcategory";
pub const GET_VEHICLE_TRACKS: &str = "get_vehicle_tracks";
pub const GET_VEHICLE_BODYWORK: &str = "get_vehicle_bodywork";

/// Public name of the license-plate argument
pub const KENTEKEN_PARAM: &str = "kenteken";

const KENTEKEN_HINT: &str =
    "Het kenteken van het voertuig (bijv. '41TDK8', '41-TDK-8'). Tekens worden automatisch genormaliseerd.";

fn vehicle_tool(name: &str, description: &str, binding: ToolBinding) -> ToolDefinition {
    ToolDefinition::new(name, description, binding).with_identifier(KENTEKEN_PARAM, KENTEKEN_HINT)
}

pub fn vehicle_info_definition() -> ToolDefinition {
    vehicle_tool(
        GET_VEHICLE_INFO,
        "Haal uitgebreide technische en administratieve informatie op over een Nederlands voertuig \
         (auto, motor, vrachtwagen) via de RDW Open Data API. Gebruik deze tool voor vragen over merk, \
         model, APK-vervaldatum, motorinhoud en milieu-info. Output is in het Nederlands.",
        ToolBinding::Dataset(DatasetId::Info),
    )
    .with_subject("voertuig")
}

pub fn vehicle_axles_definition() -> ToolDefinition {
    vehicle_tool(
        GET_VEHICLE_AXLES,
        "Haal specifieke informatie op over de assen van een Nederlands voertuig (vooral voor \
         vrachtwagens/aanhangers). Bevat details over aslast en aangedreven assen. Output is in het Nederlands.",
        ToolBinding::Dataset(DatasetId::Axles),
    )
    .with_subject("as-informatie")
    .with_coverage_note("Let op: lichte personenauto's hebben vaak geen vermelding in deze dataset.")
}

pub fn vehicle_fuel_definition() -> ToolDefinition {
    vehicle_tool(
        GET_VEHICLE_FUEL,
        "Haal brandstof- en emissiegegevens op van een Nederlands voertuig, zoals brandstofsoort, \
         verbruik, CO2-uitstoot en emissieklasse. Output is in het Nederlands.",
        ToolBinding::Dataset(DatasetId::Fuel),
    )
    .with_subject("brandstofgegevens")
}

pub fn odometer_judgment_definition() -> ToolDefinition {
    vehicle_tool(
        GET_ODOMETER_JUDGMENT,
        "Haal het tellerstandoordeel op van een Nederlands voertuig (logisch, onlogisch of geen oordeel). \
         Output is in het Nederlands.",
        ToolBinding::Dataset(DatasetId::OdometerJudgment),
    )
    .with_subject("tellerstandoordeel")
}

pub fn vehicle_remarks_definition() -> ToolDefinition {
    vehicle_tool(
        GET_VEHICLE_REMARKS,
        "Haal de opmerkingen op die de RDW bij een Nederlands voertuig heeft geregistreerd. \
         Output is in het Nederlands.",
        ToolBinding::Dataset(DatasetId::Remarks),
    )
    .with_subject("opmerkingen")
}

pub fn vehicle_subcategory_definition() -> ToolDefinition {
    vehicle_tool(
        GET_VEHICLE_SUBCATEGORY,
        "Haal de subcategorie van een Nederlands voertuig op (bijv. voor landbouw- en bedrijfsvoertuigen). \
         Output is in het Nederlands.",
        ToolBinding::Dataset(DatasetId::Subcategory),
    )
    .with_subject("subcategorie")
}

pub fn vehicle_tracks_definition() -> ToolDefinition {
    vehicle_tool(
        GET_VEHICLE_TRACKS,
        "Haal rupsbandgegevens op van een Nederlands voertuig met rupsbanden. Output is in het Nederlands.",
        ToolBinding::Dataset(DatasetId::Tracks),
    )
    .with_subject("rupsbandgegevens")
    .with_coverage_note("Let op: alleen voertuigen met rupsbanden staan in deze dataset.")
}

pub fn vehicle_bodywork_definition() -> ToolDefinition {
    vehicle_tool(
        GET_VEHICLE_BODYWORK,
        "Haal carrosseriegegevens op van een Nederlands voertuig: carrosserietype, \
         carrosseriespecificatie en voertuigklasse in één antwoord. Output is in het Nederlands.",
        ToolBinding::Aggregated(vec![
            DatasetId::BodyworkBasic,
            DatasetId::BodyworkSpecification,
            DatasetId::VehicleClass,
        ]),
    )
    .with_subject("carrosseriegegevens")
}

/// Create the tool specification with every vehicle tool
pub fn vehicle_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(vehicle_info_definition())
        .register(vehicle_axles_definition())
        .register(vehicle_fuel_definition())
        .register(odometer_judgment_definition())
        .register(vehicle_remarks_definition())
        .register(vehicle_subcategory_definition())
        .register(vehicle_tracks_definition())
        .register(vehicle_bodywork_definition())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kenteken::Kenteken;

    #[test]
    fn test_spec_has_all_tools() {
        let spec = vehicle_tool_spec();
        for name in [
            GET_VEHICLE_INFO,
            GET_VEHICLE_AXLES,
            GET_VEHICLE_FUEL,
            GET_ODOMETER_JUDGMENT,
            GET_VEHICLE_REMARKS,
            GET_VEHICLE_SUBCATEGORY,
            GET_VEHICLE_TRACKS,
            GET_VEHICLE_BODYWORK,
        ] {
            assert!(spec.get(name).is_some(), "missing {}", name);
        }
        assert_eq!(spec.len(), 8);
    }

    #[test]
    fn test_every_tool_takes_kenteken() {
        for tool in vehicle_tool_spec().all() {
            assert_eq!(tool.identifier_param, KENTEKEN_PARAM);
            assert_eq!(tool.parameters.len(), 1);
            assert!(tool.parameters[0].required);
        }
    }

    #[test]
    fn test_only_bodywork_is_aggregated() {
        let spec = vehicle_tool_spec();
        let aggregated: Vec<&str> = spec
            .all()
            .filter(|t| t.binding.is_aggregated())
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(aggregated, vec![GET_VEHICLE_BODYWORK]);
        assert_eq!(
            spec.get(GET_VEHICLE_BODYWORK).unwrap().binding.datasets()[0],
            DatasetId::BodyworkBasic
        );
    }

    #[test]
    fn test_axles_not_found_carries_coverage_note() {
        let message = vehicle_axles_definition().not_found_message(&Kenteken::parse("41-tdk-8"));
        assert_eq!(
            message,
            "Geen as-informatie gevonden voor kenteken: 41TDK8. Let op: lichte personenauto's hebben vaak geen vermelding in deze dataset."
        );
    }
}
