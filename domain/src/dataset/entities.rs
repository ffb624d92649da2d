//! Dataset domain entities

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// Logical name of one RDW open-data dataset keyed by kenteken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetId {
    /// Gekentekende voertuigen (base registration record)
    Info,
    /// Gekentekende voertuigen assen
    Axles,
    /// Gekentekende voertuigen brandstof
    Fuel,
    /// Tellerstandoordeel
    OdometerJudgment,
    /// Opmerkingen
    Remarks,
    /// Subcategorie voertuig
    Subcategory,
    /// Rupsbanden
    Tracks,
    /// Carrosserie
    BodyworkBasic,
    /// Carrosserie specificatie
    BodyworkSpecification,
    /// Voertuigklasse
    VehicleClass,
}

impl DatasetId {
    /// Every dataset, in catalog order
    pub const ALL: [DatasetId; 10] = [
        DatasetId::Info,
        DatasetId::Axles,
        DatasetId::Fuel,
        DatasetId::OdometerJudgment,
        DatasetId::Remarks,
        DatasetId::Subcategory,
        DatasetId::Tracks,
        DatasetId::BodyworkBasic,
        DatasetId::BodyworkSpecification,
        DatasetId::VehicleClass,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetId::Info => "info",
            DatasetId::Axles => "axles",
            DatasetId::Fuel => "fuel",
            DatasetId::OdometerJudgment => "odometer-judgment",
            DatasetId::Remarks => "remarks",
            DatasetId::Subcategory => "subcategory",
            DatasetId::Tracks => "tracks",
            DatasetId::BodyworkBasic => "bodywork-basic",
            DatasetId::BodyworkSpecification => "bodywork-specification",
            DatasetId::VehicleClass => "vehicle-class",
        }
    }

    /// Socrata resource id published by the RDW for this dataset
    pub fn default_resource_id(&self) -> &'static str {
        match self {
            DatasetId::Info => "m9d7-ebf2",
            DatasetId::Axles => "3huj-srit",
            DatasetId::Fuel => "8ys7-d773",
            DatasetId::OdometerJudgment => "a34c-vvps",
            DatasetId::Remarks => "sgfe-77wx",
            DatasetId::Subcategory => "2ba7-embk",
            DatasetId::Tracks => "3xwf-ince",
            DatasetId::BodyworkBasic => "vezc-m2t6",
            DatasetId::BodyworkSpecification => "jhie-znh9",
            DatasetId::VehicleClass => "kmfi-hrps",
        }
    }

    /// How many records a single kenteken is expected to yield
    pub fn shape(&self) -> RecordShape {
        match self {
            DatasetId::Info | DatasetId::OdometerJudgment => RecordShape::Single,
            _ => RecordShape::Multiple,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DatasetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        DatasetId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownDataset(s.to_string()))
    }
}

/// Expected response shape for one kenteken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordShape {
    /// At most one meaningful record; tools return element 0
    Single,
    /// Any number of records; tools return the full list
    Multiple,
}

/// Resolved endpoint for one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub id: DatasetId,
    pub resource_id: String,
    pub endpoint: String,
    pub shape: RecordShape,
}

/// Process-wide dataset → endpoint table.
///
/// Built once at startup (defaults plus config overrides) and shared
/// read-only afterwards. Every [`DatasetId`] always has a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCatalog {
    base_url: String,
    descriptors: Vec<DatasetDescriptor>,
}

impl DatasetCatalog {
    pub const DEFAULT_BASE_URL: &'static str = "https://opendata.rdw.nl";

    /// Catalog pointing at `base_url` with the published resource ids
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"));
        if host.is_none_or(str::is_empty) {
            return Err(DomainError::InvalidBaseUrl(base_url));
        }

        Ok(Self::with_published_ids(base_url))
    }

    fn with_published_ids(base_url: String) -> Self {
        let descriptors = DatasetId::ALL
            .into_iter()
            .map(|id| DatasetDescriptor {
                id,
                resource_id: id.default_resource_id().to_string(),
                endpoint: endpoint_for(&base_url, id.default_resource_id()),
                shape: id.shape(),
            })
            .collect();

        Self {
            base_url,
            descriptors,
        }
    }

    /// Replace the resource id of one dataset (builder pattern)
    pub fn with_resource_id(
        mut self,
        id: DatasetId,
        resource_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let resource_id = resource_id.into();
        let valid = !resource_id.is_empty()
            && resource_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(DomainError::InvalidResourceId {
                dataset: id.to_string(),
                resource_id,
            });
        }

        let endpoint = endpoint_for(&self.base_url, &resource_id);
        let descriptor = &mut self.descriptors[id.index()];
        descriptor.endpoint = endpoint;
        descriptor.resource_id = resource_id;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, id: DatasetId) -> &DatasetDescriptor {
        &self.descriptors[id.index()]
    }

    pub fn all(&self) -> impl Iterator<Item = &DatasetDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::with_published_ids(Self::DEFAULT_BASE_URL.to_string())
    }
}

fn endpoint_for(base_url: &str, resource_id: &str) -> String {
    format!("{}/resource/{}.json", base_url, resource_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_endpoints() {
        let catalog = DatasetCatalog::default();
        assert_eq!(
            catalog.get(DatasetId::Info).endpoint,
            "https://opendata.rdw.nl/resource/m9d7-ebf2.json"
        );
        assert_eq!(
            catalog.get(DatasetId::Axles).endpoint,
            "https://opendata.rdw.nl/resource/3huj-srit.json"
        );
        assert_eq!(catalog.all().count(), DatasetId::ALL.len());
    }

    #[test]
    fn test_descriptor_lookup_matches_id() {
        let catalog = DatasetCatalog::default();
        for id in DatasetId::ALL {
            assert_eq!(catalog.get(id).id, id);
        }
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let catalog = DatasetCatalog::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(catalog.base_url(), "http://127.0.0.1:8080");
        assert_eq!(
            catalog.get(DatasetId::Fuel).endpoint,
            "http://127.0.0.1:8080/resource/8ys7-d773.json"
        );
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        assert!(matches!(
            DatasetCatalog::new("ftp://opendata.rdw.nl"),
            Err(DomainError::InvalidBaseUrl(_))
        ));
        assert!(DatasetCatalog::new("https://").is_err());
    }

    #[test]
    fn test_resource_override() {
        let catalog = DatasetCatalog::default()
            .with_resource_id(DatasetId::Remarks, "abcd-1234")
            .unwrap();
        let remarks = catalog.get(DatasetId::Remarks);
        assert_eq!(remarks.resource_id, "abcd-1234");
        assert!(remarks.endpoint.ends_with("/resource/abcd-1234.json"));
        // Others untouched
        assert_eq!(catalog.get(DatasetId::Info).resource_id, "m9d7-ebf2");
    }

    #[test]
    fn test_resource_override_rejects_path_characters() {
        let result = DatasetCatalog::default().with_resource_id(DatasetId::Info, "../etc");
        assert!(matches!(
            result,
            Err(DomainError::InvalidResourceId { .. })
        ));
    }

    #[test]
    fn test_dataset_id_parse() {
        assert_eq!("bodywork-basic".parse::<DatasetId>().unwrap(), DatasetId::BodyworkBasic);
        assert_eq!("vehicle_class".parse::<DatasetId>().unwrap(), DatasetId::VehicleClass);
        assert_eq!(" INFO ".parse::<DatasetId>().unwrap(), DatasetId::Info);
        assert!("wheels".parse::<DatasetId>().is_err());
    }

    #[test]
    fn test_shapes() {
        assert_eq!(DatasetId::Info.shape(), RecordShape::Single);
        assert_eq!(DatasetId::Axles.shape(), RecordShape::Multiple);
    }
}
