//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types
//! ([`DatasetCatalog`]) and adapter settings ([`FetcherSettings`]).
//!
//! ```toml
//! [rdw]
//! base_url = "https://opendata.rdw.nl"
//! timeout_seconds = 10
//!
//! [datasets]
//! remarks = "sgfe-77wx"
//!
//! [logging]
//! file = "/tmp/rdw-vehicle-mcp.log"
//! ```

mod logging;
mod rdw;

pub use logging::FileLoggingConfig;
pub use rdw::FileRdwConfig;

use crate::rdw::FetcherSettings;
use rdw_domain::{DatasetCatalog, DatasetId, DomainError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("rdw.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("rdw.user_agent cannot be empty")]
    EmptyUserAgent,

    #[error(transparent)]
    Catalog(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// RDW API settings
    pub rdw: FileRdwConfig,
    /// Resource-id overrides keyed by dataset name (e.g. `vehicle-class`)
    pub datasets: BTreeMap<String, String>,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.rdw.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self
            .rdw
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.trim().is_empty())
        {
            issues.push(ConfigValidationError::EmptyUserAgent);
        }

        let catalog = match DatasetCatalog::new(&self.rdw.base_url) {
            Ok(catalog) => catalog,
            Err(e) => {
                issues.push(e.into());
                DatasetCatalog::default()
            }
        };
        for (name, resource_id) in &self.datasets {
            let result = name
                .parse::<DatasetId>()
                .and_then(|id| catalog.clone().with_resource_id(id, resource_id.trim()));
            if let Err(e) = result {
                issues.push(e.into());
            }
        }

        issues
    }

    /// Build the process-wide dataset table from `[rdw]` and `[datasets]`
    pub fn build_catalog(&self) -> Result<DatasetCatalog, ConfigValidationError> {
        let mut catalog = DatasetCatalog::new(&self.rdw.base_url)?;
        for (name, resource_id) in &self.datasets {
            let id: DatasetId = name.parse()?;
            catalog = catalog.with_resource_id(id, resource_id.trim())?;
        }
        Ok(catalog)
    }

    /// HTTP settings for the dataset fetcher
    pub fn fetcher_settings(&self) -> Result<FetcherSettings, ConfigValidationError> {
        if self.rdw.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        let user_agent = match self.rdw.user_agent.as_deref().map(str::trim) {
            Some("") => return Err(ConfigValidationError::EmptyUserAgent),
            Some(ua) => ua.to_string(),
            None => FetcherSettings::default_user_agent(),
        };

        Ok(FetcherSettings {
            timeout: Duration::from_secs(self.rdw.timeout_seconds),
            user_agent,
        })
    }
}
