//! RDW API configuration from TOML (`[rdw]` section)

use rdw_domain::DatasetCatalog;
use serde::{Deserialize, Serialize};

/// Raw RDW API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRdwConfig {
    /// Base URL of the open-data API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with every request
    pub user_agent: Option<String>,
}

impl Default for FileRdwConfig {
    fn default() -> Self {
        Self {
            base_url: DatasetCatalog::DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}
