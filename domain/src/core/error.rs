//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Invalid resource id for dataset '{dataset}': {resource_id}")]
    InvalidResourceId { dataset: String, resource_id: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dataset_display() {
        let error = DomainError::UnknownDataset("wheels".to_string());
        assert_eq!(error.to_string(), "Unknown dataset: wheels");
    }
}
