//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cdn
//! @acp:layer model

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ApiCloudFrontError>;

/// @acp:summary "Errors raised while building or merging the distribution"
#[derive(Debug, Error)]
pub enum ApiCloudFrontError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The base template is missing a structure the pipeline relies on
    #[error("Invalid base template: {0}")]
    Template(String),
}
