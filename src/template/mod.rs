//! @acp:module "Resource Template"
//! @acp:summary "Base distribution template loading and typed access"
//! @acp:domain cdn
//! @acp:layer io
//!
//! The base template is a CloudFormation fragment holding one
//! `AWS::CloudFront::Distribution` resource and its domain-name output.
//! A default copy is compiled into the binary; a project may point at its
//! own file instead.

pub mod distribution;
pub mod merge;

pub use distribution::{
    Cookies, DefaultCacheBehavior, DistributionConfig, ForwardedValues, Logging, Origin,
    OriginCustomHeader, Tag, ViewerCertificate,
};
pub use merge::merge;

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{ApiCloudFrontError, Result};

/// Logical id of the distribution resource and of its output
pub const DISTRIBUTION_LOGICAL_ID: &str = "ApiDistribution";

/// Logical id the host gives a REST API (API Gateway v1)
pub const REST_API_LOGICAL_ID: &str = "ApiGatewayRestApi";

/// Logical id the host gives an HTTP API (API Gateway v2)
pub const HTTP_API_LOGICAL_ID: &str = "HttpApi";

const DEFAULT_TEMPLATE: &str = include_str!("../../templates/resources.yml");

/// @acp:summary "Parsed base template, cloned for every pipeline run"
#[derive(Debug, Clone, PartialEq)]
pub struct BaseTemplate {
    document: Value,
}

impl BaseTemplate {
    /// @acp:summary "Template shipped with the crate"
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(DEFAULT_TEMPLATE)
    }

    /// @acp:summary "Load a YAML or JSON template from disk"
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded base template from {}", path.display());
        // YAML is a superset of JSON, one parser covers both
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(content)?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self> {
        let template = Self { document };
        // Fail at load time rather than halfway through a run
        template.distribution_config()?;
        Ok(template)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Fresh, exclusively owned copy for one run
    pub fn instantiate(&self) -> Value {
        self.document.clone()
    }

    /// @acp:summary "Typed DistributionConfig of the base template"
    pub fn distribution_config(&self) -> Result<DistributionConfig> {
        let raw = distribution_properties(&self.document)?
            .get("DistributionConfig")
            .cloned()
            .ok_or_else(|| {
                ApiCloudFrontError::Template(format!(
                    "{} has no Properties.DistributionConfig",
                    DISTRIBUTION_LOGICAL_ID
                ))
            })?;
        serde_json::from_value(raw).map_err(|e| {
            ApiCloudFrontError::Template(format!("Malformed DistributionConfig: {}", e))
        })
    }
}

/// `Resources.ApiDistribution.Properties` of a template document
pub fn distribution_properties(document: &Value) -> Result<&Map<String, Value>> {
    document
        .get("Resources")
        .and_then(|r| r.get(DISTRIBUTION_LOGICAL_ID))
        .and_then(|d| d.get("Properties"))
        .and_then(Value::as_object)
        .ok_or_else(missing_distribution)
}

/// Mutable counterpart of [`distribution_properties`]
pub fn distribution_properties_mut(document: &mut Value) -> Result<&mut Map<String, Value>> {
    document
        .get_mut("Resources")
        .and_then(|r| r.get_mut(DISTRIBUTION_LOGICAL_ID))
        .and_then(|d| d.get_mut("Properties"))
        .and_then(Value::as_object_mut)
        .ok_or_else(missing_distribution)
}

fn missing_distribution() -> ApiCloudFrontError {
    ApiCloudFrontError::Template(format!(
        "Resources.{}.Properties not found",
        DISTRIBUTION_LOGICAL_ID
    ))
}
