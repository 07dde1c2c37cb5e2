#![forbid(unsafe_code)]

//! @acp:module "api-cloudfront Library"
//! @acp:summary "CloudFront distribution in front of a serverless API Gateway"
//! @acp:domain cdn
//! @acp:layer api
//! @acp:stability stable
//!
//! # api-cloudfront
//!
//! Adds an `AWS::CloudFront::Distribution` resource to a compiled
//! CloudFormation template and points it at the service's API Gateway.
//!
//! ## Features
//!
//! - **Typed rules**: fourteen ordered rules rewrite the distribution config
//! - **Deep merge**: the fragment is merged into the caller's template
//! - **Summary**: prints the deployed CloudFront domain next to its CNAME
//!
//! ## Example
//!
//! ```rust,no_run
//! use api_cloudfront::{ApiCloudFront, DeploymentConfig, InvocationContext};
//!
//! fn main() -> anyhow::Result<()> {
//!     let deployment = DeploymentConfig::load("serverless.yml")?;
//!     let invocation = InvocationContext::resolve(&deployment, Some("prod"), None);
//!     let plugin = ApiCloudFront::new(deployment, invocation);
//!
//!     let mut compiled: serde_json::Value =
//!         serde_json::from_str(&std::fs::read_to_string("cloudformation-template.json")?)?;
//!     plugin.package(&mut compiled)?;
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod plugin;
pub mod rules;
pub mod summary;
pub mod template;

// Re-exports
pub use config::{
    CertificateSettings, CloudFrontConfig, ConfigAccessor, CookieForwarding, DeploymentConfig,
    HeaderForwarding, InvocationContext, LoggingSettings, OriginHeader, QueryStringForwarding,
    TtlSettings,
};
pub use error::{ApiCloudFrontError, Result};
pub use naming::{ApiNaming, ServerlessNaming};
pub use pipeline::TransformationPipeline;
pub use plugin::ApiCloudFront;
pub use rules::{Rule, RuleContext};
pub use summary::{
    GatheredOutputs, Plugin, PluginRegistry, StackOutput, StackOutputsProvider, Summary,
    SummaryReporter,
};
pub use template::{merge, BaseTemplate, DistributionConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
