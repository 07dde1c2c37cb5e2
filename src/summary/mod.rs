//! @acp:module "Deployment Summary"
//! @acp:summary "Reports the deployed CloudFront domain after a deploy"
//! @acp:domain cdn
//! @acp:layer service
//!
//! The host keeps a registry of sibling plugins. One of them gathered the
//! stack outputs during deploy; it is found by capability
//! ([`Plugin::as_outputs_provider`]), never by name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::config::CloudFrontConfig;
use crate::template::DISTRIBUTION_LOGICAL_ID;

/// One CloudFormation stack output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackOutput {
    pub output_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Capability: exposes the stack outputs gathered during deploy
pub trait StackOutputsProvider {
    /// None until outputs have been gathered
    fn gathered_outputs(&self) -> Option<&[StackOutput]>;
}

/// A plugin registered with the host
pub trait Plugin {
    fn name(&self) -> &str;

    fn as_outputs_provider(&self) -> Option<&dyn StackOutputsProvider> {
        None
    }
}

/// Registry of host plugins, queried by capability
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Registered plugin names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// First registered plugin exposing stack outputs
    pub fn find_outputs_provider(&self) -> Option<&dyn StackOutputsProvider> {
        self.plugins.iter().find_map(|p| p.as_outputs_provider())
    }
}

/// @acp:summary "Outputs gathered outside the host, e.g. from describe-stacks"
#[derive(Debug, Clone, Default)]
pub struct GatheredOutputs {
    outputs: Option<Vec<StackOutput>>,
}

/// `aws cloudformation describe-stacks` shapes accepted by [`GatheredOutputs::from_json`]
#[derive(Deserialize)]
#[serde(untagged)]
enum OutputsDocument {
    List(Vec<StackOutput>),
    Stack {
        #[serde(rename = "Outputs")]
        outputs: Vec<StackOutput>,
    },
    Stacks {
        #[serde(rename = "Stacks")]
        stacks: Vec<StackDescription>,
    },
}

#[derive(Deserialize)]
struct StackDescription {
    #[serde(rename = "Outputs", default)]
    outputs: Vec<StackOutput>,
}

impl GatheredOutputs {
    /// Provider whose data has not been gathered yet
    pub fn pending() -> Self {
        Self { outputs: None }
    }

    pub fn new(outputs: Vec<StackOutput>) -> Self {
        Self {
            outputs: Some(outputs),
        }
    }

    /// @acp:summary "Parse an outputs list or a describe-stacks document"
    pub fn from_json(content: &str) -> crate::Result<Self> {
        let outputs = match serde_json::from_str::<OutputsDocument>(content)? {
            OutputsDocument::List(outputs) => outputs,
            OutputsDocument::Stack { outputs } => outputs,
            OutputsDocument::Stacks { stacks } => {
                stacks.into_iter().flat_map(|s| s.outputs).collect()
            }
        };
        Ok(Self::new(outputs))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl StackOutputsProvider for GatheredOutputs {
    fn gathered_outputs(&self) -> Option<&[StackOutput]> {
        self.outputs.as_deref()
    }
}

impl Plugin for GatheredOutputs {
    fn name(&self) -> &str {
        "gathered-outputs"
    }

    fn as_outputs_provider(&self) -> Option<&dyn StackOutputsProvider> {
        Some(self)
    }
}

/// @acp:summary "Deployed CloudFront domain paired with its configured CNAME"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub domain_name: String,
    pub cname: String,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (CNAME: {})", self.domain_name, self.cname)
    }
}

/// Heading printed above the summary line
pub const SUMMARY_HEADING: &str = "CloudFront domain name";

/// Looks up the distribution output and builds the [`Summary`]
pub struct SummaryReporter<'a> {
    config: &'a CloudFrontConfig,
}

impl<'a> SummaryReporter<'a> {
    pub fn new(config: &'a CloudFrontConfig) -> Self {
        Self { config }
    }

    /// @acp:summary "Summary line, or None when anything needed is missing"
    pub fn report(&self, registry: &PluginRegistry) -> Option<Summary> {
        if registry.is_empty() {
            tracing::debug!("No plugins registered, skipping summary");
            return None;
        }
        let Some(provider) = registry.find_outputs_provider() else {
            tracing::debug!(
                "No stack outputs provider among {} plugins ({}), skipping summary",
                registry.len(),
                registry.names().join(", ")
            );
            return None;
        };
        let Some(outputs) = provider.gathered_outputs() else {
            tracing::debug!("Stack outputs not gathered, skipping summary");
            return None;
        };
        let domain_name = outputs
            .iter()
            .find(|o| o.output_key == DISTRIBUTION_LOGICAL_ID)
            .and_then(|o| o.output_value.as_deref())
            .filter(|v| !v.is_empty());
        let Some(domain_name) = domain_name else {
            tracing::debug!("No {} output value, skipping summary", DISTRIBUTION_LOGICAL_ID);
            return None;
        };

        Some(Summary {
            domain_name: domain_name.to_string(),
            cname: self.config.cname(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Deployer;

    impl Plugin for Deployer {
        fn name(&self) -> &str {
            "deploy"
        }
    }

    fn output(key: &str, value: Option<&str>) -> StackOutput {
        StackOutput {
            output_key: key.to_string(),
            output_value: value.map(str::to_string),
            description: None,
        }
    }

    fn registry_with(outputs: GatheredOutputs) -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(Deployer));
        registry.register(Box::new(outputs));
        registry
    }

    #[test]
    fn test_report_with_domain() {
        let config = CloudFrontConfig::from_value(&json!({"domain": "api.example.com"}));
        let registry = registry_with(GatheredOutputs::new(vec![
            output("ServiceEndpoint", Some("https://x.execute-api.us-east-1.amazonaws.com/prod")),
            output("ApiDistribution", Some("d111111abcdef8.cloudfront.net")),
        ]));

        let summary = SummaryReporter::new(&config).report(&registry).unwrap();
        assert_eq!(
            summary.to_string(),
            "d111111abcdef8.cloudfront.net (CNAME: api.example.com)"
        );
    }

    #[test]
    fn test_report_without_domain_uses_placeholder() {
        let config = CloudFrontConfig::default();
        let registry = registry_with(GatheredOutputs::new(vec![output(
            "ApiDistribution",
            Some("d111111abcdef8.cloudfront.net"),
        )]));

        let summary = SummaryReporter::new(&config).report(&registry).unwrap();
        assert_eq!(summary.cname, "-");
    }

    #[test]
    fn test_report_skips_silently() {
        let config = CloudFrontConfig::default();
        let reporter = SummaryReporter::new(&config);

        assert_eq!(reporter.report(&PluginRegistry::new()), None);

        let mut no_provider = PluginRegistry::new();
        no_provider.register(Box::new(Deployer));
        assert_eq!(reporter.report(&no_provider), None);

        assert_eq!(reporter.report(&registry_with(GatheredOutputs::pending())), None);

        let no_output = registry_with(GatheredOutputs::new(vec![output("Other", Some("x"))]));
        assert_eq!(reporter.report(&no_output), None);

        let empty_value = registry_with(GatheredOutputs::new(vec![output("ApiDistribution", None)]));
        assert_eq!(reporter.report(&empty_value), None);
    }

    #[test]
    fn test_registry_names_in_order() {
        let registry = registry_with(GatheredOutputs::pending());

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert_eq!(registry.names(), vec!["deploy", "gathered-outputs"]);
    }

    #[test]
    fn test_outputs_document_shapes() {
        let list = GatheredOutputs::from_json(
            r#"[{"OutputKey": "ApiDistribution", "OutputValue": "d1.cloudfront.net"}]"#,
        )
        .unwrap();
        assert_eq!(list.gathered_outputs().unwrap().len(), 1);

        let stacks = GatheredOutputs::from_json(
            r#"{"Stacks": [{"StackName": "orders-prod", "Outputs": [
                {"OutputKey": "ApiDistribution", "OutputValue": "d1.cloudfront.net", "Description": "cdn"}
            ]}]}"#,
        )
        .unwrap();
        assert_eq!(
            stacks.gathered_outputs().unwrap()[0].output_value.as_deref(),
            Some("d1.cloudfront.net")
        );
    }
}
