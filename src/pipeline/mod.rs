//! @acp:module "Transformation Pipeline"
//! @acp:summary "Runs the distribution rules over a fresh copy of the base template"
//! @acp:domain cdn
//! @acp:layer service

use serde_json::{Map, Value};

use crate::config::scalar_to_string;
use crate::error::Result;
use crate::rules::{standard_rules, Rule, RuleContext};
use crate::template::{distribution_properties_mut, BaseTemplate, Tag};

/// Main pipeline - owns the ordered rule set
pub struct TransformationPipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl TransformationPipeline {
    /// Create a pipeline with the built-in rules in their fixed order
    pub fn new() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// @acp:summary "Produce the transformed resource fragment"
    ///
    /// Works on a clone of `base`; the base template is never modified.
    /// `stack_tags` comes from the deployment config rather than the plugin
    /// section, so it is applied after the rules.
    pub fn transform(
        &self,
        base: &BaseTemplate,
        context: &RuleContext<'_>,
        stack_tags: Option<&Map<String, Value>>,
    ) -> Result<Value> {
        let mut document = base.instantiate();
        let mut distribution = base.distribution_config()?;

        for rule in &self.rules {
            tracing::debug!("Applying distribution rule: {}", rule.name());
            rule.apply(context, &mut distribution);
        }

        let properties = distribution_properties_mut(&mut document)?;
        properties.insert(
            "DistributionConfig".to_string(),
            serde_json::to_value(&distribution)?,
        );
        if let Some(tags) = stack_tags {
            properties.insert("Tags".to_string(), serde_json::to_value(tags_from_map(tags))?);
        }

        Ok(document)
    }
}

impl Default for TransformationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Key/value map to a CloudFormation tag list, keeping map order
pub fn tags_from_map(tags: &Map<String, Value>) -> Vec<Tag> {
    tags.iter()
        .map(|(key, value)| Tag {
            key: key.clone(),
            value: scalar_to_string(value),
        })
        .collect()
}
