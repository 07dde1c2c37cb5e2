//! @acp:module "Plugin Facade"
//! @acp:summary "Binds the host's package and info hooks to the pipeline and reporter"
//! @acp:domain cdn
//! @acp:layer api

use serde_json::Value;

use crate::config::{CloudFrontConfig, DeploymentConfig, InvocationContext};
use crate::error::Result;
use crate::naming::ServerlessNaming;
use crate::pipeline::TransformationPipeline;
use crate::rules::RuleContext;
use crate::summary::{Plugin, PluginRegistry, Summary, SummaryReporter};
use crate::template::{merge, BaseTemplate, DISTRIBUTION_LOGICAL_ID};

/// @acp:summary "The API CloudFront plugin for one deployment invocation"
pub struct ApiCloudFront {
    deployment: DeploymentConfig,
    config: CloudFrontConfig,
    invocation: InvocationContext,
    base_template: Option<BaseTemplate>,
    pipeline: TransformationPipeline,
}

impl ApiCloudFront {
    pub fn new(deployment: DeploymentConfig, invocation: InvocationContext) -> Self {
        let config = deployment.cloudfront_config();
        Self {
            deployment,
            config,
            invocation,
            base_template: None,
            pipeline: TransformationPipeline::new(),
        }
    }

    /// Use `template` instead of the built-in base template
    pub fn with_base_template(mut self, template: BaseTemplate) -> Self {
        self.base_template = Some(template);
        self
    }

    pub fn config(&self) -> &CloudFrontConfig {
        &self.config
    }

    pub fn invocation(&self) -> &InvocationContext {
        &self.invocation
    }

    /// @acp:summary "Transformed distribution fragment, not yet merged"
    pub fn render(&self) -> Result<Value> {
        let base = match &self.base_template {
            Some(template) => template.clone(),
            None => BaseTemplate::builtin()?,
        };
        let naming = ServerlessNaming::new(&self.deployment, &self.invocation);
        let context = RuleContext::new(&self.config, &self.invocation, &naming);

        self.pipeline.transform(
            &base,
            &context,
            self.deployment.provider.stack_tags.as_ref(),
        )
    }

    /// @acp:summary "Artifact assembly hook: merge the distribution into `template`"
    pub fn package(&self, template: &mut Value) -> Result<()> {
        let fragment = self.render()?;
        merge(template, fragment);
        tracing::info!(
            "Merged {} into the compiled template (stage {})",
            DISTRIBUTION_LOGICAL_ID,
            self.invocation.stage
        );
        Ok(())
    }

    /// @acp:summary "Post-deploy hook: summary line, if outputs are available"
    pub fn info(&self, registry: &PluginRegistry) -> Option<Summary> {
        SummaryReporter::new(&self.config).report(registry)
    }
}

impl Plugin for ApiCloudFront {
    fn name(&self) -> &str {
        "api-cloudfront"
    }
}
