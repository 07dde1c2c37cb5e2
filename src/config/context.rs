//! @acp:module "Invocation Context"
//! @acp:summary "Per-invocation inputs resolved from CLI flags and the deployment config"
//! @acp:domain cdn
//! @acp:layer config

use super::DeploymentConfig;

/// Stage used when neither the caller nor the provider names one
pub const DEFAULT_STAGE: &str = "dev";

/// Region used when neither the caller nor the provider names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// @acp:summary "Deployment stage and region for one pipeline run"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub stage: String,
    pub region: String,
}

impl InvocationContext {
    pub fn new(stage: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            region: region.into(),
        }
    }

    /// Explicit options win, then the provider block, then the defaults.
    pub fn resolve(
        deployment: &DeploymentConfig,
        stage: Option<&str>,
        region: Option<&str>,
    ) -> Self {
        let stage = stage
            .map(str::to_string)
            .or_else(|| deployment.provider.stage.clone())
            .unwrap_or_else(|| DEFAULT_STAGE.to_string());
        let region = region
            .map(str::to_string)
            .or_else(|| deployment.provider.region.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        Self { stage, region }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new(DEFAULT_STAGE, DEFAULT_REGION)
    }
}
