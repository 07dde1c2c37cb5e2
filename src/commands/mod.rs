//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cdn
//! @acp:layer handler
//!
//! Each command stands in for one host hook so the plugin can be driven
//! without the serverless host.

pub mod info;
pub mod package;
pub mod render;

pub use info::{execute_info, InfoOptions};
pub use package::{execute_package, PackageOptions};
pub use render::{execute_render, RenderOptions};

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{DeploymentConfig, InvocationContext};
use crate::plugin::ApiCloudFront;
use crate::template::BaseTemplate;

/// Options shared by commands that run the pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Stage override
    pub stage: Option<String>,
    /// Region override
    pub region: Option<String>,
    /// Base template override
    pub base_template: Option<PathBuf>,
}

/// Build the plugin for one command invocation
pub(crate) fn build_plugin(
    deployment: DeploymentConfig,
    options: &PipelineOptions,
) -> Result<ApiCloudFront> {
    let invocation = InvocationContext::resolve(
        &deployment,
        options.stage.as_deref(),
        options.region.as_deref(),
    );
    let plugin = ApiCloudFront::new(deployment, invocation);

    match &options.base_template {
        Some(path) => {
            let template = BaseTemplate::from_path(path)
                .with_context(|| format!("Failed to load base template from {:?}", path))?;
            Ok(plugin.with_base_template(template))
        }
        None => Ok(plugin),
    }
}
