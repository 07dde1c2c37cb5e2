//! @acp:module "Info Command"
//! @acp:summary "Print the deployed CloudFront domain name"
//! @acp:domain cdn
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::{DeploymentConfig, InvocationContext};
use crate::plugin::ApiCloudFront;
use crate::summary::{GatheredOutputs, PluginRegistry, SUMMARY_HEADING};

/// Options for the info command
#[derive(Debug, Clone)]
pub struct InfoOptions {
    /// Stack outputs (JSON list or describe-stacks document)
    pub outputs: PathBuf,
}

/// Execute the info command
///
/// Prints nothing when the outputs do not contain the distribution.
pub fn execute_info(options: InfoOptions, deployment: DeploymentConfig) -> Result<()> {
    let gathered = GatheredOutputs::load(&options.outputs)
        .with_context(|| format!("Failed to read stack outputs from {:?}", options.outputs))?;

    let invocation = InvocationContext::resolve(&deployment, None, None);
    let plugin = ApiCloudFront::new(deployment, invocation);

    let mut registry = PluginRegistry::new();
    registry.register(Box::new(gathered));

    if let Some(summary) = plugin.info(&registry) {
        println!("{}", style(SUMMARY_HEADING).yellow());
        println!("  {}", summary);
    }

    Ok(())
}
