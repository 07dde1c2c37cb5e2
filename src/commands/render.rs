//! @acp:module "Render Command"
//! @acp:summary "Print the transformed distribution fragment"
//! @acp:domain cdn
//! @acp:layer handler

use anyhow::Result;

use super::{build_plugin, PipelineOptions};
use crate::config::DeploymentConfig;

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub pipeline: PipelineOptions,
    /// Emit JSON instead of YAML
    pub json: bool,
}

/// Execute the render command
pub fn execute_render(options: RenderOptions, deployment: DeploymentConfig) -> Result<()> {
    let plugin = build_plugin(deployment, &options.pipeline)?;
    let fragment = plugin.render()?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&fragment)?);
    } else {
        print!("{}", serde_yaml::to_string(&fragment)?);
    }

    Ok(())
}
