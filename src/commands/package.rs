//! @acp:module "Package Command"
//! @acp:summary "Merge the CloudFront distribution into a compiled template"
//! @acp:domain cdn
//! @acp:layer handler
//!
//! Implements `api-cloudfront package`, the artifact assembly hook.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use super::{build_plugin, PipelineOptions};
use crate::config::DeploymentConfig;

/// Options for the package command
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Compiled CloudFormation template (JSON)
    pub template: PathBuf,
    /// Where to write the merged template; stdout when absent
    pub output: Option<PathBuf>,
    pub pipeline: PipelineOptions,
}

/// Execute the package command
pub fn execute_package(options: PackageOptions, deployment: DeploymentConfig) -> Result<()> {
    let content = std::fs::read_to_string(&options.template)
        .with_context(|| format!("Failed to read template from {:?}", options.template))?;
    let mut template: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse template from {:?}", options.template))?;

    let plugin = build_plugin(deployment, &options.pipeline)?;
    plugin.package(&mut template)?;

    let merged = serde_json::to_string_pretty(&template)?;
    match &options.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, merged)
                .with_context(|| format!("Failed to write template to {:?}", path))?;
            eprintln!(
                "{} CloudFront distribution added to {} (stage {})",
                style("✓").green(),
                path.display(),
                plugin.invocation().stage
            );
        }
        None => println!("{}", merged),
    }

    Ok(())
}
