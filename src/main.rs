#![forbid(unsafe_code)]
//! API CloudFront Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use api_cloudfront::commands::{
    execute_info, execute_package, execute_render, InfoOptions, PackageOptions, PipelineOptions,
    RenderOptions,
};
use api_cloudfront::DeploymentConfig;

#[derive(Parser)]
#[command(name = "api-cloudfront")]
#[command(about = "CloudFront distribution in front of a serverless API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Deployment config file path
    #[arg(short, long, global = true, default_value = "serverless.yml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the CloudFront distribution into a compiled template
    Package {
        /// Compiled CloudFormation template (JSON)
        #[arg(short, long)]
        template: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Print the CloudFront domain name from deployed stack outputs
    Info {
        /// Stack outputs file (JSON)
        #[arg(long)]
        outputs: PathBuf,
    },

    /// Print the transformed distribution fragment
    Render {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Output as JSON (default: YAML)
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct PipelineArgs {
    /// Deployment stage
    #[arg(short, long, env = "SLS_STAGE")]
    stage: Option<String>,

    /// Deployment region
    #[arg(short, long, env = "AWS_REGION")]
    region: Option<String>,

    /// Base template override (YAML)
    #[arg(long)]
    base_template: Option<PathBuf>,
}

impl From<PipelineArgs> for PipelineOptions {
    fn from(args: PipelineArgs) -> Self {
        Self {
            stage: args.stage,
            region: args.region,
            base_template: args.base_template,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load deployment config
    let deployment = if cli.config.exists() {
        DeploymentConfig::load(&cli.config)?
    } else {
        tracing::debug!("No config at {:?}, using defaults", cli.config);
        DeploymentConfig::default()
    };

    let result = match cli.command {
        Commands::Package {
            template,
            output,
            pipeline,
        } => {
            let options = PackageOptions {
                template,
                output,
                pipeline: pipeline.into(),
            };
            execute_package(options, deployment)
        }

        Commands::Info { outputs } => execute_info(InfoOptions { outputs }, deployment),

        Commands::Render { pipeline, json } => {
            let options = RenderOptions {
                pipeline: pipeline.into(),
                json,
            };
            execute_render(options, deployment)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }

    Ok(())
}
