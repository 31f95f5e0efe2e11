use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use ec2scope_aws::AwsProvider;
use ec2scope_core::cloud_provider::ComputeProvider;
use tracing::debug;

use crate::output::{self, OutputFormat};
use crate::prompt::{DEFAULT_REGION, Prompt, TerminalPrompt, normalize_region};

#[derive(Args, Debug)]
#[command(about = "Describe EC2 instances")]
#[command(
    long_about = "Describe EC2 instances with interactive prompts or command-line flags.\n\n\
                  Interactive mode (default):\n  ec2scope describe\n\n\
                  Flag mode:\n  ec2scope describe --region eu-north-1 --instance-id i-0abc1234 --json"
)]
pub struct DescribeArgs {
    #[arg(short = 'r', long, help = "AWS region (e.g., eu-north-1)")]
    pub region: Option<String>,

    #[arg(short = 'i', long, help = "Filter by instance ID")]
    pub instance_id: Option<String>,

    #[arg(long, help = "Output in JSON format")]
    pub json: bool,
}

/// One invocation's worth of settings, resolved from flags or prompts
/// before any network call happens.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DescribeConfig {
    region: String,
    instance_id: Option<String>,
    format: OutputFormat,
}

impl DescribeConfig {
    fn from_flags(args: &DescribeArgs) -> Self {
        let region = args
            .region
            .as_deref()
            .map(normalize_region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let instance_id = args.instance_id.clone().filter(|id| !id.is_empty());
        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Pretty
        };

        Self {
            region,
            instance_id,
            format,
        }
    }

    fn from_prompts(prompt: &dyn Prompt) -> Result<Self> {
        let region = prompt.ask_region()?;

        let instance_id = if prompt.ask_filter()? {
            let id = prompt.ask_instance_id()?;
            (!id.is_empty()).then_some(id)
        } else {
            None
        };

        let format = prompt.ask_output_format()?;

        Ok(Self {
            region,
            instance_id,
            format,
        })
    }
}

/// Flags win over prompts: supplying any of the three switches the
/// command into flag mode. An explicitly empty region or instance id
/// counts as unset.
fn is_interactive(args: &DescribeArgs) -> bool {
    args.region.as_deref().unwrap_or("").is_empty()
        && args.instance_id.as_deref().unwrap_or("").is_empty()
        && !args.json
}

pub async fn run(args: DescribeArgs) -> Result<()> {
    let config = if is_interactive(&args) {
        DescribeConfig::from_prompts(&TerminalPrompt)?
    } else {
        DescribeConfig::from_flags(&args)
    };

    let provider = AwsProvider::new(&config.region).await;
    debug!(region = provider.region(), filter = ?config.instance_id, "resolved describe config");

    execute(&provider, &config, std::io::stdout()).await
}

async fn execute(
    provider: &dyn ComputeProvider,
    config: &DescribeConfig,
    mut out: impl Write,
) -> Result<()> {
    let instances = provider
        .describe_instances(config.instance_id.as_deref())
        .await?;

    if instances.is_empty() {
        writeln!(out, "No instances found.")?;
        return Ok(());
    }

    match config.format {
        OutputFormat::Json => {
            let json = output::render_json(&instances).context("failed to render instances")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Pretty => {
            write!(out, "{}", output::render_text(&instances))?;
        }
    }

    Ok(())
}
