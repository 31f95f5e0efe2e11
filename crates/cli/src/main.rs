use clap::{Parser, Subcommand};
use colored::Colorize;

use commands::describe::DescribeArgs;

mod commands {
    pub mod describe;
}
mod output;
mod prompt;

#[derive(Parser)]
#[command(name = "ec2scope")]
#[command(version)]
#[command(about = "A lightweight, interactive AWS EC2 utility")]
#[command(
    long_about = "ec2scope is a simple, interactive AWS utility that fetches EC2 instance\n\
                  details in a clean, readable format. It provides both interactive and\n\
                  flag-based modes for querying EC2 instances."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Describe(DescribeArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Describe(args) => commands::describe::run(args).await,
    };

    if let Err(error) = result {
        eprintln!("{} {error:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with rendered output on stdout.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
