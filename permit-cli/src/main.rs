//! Permit CLI - resolve project addresses to permitting jurisdictions.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "permit-cli",
    version,
    about = "Permit jurisdiction lookup toolkit"
)]
struct Cli {
    /// Base URL of the permit application
    #[arg(long, env = "PERMIT_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    #[command(subcommand)]
    command: permit_cmd::Command,
}

// The resolver is single-threaded (Rc-based), so stay on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using permit API at {}", cli.base_url);
    permit_cmd::run(&cli.base_url, cli.command).await
}
