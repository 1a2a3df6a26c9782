//! Command implementations for the permit CLI.
//!
//! Provides subcommands that run the jurisdiction resolver and the enabled
//! jurisdictions search against the permit HTTP API.

use clap::Subcommand;
use permit_core::client::PermitApiClient;

pub mod jurisdictions;
pub mod resolve;

#[derive(Subcommand)]
pub enum Command {
    /// Resolve the jurisdiction responsible for a project address
    Resolve {
        /// Project address as understood by the geocoder (may be empty)
        address: String,

        /// When nothing matches, pick the first jurisdiction matching this search
        #[arg(short = 'f', long)]
        fallback: Option<String>,
    },

    /// List jurisdictions currently accepting applications
    Jurisdictions {
        /// Number of jurisdictions to list
        #[arg(short = 'n', long, default_value_t = permit_core::config::DEFAULT_ENABLED_PAGE_SIZE)]
        page_size: usize,
    },
}

pub async fn run(base_url: &str, command: Command) -> anyhow::Result<()> {
    let client = PermitApiClient::new(base_url);
    match command {
        Command::Resolve { address, fallback } => {
            resolve::run_resolve(&client, &address, fallback.as_deref()).await
        }
        Command::Jurisdictions { page_size } => {
            jurisdictions::run_jurisdictions(&client, page_size).await
        }
    }
}
