//! Bookdesk CLI - browse and filter bookings from the terminal
//!
//! Fetches the booking list once per invocation and filters it locally,
//! the same way the desktop dashboard does.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::build_client;
use crate::commands::completions::run_completions;
use crate::commands::list::run_list;
use crate::commands::show::run_show;
use crate::commands::statuses::run_statuses;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` plus info-level output from the CLI and the core client.
fn log_filter() -> EnvFilter {
    EnvFilter::from_default_env()
        .add_directive("bookdesk_cli=info".parse().unwrap())
        .add_directive("bookdesk_core=info".parse().unwrap())
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            search,
            status,
            json,
        } => {
            let client = build_client(cli.base_url, cli.timeout_secs)?;
            run_list(&client, search.as_deref(), &status, json).await?;
        }
        Commands::Show { id, json } => {
            let client = build_client(cli.base_url, cli.timeout_secs)?;
            run_show(&client, &id, json).await?;
        }
        Commands::Statuses { json } => {
            let client = build_client(cli.base_url, cli.timeout_secs)?;
            run_statuses(&client, json).await?;
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
