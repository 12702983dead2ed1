mod cli;

use anyhow::{Context, Error, Result};
use clap::Parser;
use cli::{command, create_spinner, Cli, Commands};
use envdash::Dashboard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envdash=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.dashboard_config()?;

    let bar = create_spinner("Loading data...".to_string());
    let dashboard = match Dashboard::load(&config).await {
        Ok(dashboard) => {
            bar.finish_and_clear();
            dashboard
        }
        Err(e) => {
            bar.finish_with_message("Error loading data. Please try again later.");
            return Err(e).context("dashboard could not be loaded");
        }
    };

    let report = match &cli.command {
        Commands::Monthly { year } => command::monthly(&dashboard, *year),
        Commands::Yearly {} => command::yearly(&dashboard),
        Commands::Joined { year } => command::joined(&dashboard, *year),
        Commands::Coverage {} => command::coverage(&dashboard),
    };
    println!("{}", report);

    Ok(())
}
