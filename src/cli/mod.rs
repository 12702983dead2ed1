//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};
use envdash::DashboardConfig;
use indicatif::ProgressBar;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    /// Configuration file
    #[arg(long, default_value = "envdash.toml")]
    pub config: PathBuf,

    /// Weather source (path or URL), overrides the config file
    #[arg(long)]
    pub weather: Option<String>,

    /// Water quality source (path or URL), overrides the config file
    #[arg(long)]
    pub water_quality: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Monthly average temperatures for one year
    Monthly {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Yearly average temperatures and the first warm year
    Yearly {},
    /// Monthly temperature and turbidity for a covered year
    Joined {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Years with joint coverage
    Coverage {},
}

impl Cli {
    /// Loads the config file, then applies source overrides.
    pub fn dashboard_config(&self) -> Result<DashboardConfig> {
        let mut config = DashboardConfig::load_or_default(&self.config)?;

        if let Some(weather) = &self.weather {
            config.sources.weather.clone_from(weather);
        }
        if let Some(water_quality) = &self.water_quality {
            config.sources.water_quality.clone_from(water_quality);
        }

        Ok(config)
    }
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

// -- Tests -------------------------------------------------------------------
