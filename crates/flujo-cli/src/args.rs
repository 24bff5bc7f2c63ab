//! Command-line argument definitions for the Flujo CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the scenario to render and control the
//! output path, configuration file, and logging verbosity.

use clap::Parser;

use flujo::scenario::ScenarioKey;

/// Long help for the scenario argument, listing every selectable key with
/// its selector label.
fn scenario_long_help() -> String {
    let mut help = String::from("Scenario to display (case-insensitive). Options:");
    for key in ScenarioKey::ALL {
        help.push_str(&format!("\n  {:8} {}", key.name(), key.label()));
    }
    help
}

/// Command-line arguments for the Flujo scenario viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scenario to display (ETL_SQL or ELT_CDF, case-insensitive)
    #[arg(
        help = "Scenario to display (ETL_SQL or ELT_CDF)",
        long_help = scenario_long_help()
    )]
    pub scenario: ScenarioKey,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the fenced query block only, skipping the SVG
    #[arg(long)]
    pub query_only: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
