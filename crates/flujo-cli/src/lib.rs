//! Flujo CLI library
//!
//! This module contains the core CLI logic for the Flujo scenario viewer:
//! resolve the requested scenario, render its view, print the fenced query
//! block, and write the diagram as SVG.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use flujo::{FlujoError, ViewerBuilder};

/// Run the Flujo CLI application
///
/// Renders the requested scenario: the fenced query block goes to stdout
/// and the diagram SVG to the output file (unless `--query-only`). An
/// unknown scenario name never reaches this function; clap rejects it
/// while parsing [`Args`].
///
/// # Errors
///
/// Returns `FlujoError` for:
/// - Configuration loading errors
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), FlujoError> {
    let key = args.scenario;

    info!(
        scenario = key.name(),
        label = key.label(),
        output_path = args.output;
        "Processing scenario"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Render the scenario view
    let builder = ViewerBuilder::new(app_config);
    let view = builder.view(key);
    let output = view.render();

    // The query display: the raw text wrapped as a fenced ```sql block
    println!("{}", output.query_text());

    if !args.query_only {
        let svg = builder.render_svg(&output)?;
        fs::write(&args.output, svg)?;
        info!(output_file = args.output; "SVG exported successfully");
    }

    Ok(())
}
