//! Flujo - an interactive data-flow scenario diagram viewer
//!
//! This library provides the two predefined data-flow scenarios ("ETL" and
//! "ELT"), the view controller that derives what to show from the selected
//! scenario and the current hover, and an SVG renderer for the diagram.

pub mod catalog;
pub mod config;
pub mod export;
pub mod view;

mod error;

pub use flujo_core::{color, element, geometry, hover, identifier, scenario};

pub use error::FlujoError;
pub use export::SvgExporter;

use log::{debug, info};

use config::AppConfig;
use scenario::ScenarioKey;
use view::{ViewOutput, ViewState};

/// Builder for viewing and rendering Flujo scenarios.
///
/// Holds the application configuration and hands out view states and
/// rendered SVG. Reusable across renders.
///
/// # Examples
///
/// ```
/// use flujo::{ViewerBuilder, config::AppConfig, scenario::ScenarioKey};
///
/// let builder = ViewerBuilder::new(AppConfig::default());
///
/// let view = builder.view(ScenarioKey::EtlSql);
/// let output = view.render();
/// assert!(output.query_text().starts_with("```sql"));
///
/// let svg = builder.render_svg(&output).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct ViewerBuilder {
    config: AppConfig,
}

impl ViewerBuilder {
    /// Create a new viewer builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Create a view state with the given scenario selected and no hover.
    pub fn view(&self, key: ScenarioKey) -> ViewState {
        info!(scenario = key.name(); "Opening view");
        ViewState::new(key)
    }

    /// Render a view output's diagram (and tooltip, when visible) to an SVG
    /// string.
    ///
    /// # Errors
    ///
    /// Returns `FlujoError` when a configured style color is invalid or the
    /// element set references an unknown node id (unreachable for catalog
    /// scenarios).
    pub fn render_svg(&self, output: &ViewOutput) -> Result<String, FlujoError> {
        let exporter = SvgExporter::new(&self.config.style)?;
        let svg = exporter.render(output.elements(), output.tooltip())?;
        debug!(bytes = svg.len(); "Rendered SVG");
        Ok(svg)
    }
}
