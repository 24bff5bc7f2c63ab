//! Application configuration.
//!
//! Configuration is deserialized from TOML. Every knob is optional: unset
//! style fields fall back to the built-in stylesheet constants, so an empty
//! (or absent) configuration file reproduces the default look.

use flujo_core::color::Color;
use serde::Deserialize;

/// Built-in stylesheet defaults.
mod defaults {
    pub const NODE_FILL: &str = "#0074D9";
    pub const NODE_TEXT: &str = "white";
    pub const NODE_BORDER: &str = "#333";
    pub const TITLE_FILL: &str = "#f0f0f0";
    pub const TITLE_TEXT: &str = "#2c3e50";
    pub const TITLE_BORDER: &str = "#ccc";
    pub const EDGE_LINE: &str = "#aaa";
    pub const EDGE_ARROW: &str = "#555";
}

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section
    #[serde(default)]
    pub style: StyleConfig,
}

/// Style configuration section
///
/// All fields are CSS color strings; parsing is deferred to the accessors so
/// a bad value is reported with the field's name.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill color for regular flow nodes
    #[serde(default)]
    node_fill: Option<String>,

    /// Label text color for regular flow nodes
    #[serde(default)]
    node_text: Option<String>,

    /// Border color for regular flow nodes
    #[serde(default)]
    node_border: Option<String>,

    /// Fill color for the title pseudo-node
    #[serde(default)]
    title_fill: Option<String>,

    /// Text color for the title pseudo-node
    #[serde(default)]
    title_text: Option<String>,

    /// Border color for the title pseudo-node
    #[serde(default)]
    title_border: Option<String>,

    /// Edge line color
    #[serde(default)]
    edge_line: Option<String>,

    /// Edge arrowhead color
    #[serde(default)]
    edge_arrow: Option<String>,

    /// Background color for the diagram; transparent if unset
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    fn resolve(&self, field: &str, value: &Option<String>, default: &str) -> Result<Color, String> {
        let value = value.as_deref().unwrap_or(default);
        Color::new(value).map_err(|err| format!("invalid `style.{field}` in config: {err}"))
    }

    /// Fill color for regular flow nodes.
    pub fn node_fill(&self) -> Result<Color, String> {
        self.resolve("node_fill", &self.node_fill, defaults::NODE_FILL)
    }

    /// Label text color for regular flow nodes.
    pub fn node_text(&self) -> Result<Color, String> {
        self.resolve("node_text", &self.node_text, defaults::NODE_TEXT)
    }

    /// Border color for regular flow nodes.
    pub fn node_border(&self) -> Result<Color, String> {
        self.resolve("node_border", &self.node_border, defaults::NODE_BORDER)
    }

    /// Fill color for the title pseudo-node.
    pub fn title_fill(&self) -> Result<Color, String> {
        self.resolve("title_fill", &self.title_fill, defaults::TITLE_FILL)
    }

    /// Text color for the title pseudo-node.
    pub fn title_text(&self) -> Result<Color, String> {
        self.resolve("title_text", &self.title_text, defaults::TITLE_TEXT)
    }

    /// Border color for the title pseudo-node.
    pub fn title_border(&self) -> Result<Color, String> {
        self.resolve("title_border", &self.title_border, defaults::TITLE_BORDER)
    }

    /// Edge line color.
    pub fn edge_line(&self) -> Result<Color, String> {
        self.resolve("edge_line", &self.edge_line, defaults::EDGE_LINE)
    }

    /// Edge arrowhead color.
    pub fn edge_arrow(&self) -> Result<Color, String> {
        self.resolve("edge_arrow", &self.edge_arrow, defaults::EDGE_ARROW)
    }

    /// Get the background color from configuration.
    /// Returns None if no background color is configured.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("invalid `style.background_color` in config: {err}"))
    }
}
