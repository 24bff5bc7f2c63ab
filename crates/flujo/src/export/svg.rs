//! SVG rendering for scenario diagrams.
//!
//! Nodes are rounded rectangles centered on their fixed positions with
//! wrapped, centered label text; edges are straight lines clipped to the
//! rectangle borders with a triangle arrowhead at the target. When the view
//! output carries a visible tooltip, a dark floating label is drawn at its
//! fixed anchor.

use std::collections::HashMap;

use log::debug;
use svg::{
    Document,
    node::element::{Definitions, Group, Marker, Path, Rectangle, TSpan, Text},
};

use flujo_core::{
    color::Color,
    element::{DiagramElement, Node, StyleClass},
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::{config::StyleConfig, export::Error, view::Tooltip};

/// Fixed node box sizes from the stylesheet: regular nodes are 220x80,
/// the title pseudo-node is 240x40.
const NODE_SIZE: Size = Size::new(220.0, 80.0);
const TITLE_SIZE: Size = Size::new(240.0, 40.0);

const NODE_FONT_SIZE: f32 = 14.0;
const TITLE_FONT_SIZE: f32 = 16.0;

/// Character budget per label line, approximating the stylesheet's
/// `text-max-width: 200px` wrap at the node font size.
const NODE_WRAP_CHARS: usize = 26;

const MARGIN: f32 = 50.0;

/// Resolved colors for one style class.
struct ClassStyle {
    fill: Color,
    text: Color,
    border: Color,
    font_size: f32,
    font_weight: &'static str,
    size: Size,
}

/// SVG exporter for diagram element sets.
///
/// Stateless between renders; construction resolves the configured colors
/// once so rendering itself cannot fail on style data.
pub struct SvgExporter {
    node_style: ClassStyle,
    title_style: ClassStyle,
    edge_line: Color,
    edge_arrow: Color,
    background: Option<Color>,
}

impl SvgExporter {
    /// Create an exporter from style configuration.
    pub fn new(style: &StyleConfig) -> Result<Self, Error> {
        Ok(Self {
            node_style: ClassStyle {
                fill: style.node_fill().map_err(Error::Style)?,
                text: style.node_text().map_err(Error::Style)?,
                border: style.node_border().map_err(Error::Style)?,
                font_size: NODE_FONT_SIZE,
                font_weight: "normal",
                size: NODE_SIZE,
            },
            title_style: ClassStyle {
                fill: style.title_fill().map_err(Error::Style)?,
                text: style.title_text().map_err(Error::Style)?,
                border: style.title_border().map_err(Error::Style)?,
                font_size: TITLE_FONT_SIZE,
                font_weight: "bold",
                size: TITLE_SIZE,
            },
            edge_line: style.edge_line().map_err(Error::Style)?,
            edge_arrow: style.edge_arrow().map_err(Error::Style)?,
            background: style.background_color().map_err(Error::Style)?,
        })
    }

    fn class_style(&self, class: StyleClass) -> &ClassStyle {
        match class {
            StyleClass::Default => &self.node_style,
            StyleClass::Title => &self.title_style,
        }
    }

    /// Render an element set (plus an optional tooltip overlay) to an SVG
    /// document string.
    ///
    /// Edges are drawn below nodes, nodes in element order, the tooltip on
    /// top.
    pub fn render(
        &self,
        elements: &[DiagramElement],
        tooltip: &Tooltip,
    ) -> Result<String, Error> {
        let nodes: HashMap<Id, &Node> = elements
            .iter()
            .filter_map(DiagramElement::as_node)
            .map(|node| (node.id(), node))
            .collect();

        let bounds = self.diagram_bounds(elements, tooltip);
        debug!(
            width = bounds.width(),
            height = bounds.height();
            "Calculated SVG dimensions"
        );

        let mut document = Document::new()
            .set(
                "viewBox",
                (
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height(),
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height())
            .add(self.marker_definitions());

        if let Some(background) = self.background {
            document = document.add(
                Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", background.to_string()),
            );
        }

        for edge in elements.iter().filter_map(DiagramElement::as_edge) {
            let source = *nodes
                .get(&edge.source())
                .ok_or(Error::UnknownNode(edge.source()))?;
            let target = *nodes
                .get(&edge.target())
                .ok_or(Error::UnknownNode(edge.target()))?;
            document = document.add(self.render_edge(source, target));
        }

        for node in elements.iter().filter_map(DiagramElement::as_node) {
            document = document.add(self.render_node(node));
        }

        if tooltip.visible() {
            document = document.add(self.render_tooltip(tooltip));
        }

        Ok(document.to_string())
    }

    fn marker_definitions(&self) -> Definitions {
        // One right-pointing triangle marker in the configured arrow color
        let arrow = Marker::new()
            .set("id", format!("arrow-{}", self.edge_arrow.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", self.edge_arrow.to_string()),
            );

        Definitions::new().add(arrow)
    }

    fn render_edge(&self, source: &Node, target: &Node) -> Path {
        let start = boundary_point(
            source.position(),
            self.class_style(source.style_class()).size,
            target.position(),
        );
        let end = boundary_point(
            target.position(),
            self.class_style(target.style_class()).size,
            source.position(),
        );

        Path::new()
            .set(
                "d",
                format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y()),
            )
            .set("stroke", self.edge_line.to_string())
            .set("stroke-width", 2)
            .set("fill", "none")
            .set(
                "marker-end",
                format!("url(#arrow-{})", self.edge_arrow.to_id_safe_string()),
            )
    }

    fn render_node(&self, node: &Node) -> Group {
        let style = self.class_style(node.style_class());
        let bounds = Bounds::new_from_center(node.position(), style.size);

        let rect = Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", 10)
            .set("fill", style.fill.to_string())
            .set("stroke", style.border.to_string())
            .set("stroke-width", 2);

        let lines = wrap_label(node.label(), NODE_WRAP_CHARS);
        let line_height = style.font_size * 1.3;
        let first_y = node.position().y() - line_height * (lines.len() as f32 - 1.0) / 2.0;

        let mut text = Text::new("")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", style.font_size)
            .set("font-weight", style.font_weight)
            .set("fill", style.text.to_string());

        for (i, line) in lines.iter().enumerate() {
            text = text.add(
                TSpan::new(line.as_str())
                    .set("x", node.position().x())
                    .set("y", first_y + line_height * i as f32),
            );
        }

        Group::new().add(rect).add(text)
    }

    fn render_tooltip(&self, tooltip: &Tooltip) -> Group {
        let anchor = tooltip.anchor();
        let padding = 5.0;
        let font_size = 13.0;
        // Approximate text extent; the tooltip is a floating hint, not a
        // laid-out shape
        let width = tooltip.text().chars().count() as f32 * font_size * 0.55 + padding * 2.0;
        let height = font_size + padding * 2.0;

        let background = Rectangle::new()
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("width", width)
            .set("height", height)
            .set("rx", 5)
            .set("fill", "rgba(0, 0, 0, 0.75)");

        let text = Text::new(tooltip.text())
            .set("x", anchor.x() + padding)
            .set("y", anchor.y() + height / 2.0)
            .set("dominant-baseline", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", font_size)
            .set("fill", "white");

        Group::new().add(background).add(text)
    }

    fn diagram_bounds(&self, elements: &[DiagramElement], tooltip: &Tooltip) -> Bounds {
        let mut node_bounds = elements.iter().filter_map(DiagramElement::as_node).map(
            |node| Bounds::new_from_center(node.position(), self.class_style(node.style_class()).size),
        );

        let first = node_bounds
            .next()
            .unwrap_or_else(|| Bounds::new_from_center(Point::default(), NODE_SIZE));
        let mut bounds = node_bounds.fold(first, |acc, b| acc.merge(&b));

        if tooltip.visible() {
            let anchor_box = Bounds::new_from_center(tooltip.anchor(), Size::new(1.0, 1.0));
            bounds = bounds.merge(&anchor_box);
        }

        bounds.add_margin(MARGIN)
    }
}

/// Greedy word wrap by character count. Words longer than the budget get a
/// line of their own.
fn wrap_label(label: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in label.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Find the point where the segment from `center` toward `toward` crosses
/// the border of the axis-aligned rectangle of `size` centered on `center`.
fn boundary_point(center: Point, size: Size, toward: Point) -> Point {
    let delta = toward.sub_point(center);
    let scale = (delta.x().abs() / (size.width() / 2.0))
        .max(delta.y().abs() / (size.height() / 2.0));

    if scale <= f32::EPSILON {
        // Degenerate case: coincident centers (a self-loop); draw from the
        // center itself
        return center;
    }

    center.add_point(Point::new(delta.x() / scale, delta.y() / scale))
}
