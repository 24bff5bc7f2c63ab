//! Diagram element types.
//!
//! A scenario's diagram is an ordered sequence of [`DiagramElement`]s: nodes
//! with fixed positions and directed edges between node ids. Element order is
//! render order; it may matter visually (layering) but carries no
//! computational meaning.

use crate::{geometry::Point, identifier::Id};

/// Visual style class for a node, mirroring the stylesheet's selector
/// taxonomy: every node gets the default style unless it is the title
/// pseudo-node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleClass {
    /// Regular flow node
    #[default]
    Default,
    /// Title pseudo-node drawn in the heading style
    Title,
}

/// A diagram node with a fixed position, display label, and tooltip text.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    label: String,
    tooltip: String,
    position: Point,
    style_class: StyleClass,
}

impl Node {
    /// Create a new node with the default style class.
    ///
    /// The tooltip may be empty; a node without descriptive text simply
    /// shows an empty tooltip when hovered.
    pub fn new(
        id: impl Into<Id>,
        label: impl Into<String>,
        tooltip: impl Into<String>,
        position: Point,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tooltip: tooltip.into(),
            position,
            style_class: StyleClass::default(),
        }
    }

    /// Set the style class for this node (builder style).
    pub fn with_style_class(mut self, style_class: StyleClass) -> Self {
        self.style_class = style_class;
        self
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the tooltip text (may be empty).
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Get the fixed diagram position of this node.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Get the style class of this node.
    pub fn style_class(&self) -> StyleClass {
        self.style_class
    }
}

/// A directed edge between two nodes, drawn with an arrowhead at the target.
///
/// Source and target must name node ids declared in the same scenario;
/// [`crate::scenario::Scenario::validate`] enforces this at catalog
/// construction time. Self-loops are not forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
}

impl Edge {
    /// Create a new directed edge from `source` to `target`.
    pub fn new(source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }
}

/// A single element of a scenario's diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramElement {
    Node(Node),
    Edge(Edge),
}

impl DiagramElement {
    /// Returns the contained node, if this element is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            DiagramElement::Node(node) => Some(node),
            DiagramElement::Edge(_) => None,
        }
    }

    /// Returns the contained edge, if this element is one.
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            DiagramElement::Edge(edge) => Some(edge),
            DiagramElement::Node(_) => None,
        }
    }
}

impl From<Node> for DiagramElement {
    fn from(node: Node) -> Self {
        DiagramElement::Node(node)
    }
}

impl From<Edge> for DiagramElement {
    fn from(edge: Edge) -> Self {
        DiagramElement::Edge(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder_defaults() {
        let node = Node::new("etl", "SierraCol (DB - SQL)", "", Point::new(50.0, 150.0));

        assert_eq!(node.id(), "etl");
        assert_eq!(node.label(), "SierraCol (DB - SQL)");
        assert!(node.tooltip().is_empty());
        assert_eq!(node.style_class(), StyleClass::Default);
    }

    #[test]
    fn test_node_title_style() {
        let node = Node::new("title", "🔷 Flujo ETL - SQL", "", Point::new(475.0, 50.0))
            .with_style_class(StyleClass::Title);

        assert_eq!(node.style_class(), StyleClass::Title);
    }

    #[test]
    fn test_element_accessors() {
        let node: DiagramElement = Node::new("a", "A", "", Point::default()).into();
        let edge: DiagramElement = Edge::new("a", "b").into();

        assert!(node.as_node().is_some());
        assert!(node.as_edge().is_none());
        assert_eq!(edge.as_edge().map(|e| e.target()), Some(Id::new("b")));
    }
}
