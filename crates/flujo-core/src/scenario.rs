//! Scenario model: named data-flow descriptions.
//!
//! A [`Scenario`] bundles the query text shown below the diagram with the
//! ordered diagram elements drawn above it. Scenarios are keyed by the
//! closed [`ScenarioKey`] enum, so "unknown scenario" is unrepresentable in
//! library code; the only textual entry point is [`ScenarioKey::from_str`]
//! at the CLI boundary.

use std::{collections::HashSet, fmt, str::FromStr};

use thiserror::Error;

use crate::{
    element::{DiagramElement, Edge},
    identifier::Id,
};

/// Data-authoring errors surfaced by [`Scenario::validate`].
///
/// These are never runtime errors: scenario data is static, so a validation
/// failure means the catalog itself is wrong and must fail loudly at
/// construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("edge {from_id} -> {to_id} references undeclared node `{missing}`")]
    DanglingEdge {
        from_id: Id,
        to_id: Id,
        missing: Id,
    },

    #[error("duplicate node id `{0}`")]
    DuplicateNodeId(Id),
}

/// Identifies one of the predefined data-flow scenarios.
///
/// The set is closed: adding or removing a scenario is a compile-time
/// checked change to this enum and every `match` over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKey {
    /// Option 1: group and preprocess in SQL before loading (ETL)
    EtlSql,
    /// Option 2: load raw data first, transform inside CDF (ELT)
    EltCdf,
}

impl ScenarioKey {
    /// All scenario keys, in selector display order. The first entry is the
    /// default selection at startup.
    pub const ALL: [ScenarioKey; 2] = [ScenarioKey::EtlSql, ScenarioKey::EltCdf];

    /// Stable wire name used by the CLI and selector controls.
    pub fn name(self) -> &'static str {
        match self {
            ScenarioKey::EtlSql => "ETL_SQL",
            ScenarioKey::EltCdf => "ELT_CDF",
        }
    }

    /// Human-readable label for the selector control.
    pub fn label(self) -> &'static str {
        match self {
            ScenarioKey::EtlSql => "Opción 1: ETL (Procesar en SQL)",
            ScenarioKey::EltCdf => "Opción 2: ELT (Procesar en CDF)",
        }
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing a scenario key from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scenario `{0}` (expected ETL_SQL or ELT_CDF)")]
pub struct ParseScenarioKeyError(String);

impl FromStr for ScenarioKey {
    type Err = ParseScenarioKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKey::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseScenarioKeyError(s.to_string()))
    }
}

/// An immutable named data-flow description: a diagram plus its query text.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    title: String,
    query_text: String,
    elements: Vec<DiagramElement>,
}

impl Scenario {
    /// Create a new scenario.
    ///
    /// `query_text` is shown verbatim (wrapped in a fenced block by the
    /// view layer); `elements` are drawn in the given order.
    pub fn new(
        title: impl Into<String>,
        query_text: impl Into<String>,
        elements: Vec<DiagramElement>,
    ) -> Self {
        Self {
            title: title.into(),
            query_text: query_text.into(),
            elements,
        }
    }

    /// Get the scenario's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the raw query text (not fenced).
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Borrow the ordered diagram elements.
    pub fn elements(&self) -> &[DiagramElement] {
        &self.elements
    }

    /// Check referential integrity of the element set.
    ///
    /// Every edge endpoint must name a node declared in this scenario, and
    /// node ids must be unique within it. Violations are authoring errors;
    /// the catalog runs this check once at construction.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut node_ids = HashSet::new();
        for node in self.elements.iter().filter_map(DiagramElement::as_node) {
            if !node_ids.insert(node.id()) {
                return Err(ModelError::DuplicateNodeId(node.id()));
            }
        }

        for edge in self.elements.iter().filter_map(DiagramElement::as_edge) {
            for endpoint in [edge.source(), edge.target()] {
                if !node_ids.contains(&endpoint) {
                    return Err(ModelError::DanglingEdge {
                        from_id: edge.source(),
                        to_id: edge.target(),
                        missing: endpoint,
                    });
                }
            }
        }

        Ok(())
    }

    /// Iterate over the edges of this scenario.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.elements.iter().filter_map(DiagramElement::as_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{element::Node, geometry::Point};

    fn node(id: &str) -> DiagramElement {
        Node::new(id, id.to_uppercase(), "", Point::default()).into()
    }

    #[test]
    fn test_key_round_trips_through_name() {
        for key in ScenarioKey::ALL {
            assert_eq!(key.name().parse::<ScenarioKey>(), Ok(key));
        }
    }

    #[test]
    fn test_key_parse_is_case_insensitive() {
        assert_eq!("etl_sql".parse::<ScenarioKey>(), Ok(ScenarioKey::EtlSql));
        assert_eq!("Elt_Cdf".parse::<ScenarioKey>(), Ok(ScenarioKey::EltCdf));
    }

    #[test]
    fn test_key_parse_rejects_unknown() {
        assert!("NOT_A_SCENARIO".parse::<ScenarioKey>().is_err());
    }

    #[test]
    fn test_selector_labels() {
        assert_eq!(
            ScenarioKey::EtlSql.label(),
            "Opción 1: ETL (Procesar en SQL)"
        );
        assert_eq!(
            ScenarioKey::EltCdf.label(),
            "Opción 2: ELT (Procesar en CDF)"
        );
    }

    #[test]
    fn test_validate_accepts_wellformed_elements() {
        let scenario = Scenario::new(
            "demo",
            "SELECT 1;",
            vec![node("a"), node("b"), Edge::new("a", "b").into()],
        );
        assert_eq!(scenario.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_dangling_edge() {
        let scenario = Scenario::new(
            "demo",
            "SELECT 1;",
            vec![node("a"), Edge::new("a", "ghost").into()],
        );
        assert_eq!(
            scenario.validate(),
            Err(ModelError::DanglingEdge {
                from_id: Id::new("a"),
                to_id: Id::new("ghost"),
                missing: Id::new("ghost"),
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_node_id() {
        let scenario = Scenario::new("demo", "SELECT 1;", vec![node("a"), node("a")]);
        assert_eq!(
            scenario.validate(),
            Err(ModelError::DuplicateNodeId(Id::new("a")))
        );
    }

    #[test]
    fn test_validate_allows_self_loop() {
        let scenario = Scenario::new(
            "demo",
            "SELECT 1;",
            vec![node("a"), Edge::new("a", "a").into()],
        );
        assert_eq!(scenario.validate(), Ok(()));
    }
}
