//! The view controller: selection and render contract.
//!
//! [`ViewState`] holds the two pieces of mutable UI state (the selected
//! scenario key and the current hover) and derives everything shown on
//! screen through the pure [`ViewState::render`] function. The hosting UI
//! re-invokes `render` after every input event; nothing here blocks, fails,
//! or touches the catalog mutably.

use flujo_core::{
    element::DiagramElement,
    geometry::Point,
    hover::{HoverEvent, HoverState},
    scenario::ScenarioKey,
};
use log::debug;

use crate::catalog;

/// Screen offset where the tooltip is anchored while a node is hovered.
///
/// A constant placement (`left: 50px, top: 100px`): the tooltip does not
/// follow the hovered node's diagram coordinates.
pub const TOOLTIP_ANCHOR: Point = Point::new(50.0, 100.0);

/// Derived tooltip presentation: visibility, text, and screen anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    visible: bool,
    text: String,
    anchor: Point,
}

impl Tooltip {
    fn hidden() -> Self {
        Self {
            visible: false,
            text: String::new(),
            anchor: TOOLTIP_ANCHOR,
        }
    }

    fn showing(text: impl Into<String>) -> Self {
        Self {
            visible: true,
            text: text.into(),
            anchor: TOOLTIP_ANCHOR,
        }
    }

    /// Whether the tooltip should be shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The tooltip text (empty when hidden or when the hovered node has no
    /// descriptive text).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The fixed screen anchor for the tooltip.
    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

/// Everything the page shell needs to redraw: the fenced query text, the
/// diagram elements in render order, and the tooltip presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOutput {
    query_text: String,
    elements: Vec<DiagramElement>,
    tooltip: Tooltip,
}

impl ViewOutput {
    /// The scenario's query text wrapped as a fenced `sql` code block.
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// The diagram elements to draw, in catalog order.
    pub fn elements(&self) -> &[DiagramElement] {
        &self.elements
    }

    /// The derived tooltip state.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }
}

/// Wrap raw query text as a markdown-style fenced code block tagged `sql`.
///
/// The wrapping is byte-exact: a ```` ```sql ```` line, the text verbatim
/// with all internal newlines and indentation preserved, and a closing
/// ```` ``` ```` line.
pub fn fenced_sql(query_text: &str) -> String {
    format!("```sql\n{query_text}\n```")
}

/// The single per-session view state.
///
/// Created at startup with the first scenario key selected and no hover;
/// mutated only by [`select`](Self::select) and [`hover`](Self::hover).
/// Never shared across sessions or threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    selected: ScenarioKey,
    hover: HoverState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ScenarioKey::ALL[0])
    }
}

impl ViewState {
    /// Create a view state with the given scenario selected and no hover.
    pub fn new(selected: ScenarioKey) -> Self {
        Self {
            selected,
            hover: HoverState::Idle,
        }
    }

    /// The currently selected scenario key.
    pub fn selected(&self) -> ScenarioKey {
        self.selected
    }

    /// Handle a selector change: switch to the newly selected scenario.
    pub fn select(&mut self, key: ScenarioKey) {
        debug!(scenario = key.name(); "Scenario selected");
        self.selected = key;
    }

    /// Handle one hover event from the renderer. Last event wins; there is
    /// no debouncing and no hover-intent delay.
    pub fn hover(&mut self, event: HoverEvent) {
        self.hover = self.hover.clone().apply(event);
    }

    /// Recompute the three derived outputs from the current inputs.
    ///
    /// Pure and total: the same state always yields the same output, and
    /// every valid state has one. The catalog is read, never mutated, and
    /// the elements are handed out as a fresh copy each time since the
    /// catalog data is logically immutable.
    pub fn render(&self) -> ViewOutput {
        let scenario = catalog::scenario(self.selected);

        let tooltip = match self.hover.hovering() {
            Some(info) => Tooltip::showing(info.tooltip()),
            None => Tooltip::hidden(),
        };

        ViewOutput {
            query_text: fenced_sql(scenario.query_text()),
            elements: scenario.elements().to_vec(),
            tooltip,
        }
    }
}

#[cfg(test)]
mod tests {
    use flujo_core::hover::NodeInfo;
    use flujo_core::identifier::Id;

    use super::*;

    #[test]
    fn test_default_selects_first_scenario() {
        let state = ViewState::default();
        assert_eq!(state.selected(), ScenarioKey::EtlSql);
        assert!(!state.render().tooltip().visible());
    }

    #[test]
    fn test_fenced_sql_shape() {
        let fenced = fenced_sql("\nSELECT 1;\n");
        assert_eq!(fenced, "```sql\n\nSELECT 1;\n\n```");
    }

    #[test]
    fn test_select_switches_query_and_elements() {
        let mut state = ViewState::default();
        state.select(ScenarioKey::EltCdf);

        let output = state.render();
        assert!(output.query_text().contains("timeseries"));
        assert_eq!(
            output.elements(),
            catalog::scenario(ScenarioKey::EltCdf).elements()
        );
    }

    #[test]
    fn test_hover_populates_tooltip_at_fixed_anchor() {
        let mut state = ViewState::default();
        state.hover(HoverEvent::Entered(NodeInfo::new("etl", "some text")));

        let tooltip = state.render().tooltip().clone();
        assert!(tooltip.visible());
        assert_eq!(tooltip.text(), "some text");
        assert_eq!(tooltip.anchor(), TOOLTIP_ANCHOR);
    }

    #[test]
    fn test_hover_leave_hides_tooltip() {
        let mut state = ViewState::default();
        state.hover(HoverEvent::Entered(NodeInfo::new("etl", "some text")));
        state.hover(HoverEvent::Left(Id::new("etl")));

        let tooltip = state.render().tooltip().clone();
        assert!(!tooltip.visible());
        assert!(tooltip.text().is_empty());
    }

    #[test]
    fn test_selection_preserves_hover() {
        // Switching scenarios does not synthesize a leave event; the
        // renderer reports one if the pointer actually left a node.
        let mut state = ViewState::default();
        state.hover(HoverEvent::Entered(NodeInfo::new("etl", "some text")));
        state.select(ScenarioKey::EltCdf);

        assert!(state.render().tooltip().visible());
    }
}
