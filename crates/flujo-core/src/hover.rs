//! Pointer hover state for diagram nodes.
//!
//! The renderer reports discrete enter/leave events as the pointer moves
//! over nodes. Rather than carrying two optional "entered"/"left" callback
//! slots, hover is modeled as a single ordered stream of [`HoverEvent`]s
//! folded into a [`HoverState`] where the latest event always wins. There is
//! no debouncing and no hover-intent delay.

use crate::identifier::Id;

/// The data a hover event carries about its node: enough to identify it and
/// to populate the tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    id: Id,
    tooltip: String,
}

impl NodeInfo {
    /// Create hover info for a node. The tooltip may be empty.
    pub fn new(id: impl Into<Id>, tooltip: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tooltip: tooltip.into(),
        }
    }

    /// Get the hovered node's identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the hovered node's tooltip text.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// A discrete hover event reported by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer entered a node.
    Entered(NodeInfo),
    /// The pointer left the named node.
    Left(Id),
}

impl HoverEvent {
    /// Bridge from a callback interface that reports enter and leave as two
    /// optional slots in one update cycle.
    ///
    /// When both slots are populated the enter takes precedence, preserving
    /// the observable behavior of hosts that check the enter slot first and
    /// ignore the leave. Returns `None` when neither slot is populated (the
    /// update was not hover-related).
    pub fn from_callbacks(entered: Option<NodeInfo>, left: Option<Id>) -> Option<Self> {
        match (entered, left) {
            (Some(info), _) => Some(HoverEvent::Entered(info)),
            (None, Some(id)) => Some(HoverEvent::Left(id)),
            (None, None) => None,
        }
    }
}

/// Transient record of which node (if any) is currently under the pointer.
///
/// Never persisted; owned by the view state and replaced wholesale on each
/// event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HoverState {
    /// No node is hovered.
    #[default]
    Idle,
    /// The pointer is over a node.
    Hovering(NodeInfo),
}

impl HoverState {
    /// Fold one event into the state. Last event wins: an enter replaces any
    /// current hover, a leave clears the state regardless of which node it
    /// names (the renderer only reports a leave for the node it last
    /// entered).
    pub fn apply(self, event: HoverEvent) -> Self {
        match event {
            HoverEvent::Entered(info) => HoverState::Hovering(info),
            HoverEvent::Left(_) => HoverState::Idle,
        }
    }

    /// The hovered node's info, if any.
    pub fn hovering(&self) -> Option<&NodeInfo> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(info) => Some(info),
        }
    }
}
