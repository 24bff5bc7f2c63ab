//! Diagram export.
//!
//! The exporter is the shipped rendering collaborator: it owns no
//! application state and is told "draw this set of elements" on every
//! change. The only implementation renders to SVG.

mod svg;

use thiserror::Error;

use flujo_core::identifier::Id;

pub use self::svg::SvgExporter;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge endpoint does not match any drawn node. Unreachable for
    /// catalog scenarios (validated at construction); reported for
    /// hand-built element slices.
    #[error("edge endpoint `{0}` does not match any node in the element set")]
    UnknownNode(Id),

    /// A style color failed to resolve.
    #[error("{0}")]
    Style(String),
}
