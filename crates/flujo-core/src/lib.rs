//! Flujo Core Types and Definitions
//!
//! This crate provides the foundational types for the Flujo data-flow
//! diagram viewer. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Elements**: Diagram nodes and edges ([`element`] module)
//! - **Scenarios**: Named data-flow descriptions ([`scenario`] module)
//! - **Hover**: Pointer hover state and events ([`hover`] module)

pub mod color;
pub mod element;
pub mod geometry;
pub mod hover;
pub mod identifier;
pub mod scenario;
