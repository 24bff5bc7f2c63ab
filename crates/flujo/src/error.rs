//! Error types for Flujo operations.
//!
//! This module provides the main error type [`FlujoError`] which wraps the
//! error conditions that can occur while loading configuration or exporting
//! a rendered view. The view controller itself has no failure modes: every
//! valid input combination has a well-defined, always-successful output.

use std::io;

use thiserror::Error;

use flujo_core::scenario::ModelError;

/// The main error type for Flujo operations.
#[derive(Debug, Error)]
pub enum FlujoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for FlujoError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
