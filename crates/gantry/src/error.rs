//! Error types for Gantry operations.
//!
//! This module provides the main error type [`GantryError`] which wraps the
//! error conditions that can occur while building and rendering a diagram.

use std::io;

use thiserror::Error;

use gantry_core::semantic::ModelError;

/// The main error type for Gantry operations.
///
/// Model-construction failures ([`ModelError`]) pass through transparently so
/// callers can match on the concrete construction problem; render failures
/// carry the underlying cause from the external layout engine.
#[derive(Debug, Error)]
pub enum GantryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: io::Error,
    },
}

impl GantryError {
    /// Create a new `Render` error with the failing engine invocation's cause.
    pub fn new_render_error(message: impl Into<String>, source: io::Error) -> Self {
        Self::Render {
            message: message.into(),
            source,
        }
    }
}
