//! Error adapter for converting GantryError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Gantry errors
//! carry no source spans (there is no input text to point into), so the
//! adapter contributes a stable error code and, where it helps, a hint.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use gantry::{GantryError, ModelError};

/// Adapter wrapping a [`GantryError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a GantryError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GantryError::Io(_) => "gantry::io",
            GantryError::Model(ModelError::DuplicateNode { .. }) => "gantry::duplicate_node",
            GantryError::Model(ModelError::UnknownNode { .. }) => "gantry::unknown_node",
            GantryError::Config(_) => "gantry::config",
            GantryError::Render { .. } => "gantry::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            GantryError::Render { .. } => Some(Box::new(
                "install Graphviz so the `dot` executable is on PATH",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
