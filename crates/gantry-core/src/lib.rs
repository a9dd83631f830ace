//! Core types for Gantry architecture diagrams.
//!
//! This crate holds the in-memory graph model: interned node identifiers,
//! validated colors, and the semantic model (nodes, clusters, edges) together
//! with the [`semantic::DiagramBuilder`] population API. Layout and image
//! encoding are not handled here; a frozen [`semantic::Diagram`] is handed to
//! a rendering backend.

pub mod color;
pub mod identifier;
pub mod semantic;
