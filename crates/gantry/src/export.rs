//! Export functionality for Gantry diagrams.
//!
//! This module converts a frozen semantic diagram into the DOT graph
//! description consumed by the external layout engine. It is the stage
//! between model construction and engine execution:
//!
//! ```text
//! DiagramBuilder declarations
//!     ↓ finish
//! Semantic Model (Diagram)
//!     ↓ export (this module)
//! DOT source
//!     ↓ render
//! Output File
//! ```
//!
//! Layout and image encoding are deliberately absent: node placement, edge
//! routing, and pixel output all belong to Graphviz.

pub mod dot;
