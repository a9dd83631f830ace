//! The semantic diagram model.
//!
//! This module contains the building blocks of the diagram model and the API
//! for populating it:
//! - [`Diagram`] - the frozen root container (nodes, cluster forest, edges)
//! - [`Node`], [`Cluster`], [`Edge`] - the model elements
//! - [`DiagramBuilder`] - the population API (`declare_node`, `connect`)
//! - [`Link`] - label/color attributes applied to connections
//!
//! A diagram moves through three stages: empty, populated (repeated
//! declarations on the builder), and frozen ([`DiagramBuilder::finish`]).
//! Frozen diagrams are immutable; rendering the same frozen model repeatedly
//! always sees identical structure.

mod builder;
mod diagram;
mod element;

pub use builder::{DiagramBuilder, Endpoints};
pub use diagram::{Cluster, Diagram, Direction, EdgeRouting};
pub use element::{Edge, Link, Node};

use thiserror::Error;

/// Errors raised while populating a diagram.
///
/// Both variants are fatal for the run: a model that failed to build is never
/// handed to the rendering backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The same node key was declared twice on one diagram.
    #[error("duplicate node key `{key}`")]
    DuplicateNode { key: String },

    /// A connection referenced a node that was never declared on this diagram.
    #[error("unknown node `{key}` used as an edge endpoint")]
    UnknownNode { key: String },
}
