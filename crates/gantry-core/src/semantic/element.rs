//! Diagram element types for the semantic model.

use std::fmt;

use crate::{color::Color, identifier::NodeId};

/// A diagram node: one labeled shape representing a system component.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    label: String,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The display text for this node. May contain line breaks.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Attributes applied to the edges created by one connect call.
///
/// # Examples
///
/// ```
/// use gantry_core::{color::Color, semantic::Link};
///
/// let plain = Link::new();
/// assert!(plain.label().is_none());
///
/// let https = Link::labeled("HTTPS");
/// assert_eq!(https.label(), Some("HTTPS"));
///
/// let orchestrate = Link::labeled("Orchestrate").with_color(Color::new("blue").unwrap());
/// assert!(orchestrate.color().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Link {
    label: Option<String>,
    color: Option<Color>,
}

impl Link {
    /// An unlabeled connection drawn in the default color.
    pub fn new() -> Self {
        Self::default()
    }

    /// A labeled connection drawn in the default color.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            color: None,
        }
    }

    /// Sets the display color for the connection.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The connection label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The connection color, if any.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

/// A directed edge between two declared nodes.
///
/// Edges are a multiset: repeated (source, target) pairs are kept, each with
/// its own attributes. The arrowhead is drawn at the target.
#[derive(Debug, Clone)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    label: Option<String>,
    color: Option<Color>,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, link: &Link) -> Self {
        Self {
            source,
            target,
            label: link.label().map(str::to_string),
            color: link.color().cloned(),
        }
    }

    /// Get the source node of this edge.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Get the target node of this edge.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The edge color, if any.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}
