//! The frozen diagram container and its presentation vocabulary.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    identifier::NodeId,
    semantic::element::{Edge, Node},
};

/// Drawing direction handed to the layout engine (Graphviz `rankdir`).
///
/// The names match external configuration strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Direction {
    /// Top to bottom (default)
    #[default]
    TB,
    /// Bottom to top
    BT,
    /// Left to right
    LR,
    /// Right to left
    RL,
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TB" => Ok(Self::TB),
            "BT" => Ok(Self::BT),
            "LR" => Ok(Self::LR),
            "RL" => Ok(Self::RL),
            _ => Err("Unsupported drawing direction"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::TB => "TB",
            Direction::BT => "BT",
            Direction::LR => "LR",
            Direction::RL => "RL",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Edge routing style handed to the layout engine (Graphviz `splines`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRouting {
    /// Orthogonal segments (default)
    #[default]
    Ortho,
    /// Curved splines
    Spline,
    /// Straight lines
    Line,
    /// Piecewise-straight polylines
    Polyline,
    /// Curved arcs
    Curved,
}

impl FromStr for EdgeRouting {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ortho" => Ok(Self::Ortho),
            "spline" => Ok(Self::Spline),
            "line" => Ok(Self::Line),
            "polyline" => Ok(Self::Polyline),
            "curved" => Ok(Self::Curved),
            _ => Err("Unsupported edge routing style"),
        }
    }
}

impl From<EdgeRouting> for &'static str {
    fn from(val: EdgeRouting) -> Self {
        match val {
            EdgeRouting::Ortho => "ortho",
            EdgeRouting::Spline => "spline",
            EdgeRouting::Line => "line",
            EdgeRouting::Polyline => "polyline",
            EdgeRouting::Curved => "curved",
        }
    }
}

impl Display for EdgeRouting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A named visual grouping of nodes and/or nested clusters.
///
/// Clusters are purely presentational. They are created implicitly the first
/// time a cluster path mentions them, and each cluster lives under exactly one
/// parent (or at the diagram root), so the nesting relation is always a
/// forest.
#[derive(Debug, Clone)]
pub struct Cluster {
    name: String,
    nodes: Vec<NodeId>,
    children: IndexMap<String, Cluster>,
}

impl Cluster {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: Vec::new(),
            children: IndexMap::new(),
        }
    }

    pub(crate) fn child_entry(&mut self, name: &str) -> &mut Cluster {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Cluster::new(name))
    }

    pub(crate) fn push_node(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    /// The cluster's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nodes grouped directly under this cluster, in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Child clusters in creation order.
    pub fn children(&self) -> impl Iterator<Item = &Cluster> {
        self.children.values()
    }

    /// Looks up a direct child cluster by name.
    pub fn child(&self, name: &str) -> Option<&Cluster> {
        self.children.get(name)
    }

    /// Total number of clusters rooted here, including this one.
    pub(crate) fn subtree_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(Cluster::subtree_count)
            .sum::<usize>()
    }
}

/// A frozen diagram: the root container owning the node set, the cluster
/// forest, and the edge list.
///
/// Produced by [`DiagramBuilder::finish`](crate::semantic::DiagramBuilder::finish)
/// and immutable afterwards. Iteration order everywhere is declaration order,
/// so repeated exports of the same diagram are deterministic.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    nodes: IndexMap<NodeId, Node>,
    clusters: IndexMap<String, Cluster>,
    ungrouped: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl Diagram {
    pub(crate) fn new(
        title: String,
        nodes: IndexMap<NodeId, Node>,
        clusters: IndexMap<String, Cluster>,
        ungrouped: Vec<NodeId>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            title,
            nodes,
            clusters,
            ungrouped,
            edges,
        }
    }

    /// The diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Looks up a declared node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All declared nodes, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Nodes that belong to no cluster, in declaration order.
    pub fn ungrouped(&self) -> &[NodeId] {
        &self.ungrouped
    }

    /// Top-level clusters, in creation order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.values()
    }

    /// Resolves a cluster by its full path from the root.
    ///
    /// Returns `None` for the empty path or when any segment is missing.
    pub fn cluster(&self, path: &[&str]) -> Option<&Cluster> {
        let (first, rest) = path.split_first()?;
        let mut cluster = self.clusters.get(*first)?;
        for name in rest {
            cluster = cluster.child(name)?;
        }
        Some(cluster)
    }

    /// All edges, in connection order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of declared components.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of connections.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of clusters across the whole forest.
    pub fn cluster_count(&self) -> usize {
        self.clusters
            .values()
            .map(Cluster::subtree_count)
            .sum::<usize>()
    }
}
