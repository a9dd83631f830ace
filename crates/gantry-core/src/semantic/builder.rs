//! Population API for the diagram model.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    identifier::NodeId,
    semantic::{
        ModelError,
        diagram::{Cluster, Diagram},
        element::{Edge, Link, Node},
    },
};

/// One or more edge endpoints.
///
/// Both sides of [`DiagramBuilder::connect`] accept anything convertible into
/// `Endpoints`: a single [`NodeId`], an array, a slice, or a `Vec`. Order is
/// preserved; the connect call expands the cross product of the two sides.
#[derive(Debug, Clone)]
pub struct Endpoints(Vec<NodeId>);

impl Endpoints {
    fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

impl From<NodeId> for Endpoints {
    fn from(id: NodeId) -> Self {
        Self(vec![id])
    }
}

impl<const N: usize> From<[NodeId; N]> for Endpoints {
    fn from(ids: [NodeId; N]) -> Self {
        Self(ids.to_vec())
    }
}

impl From<&[NodeId]> for Endpoints {
    fn from(ids: &[NodeId]) -> Self {
        Self(ids.to_vec())
    }
}

impl From<Vec<NodeId>> for Endpoints {
    fn from(ids: Vec<NodeId>) -> Self {
        Self(ids)
    }
}

/// Builder for populating a diagram model.
///
/// The builder is the only way to construct a [`Diagram`]: nodes are declared
/// with their display text and an optional cluster path, connections are
/// added between declared nodes, and [`finish`](DiagramBuilder::finish)
/// freezes the result.
///
/// # Examples
///
/// ```
/// use gantry_core::semantic::{DiagramBuilder, Link};
///
/// let mut builder = DiagramBuilder::new("Edge Service");
/// let users = builder.declare_node("doc_users", "Users", &[]).unwrap();
/// let waf = builder
///     .declare_node("doc_waf", "AWS WAF", &["Security Layer"])
///     .unwrap();
///
/// builder.connect(users, waf, Link::labeled("HTTPS")).unwrap();
///
/// let diagram = builder.finish();
/// assert_eq!(diagram.node_count(), 2);
/// assert_eq!(diagram.edge_count(), 1);
/// ```
#[derive(Debug)]
pub struct DiagramBuilder {
    title: String,
    nodes: IndexMap<NodeId, Node>,
    clusters: IndexMap<String, Cluster>,
    ungrouped: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl DiagramBuilder {
    /// Create an empty builder for a diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: IndexMap::new(),
            clusters: IndexMap::new(),
            ungrouped: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Registers a node with display text, optionally nested under a sequence
    /// of cluster names.
    ///
    /// Clusters named by `cluster_path` are created on first reference; an
    /// empty path places the node at the diagram root. The returned [`NodeId`]
    /// is the stable reference used as an edge endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateNode`] if `key` was already declared on
    /// this diagram.
    pub fn declare_node(
        &mut self,
        key: &str,
        label: &str,
        cluster_path: &[&str],
    ) -> Result<NodeId, ModelError> {
        let id = NodeId::new(key);
        if self.nodes.contains_key(&id) {
            return Err(ModelError::DuplicateNode {
                key: key.to_string(),
            });
        }
        self.nodes.insert(id, Node::new(id, label));

        match cluster_path.split_first() {
            None => self.ungrouped.push(id),
            Some((first, rest)) => {
                let mut cluster = self
                    .clusters
                    .entry((*first).to_string())
                    .or_insert_with(|| Cluster::new(first));
                for name in rest {
                    cluster = cluster.child_entry(name);
                }
                cluster.push_node(id);
            }
        }

        trace!(key, cluster_depth = cluster_path.len(); "Declared node");
        Ok(id)
    }

    /// Adds one edge per (source, destination) pair in the cross product of
    /// the two endpoint sets.
    ///
    /// When either side holds several node references, the connection fans
    /// out to every member: `connect([a, b], [x, y], …)` appends the four
    /// edges (a,x), (a,y), (b,x), (b,y), in that order. Every edge carries a
    /// copy of `link`'s label and color.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownNode`] if any endpoint was never declared
    /// on this diagram; no edges are appended in that case.
    pub fn connect(
        &mut self,
        sources: impl Into<Endpoints>,
        destinations: impl Into<Endpoints>,
        link: Link,
    ) -> Result<(), ModelError> {
        let sources = sources.into();
        let destinations = destinations.into();

        for id in sources.iter().chain(destinations.iter()) {
            if !self.nodes.contains_key(&id) {
                return Err(ModelError::UnknownNode {
                    key: id.to_string(),
                });
            }
        }

        for source in sources.iter() {
            for destination in destinations.iter() {
                self.edges.push(Edge::new(source, destination, &link));
            }
        }
        Ok(())
    }

    /// Consumes the builder and freezes the populated model.
    pub fn finish(self) -> Diagram {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            clusters = self.clusters.len();
            "Diagram frozen"
        );
        Diagram::new(
            self.title,
            self.nodes,
            self.clusters,
            self.ungrouped,
            self.edges,
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_declare_duplicate_key_is_rejected() {
        let mut builder = DiagramBuilder::new("test");
        builder.declare_node("builder_dup", "First", &[]).unwrap();

        let err = builder
            .declare_node("builder_dup", "Second", &["Somewhere"])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateNode {
                key: "builder_dup".to_string()
            }
        );

        // The first declaration is untouched.
        let diagram = builder.finish();
        assert_eq!(diagram.node_count(), 1);
        assert_eq!(
            diagram.node(NodeId::new("builder_dup")).unwrap().label(),
            "First"
        );
    }

    #[test]
    fn test_same_key_on_two_diagrams_is_fine() {
        let mut first = DiagramBuilder::new("first");
        let mut second = DiagramBuilder::new("second");

        first.declare_node("builder_shared", "A", &[]).unwrap();
        second.declare_node("builder_shared", "B", &[]).unwrap();
    }

    #[test]
    fn test_connect_unknown_endpoint_is_rejected() {
        let mut builder = DiagramBuilder::new("test");
        let known = builder.declare_node("builder_known", "Known", &[]).unwrap();
        let foreign = NodeId::new("builder_foreign");

        let err = builder.connect(known, foreign, Link::new()).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownNode {
                key: "builder_foreign".to_string()
            }
        );

        // Validation happens before any edge is appended.
        let err = builder
            .connect([known, foreign], known, Link::new())
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownNode { .. }));
        assert_eq!(builder.finish().edge_count(), 0);
    }

    #[test]
    fn test_fan_out_cross_product_order() {
        let mut builder = DiagramBuilder::new("test");
        let a = builder.declare_node("builder_fan_a", "a", &[]).unwrap();
        let b = builder.declare_node("builder_fan_b", "b", &[]).unwrap();
        let x = builder.declare_node("builder_fan_x", "x", &[]).unwrap();
        let y = builder.declare_node("builder_fan_y", "y", &[]).unwrap();

        builder.connect([a, b], [x, y], Link::new()).unwrap();

        let diagram = builder.finish();
        let pairs: Vec<(NodeId, NodeId)> = diagram
            .edges()
            .iter()
            .map(|edge| (edge.source(), edge.target()))
            .collect();
        assert_eq!(pairs, vec![(a, x), (a, y), (b, x), (b, y)]);
    }

    #[test]
    fn test_multigraph_keeps_repeated_pairs() {
        let mut builder = DiagramBuilder::new("test");
        let a = builder.declare_node("builder_multi_a", "a", &[]).unwrap();
        let b = builder.declare_node("builder_multi_b", "b", &[]).unwrap();

        builder.connect(a, b, Link::labeled("first")).unwrap();
        builder.connect(a, b, Link::labeled("second")).unwrap();

        let diagram = builder.finish();
        assert_eq!(diagram.edge_count(), 2);
        assert_eq!(diagram.edges()[0].label(), Some("first"));
        assert_eq!(diagram.edges()[1].label(), Some("second"));
    }

    #[test]
    fn test_cluster_path_nesting() {
        let mut builder = DiagramBuilder::new("test");
        let inner = builder
            .declare_node("builder_nested", "Nested", &["L1", "L2"])
            .unwrap();
        builder
            .declare_node("builder_sibling", "Sibling", &["L1"])
            .unwrap();

        let diagram = builder.finish();
        assert_eq!(diagram.cluster_count(), 2);

        let l1 = diagram.cluster(&["L1"]).unwrap();
        assert_eq!(l1.name(), "L1");
        assert_eq!(l1.nodes(), &[NodeId::new("builder_sibling")]);

        let l2 = diagram.cluster(&["L1", "L2"]).unwrap();
        assert_eq!(l2.nodes(), &[inner]);

        // L2 exists only under L1.
        assert!(diagram.cluster(&["L2"]).is_none());
    }

    #[test]
    fn test_cluster_path_reuse_keeps_forest() {
        let mut builder = DiagramBuilder::new("test");
        builder
            .declare_node("builder_forest_a", "a", &["Layer", "Inner"])
            .unwrap();
        builder
            .declare_node("builder_forest_b", "b", &["Layer", "Inner"])
            .unwrap();
        builder
            .declare_node("builder_forest_c", "c", &["Layer"])
            .unwrap();

        let diagram = builder.finish();
        // "Layer" and "Layer/Inner", nothing duplicated.
        assert_eq!(diagram.cluster_count(), 2);
        assert_eq!(diagram.cluster(&["Layer", "Inner"]).unwrap().nodes().len(), 2);
    }

    #[test]
    fn test_ungrouped_nodes_tracked_in_order() {
        let mut builder = DiagramBuilder::new("test");
        let first = builder.declare_node("builder_root_1", "1", &[]).unwrap();
        builder
            .declare_node("builder_root_grouped", "g", &["Cluster"])
            .unwrap();
        let second = builder.declare_node("builder_root_2", "2", &[]).unwrap();

        let diagram = builder.finish();
        assert_eq!(diagram.ungrouped(), &[first, second]);
    }

    proptest! {
        #[test]
        fn fan_out_appends_exactly_the_cross_product(n in 1usize..6, m in 1usize..6) {
            let mut builder = DiagramBuilder::new("prop");
            let sources: Vec<NodeId> = (0..n)
                .map(|i| builder
                    .declare_node(&format!("prop_src_{n}_{m}_{i}"), "s", &[])
                    .unwrap())
                .collect();
            let destinations: Vec<NodeId> = (0..m)
                .map(|i| builder
                    .declare_node(&format!("prop_dst_{n}_{m}_{i}"), "d", &[])
                    .unwrap())
                .collect();

            builder
                .connect(sources.clone(), destinations.clone(), Link::new())
                .unwrap();

            let diagram = builder.finish();
            prop_assert_eq!(diagram.edge_count(), n * m);
            for (index, edge) in diagram.edges().iter().enumerate() {
                prop_assert_eq!(edge.source(), sources[index / m]);
                prop_assert_eq!(edge.target(), destinations[index % m]);
            }
        }
    }
}
