//! DOT generation from the semantic model.
//!
//! [`DotExporter`] walks a frozen [`Diagram`] and produces a
//! [`dot_structures::Graph`]: global attribute blocks from the configuration,
//! one `cluster_N` subgraph per cluster (nested to mirror the cluster
//! forest), node statements inside their clusters, and all edges at the top
//! level. Iteration follows declaration order throughout, so the emitted
//! source is deterministic for a given model and configuration.

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id, Node as DotNode,
    NodeId as DotNodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::debug;

use gantry_core::{
    color::Color,
    identifier::NodeId,
    semantic::{Cluster, Diagram, Edge},
};

use crate::{config::AppConfig, error::GantryError};

/// Converts frozen diagrams into DOT using one configuration.
#[derive(Debug)]
pub struct DotExporter<'a> {
    config: &'a AppConfig,
}

impl<'a> DotExporter<'a> {
    /// Creates an exporter bound to the given presentation configuration.
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Builds the DOT graph structure for a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`GantryError::Config`] if the configured background color is
    /// not a valid color string.
    pub fn export(&self, diagram: &Diagram) -> Result<Graph, GantryError> {
        let background = Color::new(self.config.graph().background_color())
            .map_err(|err| GantryError::Config(format!("invalid background color: {err}")))?;

        let mut stmts = vec![
            self.graph_attributes(diagram, &background),
            self.node_defaults(),
            self.edge_defaults(),
        ];

        for id in diagram.ungrouped() {
            stmts.push(Stmt::Node(node_stmt(diagram, *id)));
        }

        let mut cluster_index = 0usize;
        for cluster in diagram.clusters() {
            stmts.push(Stmt::Subgraph(cluster_subgraph(
                diagram,
                cluster,
                &mut cluster_index,
            )));
        }

        for edge in diagram.edges() {
            stmts.push(Stmt::Edge(edge_stmt(edge)));
        }

        debug!(
            nodes = diagram.node_count(),
            edges = diagram.edge_count(),
            clusters = cluster_index;
            "DOT graph assembled"
        );

        Ok(Graph::DiGraph {
            id: quoted(diagram.title()),
            strict: false,
            stmts,
        })
    }

    /// Renders the DOT graph structure to source text.
    pub fn source(&self, diagram: &Diagram) -> Result<String, GantryError> {
        let graph = self.export(diagram)?;
        Ok(graph.print(&mut PrinterContext::default()))
    }

    fn graph_attributes(&self, diagram: &Diagram, background: &Color) -> Stmt {
        let graph = self.config.graph();
        Stmt::GAttribute(GraphAttributes::Graph(vec![
            attr("label", quoted(diagram.title())),
            attr("labelloc", plain("t")),
            attr("fontsize", plain(graph.fontsize().to_string())),
            attr("bgcolor", quoted(background.as_str())),
            attr("pad", plain(graph.pad().to_string())),
            attr("splines", plain(graph.routing().to_string())),
            attr("nodesep", plain(graph.nodesep().to_string())),
            attr("ranksep", plain(graph.ranksep().to_string())),
            attr("rankdir", plain(graph.direction().to_string())),
        ]))
    }

    fn node_defaults(&self) -> Stmt {
        let node = self.config.node();
        Stmt::GAttribute(GraphAttributes::Node(vec![
            attr("shape", plain(node.shape().to_string())),
            attr("fontsize", plain(node.fontsize().to_string())),
            attr("width", plain(node.width().to_string())),
            attr("height", plain(node.height().to_string())),
        ]))
    }

    fn edge_defaults(&self) -> Stmt {
        let edge = self.config.edge();
        Stmt::GAttribute(GraphAttributes::Edge(vec![attr(
            "fontsize",
            plain(edge.fontsize().to_string()),
        )]))
    }
}

fn cluster_subgraph(diagram: &Diagram, cluster: &Cluster, index: &mut usize) -> Subgraph {
    // Graphviz only treats subgraphs whose id starts with "cluster" as drawn
    // groupings, hence the synthetic ids.
    let id = Id::Plain(format!("cluster_{}", *index));
    *index += 1;

    let mut stmts = vec![Stmt::Attribute(attr("label", quoted(cluster.name())))];
    for node_id in cluster.nodes() {
        stmts.push(Stmt::Node(node_stmt(diagram, *node_id)));
    }
    for child in cluster.children() {
        stmts.push(Stmt::Subgraph(cluster_subgraph(diagram, child, index)));
    }

    Subgraph { id, stmts }
}

fn node_stmt(diagram: &Diagram, id: NodeId) -> DotNode {
    let node = diagram
        .node(id)
        .expect("cluster members and root nodes are declared on the diagram");
    DotNode {
        id: node_ref(id),
        attributes: vec![attr("label", quoted(node.label()))],
    }
}

fn edge_stmt(edge: &Edge) -> DotEdge {
    let mut attributes = Vec::new();
    if let Some(label) = edge.label() {
        attributes.push(attr("label", quoted(label)));
    }
    if let Some(color) = edge.color() {
        attributes.push(attr("color", quoted(color.as_str())));
    }

    DotEdge {
        ty: EdgeTy::Pair(
            Vertex::N(node_ref(edge.source())),
            Vertex::N(node_ref(edge.target())),
        ),
        attributes,
    }
}

fn node_ref(id: NodeId) -> DotNodeId {
    DotNodeId(quoted(&id.to_string()), None)
}

fn attr(name: &str, value: Id) -> Attribute {
    Attribute(Id::Plain(name.to_string()), value)
}

fn plain(value: impl Into<String>) -> Id {
    Id::Plain(value.into())
}

/// Quotes a value for DOT, escaping quotes and backslashes and turning line
/// breaks into the `\n` escape the engine centers labels on.
fn quoted(value: &str) -> Id {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    Id::Escaped(format!("\"{escaped}\""))
}
