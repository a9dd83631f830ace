//! Configuration types for diagram rendering.
//!
//! This module provides configuration structures controlling the global
//! presentation attributes handed to the layout engine. All types implement
//! [`serde::Deserialize`] for loading from external sources (the CLI reads
//! them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the three sections.
//! - [`GraphConfig`] - Whole-graph attributes: font size, background color,
//!   padding, spacing, drawing direction, edge routing.
//! - [`NodeConfig`] - Default node attributes: shape, font size, size.
//! - [`EdgeConfig`] - Default edge attributes: font size.
//!
//! The defaults reproduce the attributes of the rendered architecture
//! diagram: a white background, orthogonal edges, and a top-to-bottom rank
//! direction.
//!
//! # Example
//!
//! ```
//! # use gantry::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.graph().background_color(), "white");
//! assert_eq!(config.node().fontsize(), 12);
//! ```

use serde::Deserialize;

use gantry_core::semantic::{Direction, EdgeRouting};

/// Top-level configuration for diagram rendering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Whole-graph attribute section.
    #[serde(default)]
    graph: GraphConfig,

    /// Node default attribute section.
    #[serde(default)]
    node: NodeConfig,

    /// Edge default attribute section.
    #[serde(default)]
    edge: EdgeConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from the three attribute sections.
    pub fn new(graph: GraphConfig, node: NodeConfig, edge: EdgeConfig) -> Self {
        Self { graph, node, edge }
    }

    /// Returns the whole-graph attributes.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the node default attributes.
    pub fn node(&self) -> &NodeConfig {
        &self.node
    }

    /// Returns the edge default attributes.
    pub fn edge(&self) -> &EdgeConfig {
        &self.edge
    }
}

fn default_graph_fontsize() -> u32 {
    16
}

fn default_background_color() -> String {
    "white".to_string()
}

fn default_pad() -> f64 {
    0.5
}

fn default_nodesep() -> f64 {
    0.8
}

fn default_ranksep() -> f64 {
    1.0
}

/// Whole-graph presentation attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Title and cluster label font size, in points.
    #[serde(default = "default_graph_fontsize")]
    fontsize: u32,

    /// Background color as a color string.
    #[serde(default = "default_background_color")]
    background_color: String,

    /// Padding around the drawing, in inches.
    #[serde(default = "default_pad")]
    pad: f64,

    /// Minimum space between adjacent nodes in one rank, in inches.
    #[serde(default = "default_nodesep")]
    nodesep: f64,

    /// Rank separation, in inches.
    #[serde(default = "default_ranksep")]
    ranksep: f64,

    /// Drawing direction.
    #[serde(default)]
    direction: Direction,

    /// Edge routing style.
    #[serde(default)]
    routing: EdgeRouting,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            fontsize: default_graph_fontsize(),
            background_color: default_background_color(),
            pad: default_pad(),
            nodesep: default_nodesep(),
            ranksep: default_ranksep(),
            direction: Direction::default(),
            routing: EdgeRouting::default(),
        }
    }
}

impl GraphConfig {
    /// Title and cluster label font size, in points.
    pub fn fontsize(&self) -> u32 {
        self.fontsize
    }

    /// The configured background color string, unvalidated.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Padding around the drawing, in inches.
    pub fn pad(&self) -> f64 {
        self.pad
    }

    /// Minimum space between adjacent nodes in one rank, in inches.
    pub fn nodesep(&self) -> f64 {
        self.nodesep
    }

    /// Rank separation, in inches.
    pub fn ranksep(&self) -> f64 {
        self.ranksep
    }

    /// Drawing direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Edge routing style.
    pub fn routing(&self) -> EdgeRouting {
        self.routing
    }
}

fn default_node_fontsize() -> u32 {
    12
}

fn default_node_size() -> f64 {
    1.2
}

fn default_node_shape() -> String {
    "box".to_string()
}

/// Default attributes applied to every node.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Node label font size, in points.
    #[serde(default = "default_node_fontsize")]
    fontsize: u32,

    /// Minimum node width, in inches.
    #[serde(default = "default_node_size")]
    width: f64,

    /// Minimum node height, in inches.
    #[serde(default = "default_node_size")]
    height: f64,

    /// Node shape name understood by the layout engine.
    #[serde(default = "default_node_shape")]
    shape: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            fontsize: default_node_fontsize(),
            width: default_node_size(),
            height: default_node_size(),
            shape: default_node_shape(),
        }
    }
}

impl NodeConfig {
    /// Node label font size, in points.
    pub fn fontsize(&self) -> u32 {
        self.fontsize
    }

    /// Minimum node width, in inches.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Minimum node height, in inches.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Node shape name.
    pub fn shape(&self) -> &str {
        &self.shape
    }
}

fn default_edge_fontsize() -> u32 {
    10
}

/// Default attributes applied to every edge.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeConfig {
    /// Edge label font size, in points.
    #[serde(default = "default_edge_fontsize")]
    fontsize: u32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            fontsize: default_edge_fontsize(),
        }
    }
}

impl EdgeConfig {
    /// Edge label font size, in points.
    pub fn fontsize(&self) -> u32 {
        self.fontsize
    }
}
