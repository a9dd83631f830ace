//! Gantry - architecture diagrams as code.
//!
//! A diagram is populated through [`DiagramBuilder`] (nodes with display
//! text, nested clusters, labeled and colored connections with cross-product
//! fan-out), frozen into an immutable model, and rendered to a single image
//! file by [`Renderer`], which delegates node placement, edge routing, and
//! image encoding to the external Graphviz layout engine.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gantry::{DiagramBuilder, Link, OutputFormat, Renderer, config::AppConfig};
//!
//! let mut builder = DiagramBuilder::new("Edge Service");
//!
//! let users = builder.declare_node("users", "Users", &[]).unwrap();
//! let waf = builder
//!     .declare_node("waf", "AWS WAF", &["Security Layer"])
//!     .unwrap();
//! let cdn = builder
//!     .declare_node("cdn", "CloudFront", &["API & CDN Layer"])
//!     .unwrap();
//!
//! builder.connect(users, waf, Link::labeled("HTTPS")).unwrap();
//! builder.connect(waf, cdn, Link::new()).unwrap();
//!
//! let diagram = builder.finish();
//!
//! let renderer = Renderer::new(AppConfig::default());
//! renderer
//!     .render(&diagram, "edge_service.png", OutputFormat::Png)
//!     .expect("Failed to render");
//! ```

pub mod config;

mod error;
mod export;
mod render;

pub use gantry_core::{color, identifier, semantic};

pub use gantry_core::semantic::{Diagram, DiagramBuilder, Link, ModelError};

pub use error::GantryError;
pub use render::{OutputFormat, Renderer};
