//! CLI logic for the architecture diagram generator.
//!
//! This crate wires the fixed [`blueprint`] topology through the Gantry
//! rendering pipeline: load configuration, build the model, render one file,
//! and report a summary whose numbers come from the populated model rather
//! than from hardcoded text.

pub mod error_adapter;

mod args;
mod blueprint;
mod config;

pub use args::Args;

use std::{
    fmt,
    path::PathBuf,
    str::FromStr,
};

use log::info;

use gantry::{GantryError, OutputFormat, Renderer};

/// What one successful run produced, derived from the live model.
#[derive(Debug)]
pub struct RenderSummary {
    output_path: PathBuf,
    components: usize,
    connections: usize,
    clusters: usize,
}

impl RenderSummary {
    /// Path of the written artifact.
    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Number of components in the rendered model.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Number of connections in the rendered model.
    pub fn connections(&self) -> usize {
        self.connections
    }

    /// Number of clusters in the rendered model.
    pub fn clusters(&self) -> usize {
        self.clusters
    }
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Architecture diagram rendered successfully.")?;
        writeln!(f, "Output file: {}", self.output_path.display())?;
        writeln!(
            f,
            "Components: {} (in {} clusters)",
            self.components, self.clusters
        )?;
        write!(f, "Connections: {}", self.connections)
    }
}

/// Run the diagram generator.
///
/// Builds the architecture blueprint, renders it to the configured output
/// path, and returns the summary for the caller to print.
///
/// # Errors
///
/// Returns `GantryError` for:
/// - Configuration loading errors (missing or unparseable file, bad values)
/// - Model construction errors
/// - Rendering errors from the layout engine
/// - File I/O errors
pub fn run(args: &Args) -> Result<RenderSummary, GantryError> {
    info!(
        output_path = args.output,
        format = args.format;
        "Rendering architecture diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let format = OutputFormat::from_str(&args.format)
        .map_err(|err| GantryError::Config(format!("{err}: `{}`", args.format)))?;

    // Build the fixed topology and render it
    let diagram = blueprint::automotive_contact_center()?;
    let renderer = Renderer::new(app_config);
    renderer.render(&diagram, &args.output, format)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(RenderSummary {
        output_path: PathBuf::from(&args.output),
        components: diagram.node_count(),
        connections: diagram.edge_count(),
        clusters: diagram.cluster_count(),
    })
}
