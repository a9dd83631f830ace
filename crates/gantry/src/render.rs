//! Rendering through the external Graphviz layout engine.

use std::{
    fmt::{self, Display},
    fs,
    path::Path,
    str::FromStr,
};

use graphviz_rust::cmd::{CommandArg, Format};
use log::{debug, info};

use gantry_core::semantic::Diagram;

use crate::{config::AppConfig, error::GantryError, export::dot::DotExporter};

/// Output formats the renderer can produce.
///
/// `Png` and `Svg` run the layout engine; `Dot` writes the generated source
/// without invoking it. The names match external configuration strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// PNG image (default)
    #[default]
    Png,
    /// SVG image
    Svg,
    /// DOT source text
    Dot,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "dot" => Ok(Self::Dot),
            _ => Err("Unsupported output format"),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Renders frozen diagrams to files through Graphviz.
///
/// The renderer holds only configuration and borrows the diagram, so one
/// frozen model can be rendered to several output paths; every render of the
/// same model sees identical structure.
///
/// # Examples
///
/// ```rust,no_run
/// use gantry::{DiagramBuilder, OutputFormat, Renderer, config::AppConfig};
///
/// let mut builder = DiagramBuilder::new("Edge Service");
/// let users = builder.declare_node("users", "Users", &[]).unwrap();
/// let waf = builder.declare_node("waf", "AWS WAF", &["Security"]).unwrap();
/// builder.connect(users, waf, gantry::Link::labeled("HTTPS")).unwrap();
/// let diagram = builder.finish();
///
/// let renderer = Renderer::new(AppConfig::default());
/// renderer
///     .render(&diagram, "edge_service.png", OutputFormat::Png)
///     .expect("Failed to render");
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a renderer with the given presentation configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The DOT source that would be handed to the layout engine.
    ///
    /// Deterministic for a given diagram and configuration; useful for
    /// inspecting the structure without running the engine.
    ///
    /// # Errors
    ///
    /// Returns [`GantryError::Config`] for invalid configured colors.
    pub fn dot_source(&self, diagram: &Diagram) -> Result<String, GantryError> {
        DotExporter::new(&self.config).source(diagram)
    }

    /// Renders the diagram to one file at `output_path`.
    ///
    /// This is a blocking, synchronous, single-shot operation: the layout
    /// engine is started, produces the output file, and exits within this
    /// call. There is no retry; a failed render leaves nothing to roll back.
    ///
    /// # Errors
    ///
    /// Returns [`GantryError::Render`] when the engine cannot be executed
    /// (typically because Graphviz is not installed) or reports a failure,
    /// and [`GantryError::Io`] when writing DOT source output fails.
    pub fn render(
        &self,
        diagram: &Diagram,
        output_path: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<(), GantryError> {
        let output_path = output_path.as_ref();
        info!(
            output_path = output_path.display().to_string(),
            format:? = format;
            "Rendering diagram"
        );

        let source = self.dot_source(diagram)?;
        debug!(source_len = source.len(); "DOT source generated");

        match format {
            OutputFormat::Dot => fs::write(output_path, source)?,
            OutputFormat::Png => self.run_engine(source, output_path, Format::Png)?,
            OutputFormat::Svg => self.run_engine(source, output_path, Format::Svg)?,
        }

        info!(output_path = output_path.display().to_string(); "Diagram rendered");
        Ok(())
    }

    fn run_engine(
        &self,
        source: String,
        output_path: &Path,
        format: Format,
    ) -> Result<(), GantryError> {
        let args = vec![
            CommandArg::Format(format),
            CommandArg::Output(output_path.to_string_lossy().into_owned()),
        ];

        graphviz_rust::exec_dot(source, args)
            .map(|_| ())
            .map_err(|err| {
                GantryError::new_render_error(
                    "failed to run the Graphviz layout engine (is `dot` installed?)",
                    err,
                )
            })
    }
}
