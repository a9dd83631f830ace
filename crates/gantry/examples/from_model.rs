//! Example: building and rendering a small service diagram.
//!
//! This example demonstrates the full pipeline: declare nodes under cluster
//! paths, connect them (including a fan-out over several targets), freeze the
//! model, and render it through Graphviz.

use gantry::{DiagramBuilder, Link, OutputFormat, Renderer, color::Color, config::AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = DiagramBuilder::new("Order Service");

    let users = builder.declare_node("users", "Users", &[])?;
    let api = builder.declare_node("api", "API Gateway", &["Edge"])?;
    let orders = builder.declare_node("orders", "Orders\nService", &["Backend"])?;
    let billing = builder.declare_node("billing", "Billing\nService", &["Backend"])?;
    let database = builder.declare_node("database", "PostgreSQL", &["Data"])?;

    builder.connect(users, api, Link::labeled("HTTPS"))?;
    // One call fans out to both backend services.
    builder.connect(
        api,
        [orders, billing],
        Link::labeled("REST").with_color(Color::new("blue")?),
    )?;
    builder.connect([orders, billing], database, Link::labeled("SQL"))?;

    let diagram = builder.finish();
    println!(
        "Built diagram with {} components and {} connections",
        diagram.node_count(),
        diagram.edge_count()
    );

    let renderer = Renderer::new(AppConfig::default());
    renderer.render(&diagram, "order_service.png", OutputFormat::Png)?;
    println!("Diagram written to order_service.png");

    Ok(())
}
