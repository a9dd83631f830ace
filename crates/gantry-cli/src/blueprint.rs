//! The architecture topology rendered by the CLI.
//!
//! This module is the declarative content of the tool: the full node, cluster,
//! and connection enumeration for the Automotive Intelligent Contact Center on
//! AWS. Everything here is model construction; presentation attributes come
//! from the configuration and rendering happens in the caller.

use gantry::{DiagramBuilder, GantryError, Link, color::Color, semantic::Diagram};

const AGENT_LAYER: &str = "AI Agent Layer (14 Agents + 3 MCP)";

fn color(name: &str) -> Result<Color, GantryError> {
    Color::new(name).map_err(GantryError::Config)
}

/// Builds the full contact-center architecture diagram.
pub fn automotive_contact_center() -> Result<Diagram, GantryError> {
    let mut builder =
        DiagramBuilder::new("Automotive Intelligent Contact Center - AWS Architecture");

    // Users
    let users = builder.declare_node("users", "Users\n(Web/Mobile/Vehicle)", &[])?;

    // Security Layer
    let waf = builder.declare_node("waf", "AWS WAF\nDDoS Protection", &["Security Layer"])?;
    let iam = builder.declare_node("iam", "IAM\nAuthentication", &["Security Layer"])?;

    // CDN & API Layer
    let cdn = builder.declare_node("cdn", "CloudFront\nGlobal CDN", &["API & CDN Layer"])?;
    let api = builder.declare_node("api", "API Gateway\nREST + WebSocket", &["API & CDN Layer"])?;

    // Orchestration Layer
    let step_functions = builder.declare_node(
        "step_functions",
        "Step Functions\nWorkflow",
        &["Orchestration Layer"],
    )?;
    let eventbridge = builder.declare_node(
        "eventbridge",
        "EventBridge\nEvent Bus",
        &["Orchestration Layer"],
    )?;

    // Agent Layer (Lambda functions), nested under one enclosing cluster
    let core_agents = [AGENT_LAYER, "Core Agents"];
    let supervisor = builder.declare_node("supervisor", "Supervisor\nAgent", &core_agents)?;
    let intent = builder.declare_node("intent", "Intent\nAnalysis", &core_agents)?;
    let sentiment = builder.declare_node("sentiment", "Sentiment\nAnalysis", &core_agents)?;
    let routing = builder.declare_node("routing", "Routing\nAgent", &core_agents)?;

    let enhanced_agents = [AGENT_LAYER, "Enhanced Agents"];
    let knowledge = builder.declare_node("knowledge", "Knowledge\nRetrieval", &enhanced_agents)?;
    let personalization =
        builder.declare_node("personalization", "Personalization\nAgent", &enhanced_agents)?;
    let response = builder.declare_node("response", "Response\nGeneration", &enhanced_agents)?;

    let advanced_features = [AGENT_LAYER, "Advanced Features"];
    let cockpit = builder.declare_node("cockpit", "Cockpit\nAssistant", &advanced_features)?;
    let recommendations = builder.declare_node(
        "recommendations",
        "Product\nRecommendations",
        &advanced_features,
    )?;
    let insights = builder.declare_node("insights", "CDH\nInsights", &advanced_features)?;

    let agentic_core = [AGENT_LAYER, "Agentic Core"];
    let reasoning = builder.declare_node("reasoning", "Reasoning\nEngine", &agentic_core)?;
    let learning = builder.declare_node("learning", "Learning\nSystem", &agentic_core)?;

    let mcp_servers = [AGENT_LAYER, "MCP Servers"];
    let vehicle_mcp = builder.declare_node("vehicle_mcp", "Vehicle\nDesign MCP", &mcp_servers)?;
    let journey_mcp = builder.declare_node("journey_mcp", "Customer\nJourney MCP", &mcp_servers)?;
    let market_mcp = builder.declare_node("market_mcp", "Market\nIntelligence MCP", &mcp_servers)?;

    // AI/ML Layer
    let bedrock = builder.declare_node(
        "bedrock",
        "Amazon Bedrock\nClaude 3 / Titan\nReal-time Inference",
        &["AI/ML Services"],
    )?;

    // Data Layer
    let dynamodb = builder.declare_node(
        "dynamodb",
        "DynamoDB\nCustomers\nSessions\nAnalytics",
        &["Data Layer"],
    )?;
    let s3 = builder.declare_node(
        "s3",
        "S3\nKnowledge Base\nDocuments\nAssets",
        &["Data Layer"],
    )?;

    // Monitoring & Analytics
    let cloudwatch = builder.declare_node(
        "cloudwatch",
        "CloudWatch\nLogs & Metrics\nReal-time Monitoring",
        &["Monitoring & Analytics"],
    )?;
    let quicksight = builder.declare_node(
        "quicksight",
        "QuickSight\nDashboards",
        &["Monitoring & Analytics"],
    )?;

    // Edge flow from users through the security and API layers
    builder.connect(users, waf, Link::labeled("HTTPS"))?;
    builder.connect(waf, cdn, Link::new())?;
    builder.connect(cdn, api, Link::labeled("API Calls"))?;
    builder.connect(api, iam, Link::new())?;

    // API to orchestration
    builder.connect(api, eventbridge, Link::labeled("Events"))?;
    builder.connect(api, step_functions, Link::labeled("Workflows"))?;

    // Orchestration to agents
    builder.connect(step_functions, supervisor, Link::new())?;
    builder.connect(eventbridge, supervisor, Link::new())?;

    // Supervisor orchestrates all agents
    let orchestrate = Link::labeled("Orchestrate").with_color(color("blue")?);
    builder.connect(supervisor, [intent, sentiment, routing], orchestrate.clone())?;
    builder.connect(
        supervisor,
        [knowledge, personalization, response],
        orchestrate.clone(),
    )?;
    builder.connect(
        supervisor,
        [cockpit, recommendations, insights],
        orchestrate,
    )?;
    builder.connect(
        supervisor,
        [reasoning, learning],
        Link::labeled("Orchestrate").with_color(color("purple")?),
    )?;
    builder.connect(
        supervisor,
        [vehicle_mcp, journey_mcp, market_mcp],
        Link::labeled("MCP Protocol").with_color(color("green")?),
    )?;

    // Agents to AI/ML
    builder.connect(
        [intent, sentiment, response, reasoning, learning],
        bedrock,
        Link::labeled("LLM Inference").with_color(color("red")?),
    )?;

    // Agents to data
    builder.connect(
        [knowledge, personalization, insights],
        dynamodb,
        Link::labeled("Read/Write"),
    )?;
    builder.connect(knowledge, s3, Link::labeled("Retrieve"))?;
    builder.connect(
        [vehicle_mcp, journey_mcp, market_mcp],
        dynamodb,
        Link::labeled("Data Access").with_color(color("green")?),
    )?;

    // Monitoring
    let logs = Link::labeled("Logs").with_color(color("orange")?);
    builder.connect(
        [
            supervisor,
            intent,
            sentiment,
            routing,
            knowledge,
            personalization,
            response,
        ],
        cloudwatch,
        logs.clone(),
    )?;
    builder.connect(
        [cockpit, recommendations, insights, reasoning, learning],
        cloudwatch,
        logs.clone(),
    )?;
    builder.connect([vehicle_mcp, journey_mcp, market_mcp], cloudwatch, logs)?;

    builder.connect(cloudwatch, quicksight, Link::labeled("Visualize"))?;

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_counts() {
        let diagram = automotive_contact_center().unwrap();

        assert_eq!(diagram.node_count(), 27);
        assert_eq!(diagram.edge_count(), 50);
        assert_eq!(diagram.cluster_count(), 12);
    }

    #[test]
    fn test_agent_layer_nesting() {
        let diagram = automotive_contact_center().unwrap();

        let core = diagram.cluster(&[AGENT_LAYER, "Core Agents"]).unwrap();
        assert_eq!(core.nodes().len(), 4);

        let mcp = diagram.cluster(&[AGENT_LAYER, "MCP Servers"]).unwrap();
        assert_eq!(mcp.nodes().len(), 3);

        // The nested groups live only under the agent layer.
        assert!(diagram.cluster(&["Core Agents"]).is_none());
        assert_eq!(
            diagram.cluster(&[AGENT_LAYER]).unwrap().children().count(),
            5
        );
    }

    #[test]
    fn test_entry_edge_and_fan_out() {
        let diagram = automotive_contact_center().unwrap();

        let first = &diagram.edges()[0];
        assert_eq!(first.source(), "users");
        assert_eq!(first.target(), "waf");
        assert_eq!(first.label(), Some("HTTPS"));

        let inference_edges = diagram
            .edges()
            .iter()
            .filter(|edge| edge.label() == Some("LLM Inference"))
            .count();
        assert_eq!(inference_edges, 5);
    }
}
