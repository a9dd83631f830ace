//! End-to-end tests for the CLI pipeline.
//!
//! These run the real `run` entry point against temp directories. PNG output
//! needs the Graphviz `dot` binary and is skipped when it is missing; the DOT
//! output path exercises everything but the engine itself.

use std::{fs, io::Write, process::Command};

use tempfile::tempdir;

use gantry_cli::{Args, run};

fn graphviz_available() -> bool {
    Command::new("dot").arg("-V").output().is_ok()
}

fn args_for(output: &str, format: &str) -> Args {
    Args {
        output: output.to_string(),
        format: format.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_dot_output_and_summary() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.dot");
    let output = output_path.to_string_lossy().to_string();

    let summary = run(&args_for(&output, "dot")).expect("run should succeed");

    // Counts come from the populated model, not hardcoded strings.
    assert_eq!(summary.components(), 27);
    assert_eq!(summary.connections(), 50);
    assert_eq!(summary.clusters(), 12);

    let rendered = summary.to_string();
    assert!(rendered.contains("Components: 27"));
    assert!(rendered.contains("Connections: 50"));

    let source = fs::read_to_string(&output_path).expect("output file should exist");
    assert!(source.starts_with("digraph"));
    assert!(source.contains("\"Security Layer\""));
    assert!(source.contains("\"MCP Servers\""));
    assert!(source.contains("label=\"HTTPS\""));
    assert!(source.contains("color=\"orange\""));
    assert!(source.contains("rankdir=TB"));
}

#[test]
fn e2e_png_output() {
    if !graphviz_available() {
        eprintln!("Graphviz not installed, skipping PNG end-to-end test");
        return;
    }

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.png");
    let output = output_path.to_string_lossy().to_string();

    let summary = run(&args_for(&output, "png")).expect("run should succeed");

    assert!(output_path.exists());
    assert!(output_path.metadata().unwrap().len() > 0);
    assert_eq!(summary.output_path(), &output_path);
}

#[test]
fn e2e_rejects_unknown_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.gif");

    let result = run(&args_for(&output_path.to_string_lossy(), "gif"));

    assert!(result.is_err());
    assert!(!output_path.exists());
}

#[test]
fn e2e_missing_explicit_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.dot");

    let mut args = args_for(&output_path.to_string_lossy(), "dot");
    args.config = Some("no/such/config.toml".to_string());

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}

#[test]
fn e2e_invalid_background_color_fails_before_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let mut config_file = fs::File::create(&config_path).unwrap();
    writeln!(config_file, "[graph]\nbackground_color = \"not-a-color\"").unwrap();

    let output_path = temp_dir.path().join("architecture.dot");
    let mut args = args_for(&output_path.to_string_lossy(), "dot");
    args.config = Some(config_path.to_string_lossy().to_string());

    let err = run(&args).unwrap_err();
    assert!(err.to_string().contains("background color"));
    assert!(!output_path.exists());
}

#[test]
fn e2e_config_overrides_presentation_attributes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let mut config_file = fs::File::create(&config_path).unwrap();
    writeln!(
        config_file,
        "[graph]\ndirection = \"LR\"\nrouting = \"polyline\""
    )
    .unwrap();

    let output_path = temp_dir.path().join("architecture.dot");
    let mut args = args_for(&output_path.to_string_lossy(), "dot");
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("run should succeed");

    let source = fs::read_to_string(&output_path).unwrap();
    assert!(source.contains("rankdir=LR"));
    assert!(source.contains("splines=polyline"));
}
