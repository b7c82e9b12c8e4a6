use clap::{Parser, ValueEnum};
use std::fs;
use std::time::Instant;
use zanai_flow::prelude::*;

/// Which direction of the conversion pipeline to run.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Normalize a Flowise export, print statistics and the Zanai mapping.
    Import,
    /// Emit a generated workflow description as Flowise JSON.
    Export,
}

/// Workflow graph conversion and analysis CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input JSON file (a Flowise export or a generated workflow)
    input_path: String,

    /// Optional path to write the output JSON to
    #[arg(short, long)]
    output: Option<String>,

    /// The pipeline direction to run (defaults to import)
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,
}

fn main() {
    let cli = Cli::parse();

    let input_json = fs::read_to_string(&cli.input_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read input file '{}': {}",
            &cli.input_path, e
        ))
    });

    match cli.mode.unwrap_or(Mode::Import) {
        Mode::Import => run_import(&input_json, cli.output.as_deref()),
        Mode::Export => run_export(&input_json, cli.output.as_deref()),
    }
}

fn run_import(input_json: &str, output: Option<&str>) {
    let import_start = Instant::now();
    let workflow = import_flow(input_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Import failed: {}", e)));
    let summary = Analyzer::new(&workflow).summarize();
    let mapping = ZanaiMapping::derive(&workflow, &summary);
    let import_duration = import_start.elapsed();

    println!("Workflow '{}'", workflow.name);
    println!(
        "  -> {} nodes, {} edges",
        summary.node_count, summary.edge_count
    );
    println!(
        "  -> Complexity: {} (score {})",
        summary.complexity, summary.complexity_score
    );
    if !summary.patterns.is_empty() {
        println!("  -> Patterns: {}", summary.patterns.join(", "));
    }
    println!(
        "  -> Suggested agent type: {}, workflow type: {}",
        mapping.suggested_agent_type, mapping.workflow_type
    );
    for component in &mapping.suggested_components {
        println!("  -> {} maps to '{}'", component.node_name, component.kind);
    }

    if let Some(output_path) = output {
        let mapping_json = serde_json::to_string_pretty(&mapping)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize mapping: {}", e)));
        fs::write(output_path, mapping_json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", output_path, e))
        });
        println!("  -> Wrote mapping to '{}'", output_path);
    }

    println!("\nImport + analysis took {:?}", import_duration);
}

fn run_export(input_json: &str, output: Option<&str>) {
    let generated: GeneratedWorkflow = serde_json::from_str(input_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse generated workflow: {}", e)));

    let export_start = Instant::now();
    let emitter = FlowiseEmitter::new(&generated);
    let export = emitter
        .emit()
        .unwrap_or_else(|e| exit_with_error(&format!("Emission failed: {}", e)));
    let record = emitter
        .emit_record()
        .unwrap_or_else(|e| exit_with_error(&format!("Record emission failed: {}", e)));
    let export_duration = export_start.elapsed();

    println!("Emitted workflow '{}'", record.name);
    println!(
        "  -> {} nodes, {} edges, depth {}, score {}",
        record.node_count, record.edge_count, record.max_depth, record.complexity_score
    );

    let export_json = serde_json::to_string_pretty(&export)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize export: {}", e)));
    match output {
        Some(output_path) => {
            fs::write(output_path, export_json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", output_path, e))
            });
            println!("  -> Wrote Flowise JSON to '{}'", output_path);
        }
        None => println!("{}", export_json),
    }

    println!("\nEmission took {:?}", export_duration);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
