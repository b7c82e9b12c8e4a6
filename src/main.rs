use std::env;
use std::fs;
use zanai_flow::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/flowise-export.json> [path/to/record-out.json]");
        std::process::exit(1);
    }

    let flow_path = &args[1];
    let record_path = args.get(2);

    println!("Loading Flowise export from: {}", flow_path);
    let flow_json = match fs::read_to_string(flow_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read workflow file '{}': {}", flow_path, e);
            std::process::exit(1);
        }
    };

    // Import phase
    println!("\nNormalizing workflow...");
    let workflow = match import_flow(&flow_json) {
        Ok(workflow) => workflow,
        Err(e) => {
            eprintln!("Import failed: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Import successful! {} nodes, {} edges.",
        workflow.node_count(),
        workflow.edge_count()
    );

    // Analysis phase
    let summary = Analyzer::new(&workflow).summarize();
    println!("\nStructural Summary");
    println!(
        "  -> Complexity: {} (score {})",
        summary.complexity, summary.complexity_score
    );
    for (kind, count) in &summary.node_kinds {
        println!("  -> Kind '{}': {}", kind, count);
    }
    if summary.patterns.is_empty() {
        println!("  -> No patterns detected");
    } else {
        println!("  -> Patterns: {}", summary.patterns.join(", "));
    }

    // Classification phase
    let mapping = ZanaiMapping::derive(&workflow, &summary);
    println!("\nZanai Mapping");
    println!("  -> Suggested agent type: {}", mapping.suggested_agent_type);
    println!("  -> Workflow type: {}", mapping.workflow_type);
    for component in &mapping.suggested_components {
        println!(
            "  -> Component '{}' ({}): {}",
            component.node_name, component.node_id, component.kind
        );
    }
    if !mapping.required_config.is_empty() {
        println!("  -> Required config: {}", mapping.required_config.join(", "));
    }
    if !mapping.suggested_tools.is_empty() {
        println!("  -> Suggested tools: {}", mapping.suggested_tools.join(", "));
    }

    // Optional record output
    if let Some(record_path) = record_path {
        let record = match build_record(&workflow, &summary, &mapping) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Failed to build workflow record: {}", e);
                std::process::exit(1);
            }
        };
        let record_json = match serde_json::to_string_pretty(&record) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize workflow record: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = fs::write(record_path, record_json) {
            eprintln!("Failed to write record to '{}': {}", record_path, e);
            std::process::exit(1);
        }
        println!("\n  -> Wrote workflow record to '{}'", record_path);
    }
    println!();
}

fn build_record(
    workflow: &Workflow,
    summary: &FlowSummary,
    mapping: &ZanaiMapping,
) -> Result<WorkflowRecord> {
    let flow_data = workflow.to_flow_data()?.to_json()?;
    Ok(WorkflowRecord {
        name: workflow.name.clone(),
        kind: mapping.workflow_type.into(),
        category: workflow.category.clone(),
        flow_data,
        complexity_score: summary.complexity_score,
        node_count: summary.node_count,
        edge_count: summary.edge_count,
        max_depth: layout_depth(workflow.nodes.iter().map(|n| n.position.y)),
    })
}
