use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::json;
use std::fs;

/// A CLI tool to generate sample Flowise-shaped workflow exports
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// The minimum number of nodes to generate
    #[arg(long, default_value_t = 3)]
    min: usize,

    /// The maximum number of nodes to generate
    #[arg(long, default_value_t = 12)]
    max: usize,
}

/// (component name, node kind, category) pool the generator samples from.
const NODE_POOL: &[(&str, &str, &str)] = &[
    ("chatInput", "chatInput", "Input"),
    ("chatOpenAI", "llmNode", "Chat Models"),
    ("bufferMemory", "memoryNode", "Memory"),
    ("calculator", "toolNode", "Tools"),
    ("serpAPI", "toolNode", "Tools"),
    ("agentExecutor", "customNode", "Agents"),
    ("ifElse", "conditionNode", "Logic"),
    ("chatOutput", "chatOutput", "Output"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let node_count = rng.random_range(cli.min..=cli.max);
    println!("Generating a workflow with {} nodes...", node_count);

    let nodes = generate_nodes(&mut rng, node_count);
    let edges = generate_edges(&mut rng, node_count);

    let flow = json!({
        "nodes": nodes,
        "edges": edges,
        "viewport": {"x": 0.0, "y": 0.0, "zoom": 1.0},
    });

    let json_output = serde_json::to_string_pretty(&flow)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_nodes(rng: &mut ThreadRng, count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|index| {
            let (name, kind, category) = NODE_POOL[rng.random_range(0..NODE_POOL.len())];
            json!({
                "id": format!("node_{}", index),
                "type": kind,
                "position": {
                    "x": rng.random_range(0.0..500.0),
                    "y": 100.0 * index as f64,
                },
                "data": {
                    "id": format!("node_{}", index),
                    "name": name,
                    "category": category,
                    "inputParams": [
                        {"name": "sessionId", "type": "string", "optional": true},
                        {"name": "modelName", "type": "options", "optional": false},
                    ],
                },
            })
        })
        .collect()
}

/// Chains the nodes linearly, then sprinkles in a few extra connections so
/// the highly-connected pattern shows up sometimes.
fn generate_edges(rng: &mut ThreadRng, node_count: usize) -> Vec<serde_json::Value> {
    let mut edges = Vec::new();
    if node_count < 2 {
        return edges;
    }

    for index in 0..node_count - 1 {
        edges.push(edge_between(index, index + 1));
    }

    let extras = rng.random_range(0..=node_count / 2);
    for _ in 0..extras {
        let source = rng.random_range(0..node_count - 1);
        let target = rng.random_range(source + 1..node_count);
        edges.push(edge_between(source, target));
    }

    edges
}

fn edge_between(source: usize, target: usize) -> serde_json::Value {
    json!({
        "source": format!("node_{}", source),
        "sourceHandle": format!("node_{}-output-output", source),
        "target": format!("node_{}", target),
        "targetHandle": format!("node_{}-input-input", target),
        "type": "buttonedge",
    })
}
