//! # Zanai Flow - Workflow Graph Conversion and Analysis Engine
//!
//! **zanai-flow** converts conversational workflow graphs between the Flowise
//! node/edge JSON shape and Zanai's canonical model, computes descriptive
//! statistics over them, and derives the agent-configuration suggestions used
//! to pre-fill Zanai's creation forms.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic around a canonical [`workflow::Workflow`]
//! model. The two supported directions are:
//!
//! 1.  **Import**: parse an externally-sourced Flowise export with
//!     [`flowise::import_flow`], which normalizes loosely-typed JSON into a
//!     fully-populated graph. Run [`analysis::Analyzer`] over it for
//!     histograms, a complexity bucket, pattern tags and the weighted
//!     complexity score, then derive a [`mapping::ZanaiMapping`] suggestion.
//! 2.  **Export**: hand an internally generated workflow description to
//!     [`emit::FlowiseEmitter`], which assigns canvas positions and per-kind
//!     default settings and produces the Flowise-shaped JSON plus a
//!     persistable [`workflow::WorkflowRecord`].
//!
//! Custom source formats plug in through the [`workflow::IntoWorkflow`]
//! trait; persisted blobs round-trip through the versioned
//! [`workflow::FlowData`] envelope.
//!
//! ## Quick Start
//!
//! ```rust
//! use zanai_flow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"{
//!         "nodes": [
//!             {"id": "node_0", "type": "chatInput", "position": {"x": 0, "y": 0},
//!              "data": {"id": "node_0", "name": "chatInput", "category": "Input"}},
//!             {"id": "node_1", "type": "llmNode", "position": {"x": 0, "y": 100},
//!              "data": {"id": "node_1", "name": "chatOpenAI", "category": "Chat Models"}}
//!         ],
//!         "edges": [
//!             {"source": "node_0", "sourceHandle": "node_0-output-output",
//!              "target": "node_1", "targetHandle": "node_1-input-prompt"}
//!         ]
//!     }"#;
//!
//!     // Normalize the external shape into the canonical model.
//!     let workflow = import_flow(json)?;
//!
//!     // One-pass structural statistics.
//!     let summary = Analyzer::new(&workflow).summarize();
//!     println!(
//!         "complexity: {} (score {})",
//!         summary.complexity, summary.complexity_score
//!     );
//!
//!     // Suggested agent configuration for the creation form.
//!     let mapping = ZanaiMapping::derive(&workflow, &summary);
//!     println!("suggested agent type: {}", mapping.suggested_agent_type);
//!
//!     Ok(())
//! }
//! ```
//!
//! The export direction mirrors this:
//!
//! ```rust
//! use zanai_flow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let generated = GeneratedWorkflow {
//!         name: "support bot".to_string(),
//!         description: "answers support tickets".to_string(),
//!         nodes: vec![
//!             GeneratedNode {
//!                 id: "node_0".to_string(),
//!                 name: "Start".to_string(),
//!                 kind: GeneratedNodeKind::Start,
//!                 agent_id: None,
//!             },
//!             GeneratedNode {
//!                 id: "node_1".to_string(),
//!                 name: "Answer".to_string(),
//!                 kind: GeneratedNodeKind::Llm,
//!                 agent_id: None,
//!             },
//!         ],
//!         edges: vec![GeneratedEdge {
//!             source: "node_0".to_string(),
//!             target: "node_1".to_string(),
//!         }],
//!         agents: vec![],
//!         complexity: None,
//!         estimated_time: None,
//!     };
//!
//!     let record = FlowiseEmitter::new(&generated).emit_record()?;
//!     println!(
//!         "persisting '{}' with score {}",
//!         record.name, record.complexity_score
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod client;
pub mod emit;
pub mod error;
pub mod flowise;
pub mod mapping;
pub mod prelude;
pub mod workflow;

#[cfg(feature = "python-bindings")]
mod python;
