use crate::analysis::weighted_score;
use crate::client::AgentDirectory;
use crate::error::EmitError;
use crate::workflow::{FlowData, Position, Viewport, WorkflowKind, WorkflowRecord};
use serde::{Deserialize, Serialize};

mod catalog;
mod layout;

pub use catalog::GeneratedNodeKind;
pub use layout::layout_depth;

/// A typed node decided by upstream business logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedNode {
    pub id: String,
    pub name: String,
    pub kind: GeneratedNodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

/// A directed connection between two generated nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEdge {
    pub source: String,
    pub target: String,
}

/// An internally generated workflow description, ready for emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorkflow {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<GeneratedNode>,
    #[serde(default)]
    pub edges: Vec<GeneratedEdge>,
    /// Names of the internal agents referenced by the nodes, informational.
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
}

/// The emitted Flowise-shaped graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowiseExport {
    pub nodes: Vec<FlowiseNode>,
    pub edges: Vec<FlowiseEdge>,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowiseNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: FlowiseNodeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowiseNodeData {
    pub id: String,
    pub label: String,
    pub name: String,
    pub category: String,
    pub input_anchors: Vec<String>,
    pub output_anchors: Vec<String>,
    pub inputs: serde_json::Map<String, serde_json::Value>,
    pub outputs: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<EmbeddedAgent>,
}

/// A referenced internal agent, resolved and embedded at emission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedAgent {
    pub name: String,
    pub config: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowiseEdge {
    pub id: String,
    pub source: String,
    pub source_handle: String,
    pub target: String,
    pub target_handle: String,
    #[serde(rename = "type")]
    pub edge_type: String,
}

/// Serializes a generated workflow into the Flowise node/edge shape,
/// assigning display positions and per-kind default settings.
///
/// Emission is deterministic: the same ordered input always yields
/// byte-identical output JSON.
pub struct FlowiseEmitter<'a> {
    workflow: &'a GeneratedWorkflow,
    agents: Option<&'a dyn AgentDirectory>,
}

impl<'a> FlowiseEmitter<'a> {
    pub fn new(workflow: &'a GeneratedWorkflow) -> Self {
        Self {
            workflow,
            agents: None,
        }
    }

    /// Attaches the directory used to embed referenced agents into Custom
    /// nodes. Without a directory, `agent_id` references emit no payload.
    pub fn with_agent_directory(mut self, agents: &'a dyn AgentDirectory) -> Self {
        self.agents = Some(agents);
        self
    }

    pub fn emit(&self) -> Result<FlowiseExport, EmitError> {
        let mut nodes = Vec::with_capacity(self.workflow.nodes.len());
        for (index, node) in self.workflow.nodes.iter().enumerate() {
            nodes.push(self.emit_node(node, index)?);
        }

        let edges = self
            .workflow
            .edges
            .iter()
            .map(|edge| self.emit_edge(edge))
            .collect();

        Ok(FlowiseExport {
            nodes,
            edges,
            viewport: Viewport::default(),
        })
    }

    /// Emits and wraps the result into a persistable record, recomputing the
    /// weighted complexity score and the layout depth.
    pub fn emit_record(&self) -> Result<WorkflowRecord, EmitError> {
        let export = self.emit()?;

        let complexity_score = weighted_score(
            self.workflow.nodes.iter().map(|n| n.kind.kind_tag()),
            self.workflow.edges.len(),
        );
        let max_depth = layout::layout_depth(export.nodes.iter().map(|n| n.position.y));

        let nodes = export
            .nodes
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| EmitError::Serialize(e.to_string()))?;
        let edges = export
            .edges
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| EmitError::Serialize(e.to_string()))?;

        let flow_data = FlowData::new(nodes, edges, export.viewport)
            .to_json()
            .map_err(|e| EmitError::Serialize(e.to_string()))?;

        Ok(WorkflowRecord {
            name: self.workflow.name.clone(),
            kind: self.record_kind(),
            category: "Generated".to_string(),
            flow_data,
            complexity_score,
            node_count: export.nodes.len(),
            edge_count: export.edges.len(),
            max_depth,
        })
    }

    fn emit_node(&self, node: &GeneratedNode, index: usize) -> Result<FlowiseNode, EmitError> {
        let kind = node.kind;
        let agent = self.resolve_agent(node)?;

        Ok(FlowiseNode {
            id: node.id.clone(),
            node_type: kind.kind_tag().to_string(),
            position: layout::node_position(kind, &node.id, index),
            data: FlowiseNodeData {
                id: node.id.clone(),
                label: node.name.clone(),
                name: node.name.clone(),
                category: kind.category().to_string(),
                input_anchors: kind.input_ports().iter().map(|p| p.to_string()).collect(),
                output_anchors: kind.output_ports().iter().map(|p| p.to_string()).collect(),
                inputs: kind.default_settings(),
                outputs: serde_json::Map::new(),
                agent,
            },
        })
    }

    fn resolve_agent(&self, node: &GeneratedNode) -> Result<Option<EmbeddedAgent>, EmitError> {
        let Some(agent_id) = &node.agent_id else {
            return Ok(None);
        };
        let Some(directory) = self.agents else {
            return Ok(None);
        };

        let record = directory
            .find(agent_id)
            .map_err(|source| EmitError::AgentLookup {
                node_id: node.id.clone(),
                source,
            })?;

        // An unknown id is normal input; only transport failures propagate.
        Ok(record.map(|r| EmbeddedAgent {
            name: r.name,
            config: r.config,
        }))
    }

    fn emit_edge(&self, edge: &GeneratedEdge) -> FlowiseEdge {
        let source_handle = format!("{}-output-{}", edge.source, self.port_for(&edge.source, true));
        let target_handle = format!("{}-input-{}", edge.target, self.port_for(&edge.target, false));

        FlowiseEdge {
            id: format!("{}-{}", source_handle, target_handle),
            source: edge.source.clone(),
            source_handle,
            target: edge.target.clone(),
            target_handle,
            edge_type: "buttonedge".to_string(),
        }
    }

    fn port_for(&self, node_id: &str, output: bool) -> &'static str {
        self.workflow
            .nodes
            .iter()
            .find(|n| n.id == node_id)
            .and_then(|n| {
                if output {
                    n.kind.output_ports().first()
                } else {
                    n.kind.input_ports().first()
                }
            })
            .copied()
            .unwrap_or(if output { "output" } else { "input" })
    }

    fn record_kind(&self) -> WorkflowKind {
        let has = |kind: GeneratedNodeKind| self.workflow.nodes.iter().any(|n| n.kind == kind);
        if has(GeneratedNodeKind::Parallel) {
            WorkflowKind::Multiagent
        } else if has(GeneratedNodeKind::Tool) || has(GeneratedNodeKind::Custom) {
            WorkflowKind::Agentflow
        } else {
            WorkflowKind::Chatflow
        }
    }
}
