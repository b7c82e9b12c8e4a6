use serde::{Deserialize, Serialize};
use std::fmt;

/// The complete, canonical definition of a conversational workflow graph.
/// This is the target structure for any external format conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub kind: WorkflowKind,
    pub category: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub viewport: Viewport,
}

impl Workflow {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A single identified point in the workflow graph.
///
/// `id` is expected to be unique within one workflow's node set; no other
/// structural invariant is enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    pub name: String,
    /// Free-text type discriminator, e.g. "customNode" or "llmNode".
    pub node_kind: String,
    /// Free-text grouping, e.g. "Chat Models" or "Memory". "Unknown" when absent.
    pub category: String,
    /// Display-only canvas coordinates.
    pub position: Position,
    /// Open-ended key-value settings whose shape depends on `node_kind`.
    #[serde(default)]
    pub inputs: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub outputs: serde_json::Map<String, serde_json::Value>,
    /// Declared input parameters, used for required-config extraction.
    #[serde(default)]
    pub input_params: Vec<InputParam>,
    /// Reference to an internal agent record when the node wraps an agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

/// A declared input parameter on a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputParam {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub param_type: String,
    #[serde(default)]
    pub optional: bool,
}

/// A directed relation between two node ids, each with a named attachment point.
///
/// `source` and `target` should reference existing node ids, but this is never
/// validated; dangling edges are ignored during statistics and rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub source: String,
    #[serde(default)]
    pub source_handle: String,
    pub target: String,
    #[serde(default)]
    pub target_handle: String,
    #[serde(rename = "type", default = "default_edge_type")]
    pub edge_type: String,
}

pub(crate) fn default_edge_type() -> String {
    "default".to_string()
}

impl Default for FlowEdge {
    fn default() -> Self {
        Self {
            source: String::new(),
            source_handle: String::new(),
            target: String::new(),
            target_handle: String::new(),
            edge_type: default_edge_type(),
        }
    }
}

/// 2D canvas position, display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Canvas viewport state stored alongside the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// The persisted workflow type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowKind {
    Chatflow,
    Agentflow,
    Multiagent,
    Assistant,
}

impl Default for WorkflowKind {
    fn default() -> Self {
        WorkflowKind::Chatflow
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowKind::Chatflow => write!(f, "CHATFLOW"),
            WorkflowKind::Agentflow => write!(f, "AGENTFLOW"),
            WorkflowKind::Multiagent => write!(f, "MULTIAGENT"),
            WorkflowKind::Assistant => write!(f, "ASSISTANT"),
        }
    }
}
