use crate::workflow::Position;
use serde::Deserialize;

/// Raw node shape as found in a Flowise export. Field presence is not
/// guaranteed below the top-level skeleton, so everything defaults.
#[derive(Debug, Default, Deserialize)]
pub struct RawFlowNode {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: RawNodeData,
}

/// The `data` payload carried by a raw Flowise node.
#[derive(Debug, Default, Deserialize)]
pub struct RawNodeData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub inputs: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub outputs: serde_json::Map<String, serde_json::Value>,
    #[serde(default, alias = "inputParams")]
    pub input_params: Vec<RawInputParam>,
    #[serde(default, alias = "agentId")]
    pub agent_id: Option<String>,
}

/// A declared input parameter on a raw node.
#[derive(Debug, Default, Deserialize)]
pub struct RawInputParam {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub param_type: String,
    #[serde(default)]
    pub optional: bool,
}

/// Raw edge shape as found in a Flowise export.
#[derive(Debug, Default, Deserialize)]
pub struct RawFlowEdge {
    #[serde(default)]
    pub source: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: String,
    #[serde(default)]
    pub target: String,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: String,
    #[serde(rename = "type", default)]
    pub edge_type: Option<String>,
}
