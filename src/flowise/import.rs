use super::types::{RawFlowEdge, RawFlowNode};
use crate::error::ImportError;
use crate::workflow::{FlowEdge, FlowNode, InputParam, Viewport, Workflow, WorkflowKind};

/// Imports an arbitrary JSON object claiming to be a Flowise export.
///
/// The top-level `nodes` and `edges` fields must be arrays, otherwise the
/// whole import fails with a descriptive error and no partial result. Every
/// other gap — missing optional fields, unknown kind strings, dangling edge
/// references — is treated as normal input and silently defaulted.
pub fn import_flow(json: &str) -> Result<Workflow, ImportError> {
    let root: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ImportError::JsonParse(e.to_string()))?;

    let raw_nodes = require_array(&root, "nodes")?;
    let raw_edges = require_array(&root, "edges")?;

    let nodes = raw_nodes.iter().map(normalize_node).collect();
    let edges = raw_edges.iter().map(normalize_edge).collect();

    let viewport = root
        .get("viewport")
        .map(normalize_viewport)
        .unwrap_or_default();

    Ok(Workflow {
        name: string_field(&root, "name", "Imported Workflow"),
        kind: WorkflowKind::Chatflow,
        category: string_field(&root, "category", "Unknown"),
        nodes,
        edges,
        viewport,
    })
}

fn require_array<'a>(
    root: &'a serde_json::Value,
    field: &'static str,
) -> Result<&'a Vec<serde_json::Value>, ImportError> {
    root.get(field)
        .and_then(serde_json::Value::as_array)
        .ok_or(ImportError::FieldNotAnArray { field })
}

fn string_field(root: &serde_json::Value, field: &str, fallback: &str) -> String {
    root.get(field)
        .and_then(serde_json::Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

/// Normalizes one raw node object into a fully-populated `FlowNode`.
///
/// Every optional field comes out present (possibly empty); a node that does
/// not even deserialize is replaced by an all-default one rather than
/// rejected.
pub fn normalize_node(value: &serde_json::Value) -> FlowNode {
    let raw: RawFlowNode = serde_json::from_value(value.clone()).unwrap_or_default();

    let name = if raw.data.name.is_empty() {
        raw.data.label.unwrap_or_default()
    } else {
        raw.data.name
    };

    FlowNode {
        id: raw.id,
        name,
        node_kind: raw.node_type.unwrap_or_else(|| "unknown".to_string()),
        category: raw.data.category.unwrap_or_else(|| "Unknown".to_string()),
        position: raw.position,
        inputs: raw.data.inputs,
        outputs: raw.data.outputs,
        input_params: raw
            .data
            .input_params
            .into_iter()
            .map(|p| InputParam {
                name: p.name,
                label: p.label.unwrap_or_default(),
                param_type: p.param_type,
                optional: p.optional,
            })
            .collect(),
        agent_id: raw.data.agent_id,
    }
}

/// Normalizes one raw edge object, defaulting the edge type to `"default"`.
pub fn normalize_edge(value: &serde_json::Value) -> FlowEdge {
    let raw: RawFlowEdge = serde_json::from_value(value.clone()).unwrap_or_default();

    FlowEdge {
        source: raw.source,
        source_handle: raw.source_handle,
        target: raw.target,
        target_handle: raw.target_handle,
        edge_type: raw.edge_type.unwrap_or_else(|| "default".to_string()),
    }
}

/// Parses a viewport object, falling back to the identity viewport.
pub fn normalize_viewport(value: &serde_json::Value) -> Viewport {
    serde_json::from_value(value.clone()).unwrap_or_default()
}
