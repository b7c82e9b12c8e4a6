//! Tests for the Flowise import normalizer.
mod common;
use common::*;
use zanai_flow::prelude::*;

#[test]
fn test_import_simple_flow() {
    let workflow = import_flow(simple_chat_json()).expect("import should succeed");

    assert_eq!(workflow.node_count(), 2);
    assert_eq!(workflow.edge_count(), 1);

    let llm = &workflow.nodes[1];
    assert_eq!(llm.id, "node_1");
    assert_eq!(llm.name, "chatOpenAI");
    assert_eq!(llm.node_kind, "llmNode");
    assert_eq!(llm.category, "Chat Models");
    assert_eq!(llm.position.y, 100.0);
    assert_eq!(llm.input_params.len(), 3);

    let edge = &workflow.edges[0];
    assert_eq!(edge.source, "node_0");
    assert_eq!(edge.target, "node_1");
    assert_eq!(edge.edge_type, "default");
}

#[test]
fn test_import_rejects_missing_nodes() {
    let result = import_flow(r#"{"edges": []}"#);
    match result {
        Err(ImportError::FieldNotAnArray { field }) => assert_eq!(field, "nodes"),
        other => panic!("Expected FieldNotAnArray, got {:?}", other),
    }
}

#[test]
fn test_import_rejects_non_array_edges() {
    let result = import_flow(r#"{"nodes": [], "edges": {"count": 0}}"#);
    match result {
        Err(ImportError::FieldNotAnArray { field }) => assert_eq!(field, "edges"),
        other => panic!("Expected FieldNotAnArray, got {:?}", other),
    }
}

#[test]
fn test_import_rejects_invalid_json() {
    let result = import_flow("not json at all");
    assert!(matches!(result, Err(ImportError::JsonParse(_))));
}

#[test]
fn test_import_defaults_optional_fields() {
    let json = r#"{
        "nodes": [{"id": "n1", "type": "customNode", "position": {"x": 5, "y": 7},
                   "data": {"id": "n1", "name": "mystery"}}],
        "edges": [{"source": "n1", "target": "ghost"}]
    }"#;

    let workflow = import_flow(json).expect("import should succeed");
    let node = &workflow.nodes[0];
    assert_eq!(node.category, "Unknown");
    assert!(node.inputs.is_empty());
    assert!(node.outputs.is_empty());
    assert!(node.input_params.is_empty());
    assert_eq!(node.agent_id, None);

    // Dangling edges are normal input, not an error.
    assert_eq!(workflow.edges[0].target, "ghost");
    assert_eq!(workflow.edges[0].edge_type, "default");
    assert_eq!(workflow.viewport, Viewport::default());
}

#[test]
fn test_import_tolerates_malformed_node_entries() {
    let json = r#"{
        "nodes": [42, {"id": "ok", "type": "llmNode", "position": {"x": 0, "y": 0},
                       "data": {"id": "ok", "name": "fine"}}],
        "edges": []
    }"#;

    let workflow = import_flow(json).expect("import should succeed");
    assert_eq!(workflow.node_count(), 2);
    // The malformed entry collapses to an all-default node.
    assert_eq!(workflow.nodes[0].id, "");
    assert_eq!(workflow.nodes[0].category, "Unknown");
    assert_eq!(workflow.nodes[1].id, "ok");
}

#[test]
fn test_normalization_lossless_for_required_fields() {
    let workflow = import_flow(simple_chat_json()).expect("import should succeed");

    for node in &workflow.nodes {
        let value = serde_json::to_value(node).expect("node should serialize");
        assert_eq!(value["id"], serde_json::json!(node.id));
        assert_eq!(value["nodeKind"], serde_json::json!(node.node_kind));
        assert_eq!(value["category"], serde_json::json!(node.category));
        assert_eq!(value["position"]["x"], serde_json::json!(node.position.x));
        assert_eq!(value["position"]["y"], serde_json::json!(node.position.y));
    }
}

#[test]
fn test_node_name_falls_back_to_label() {
    let json = r#"{
        "nodes": [{"id": "n1", "type": "llmNode", "position": {"x": 0, "y": 0},
                   "data": {"id": "n1", "label": "Labeled Only"}}],
        "edges": []
    }"#;

    let workflow = import_flow(json).expect("import should succeed");
    assert_eq!(workflow.nodes[0].name, "Labeled Only");
}
