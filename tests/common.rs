//! Common test utilities for building workflows and raw Flowise JSON.
use zanai_flow::prelude::*;

/// Creates a normalized node with the given identity; everything else defaults.
#[allow(dead_code)]
pub fn make_node(id: &str, name: &str, kind: &str, category: &str) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        name: name.to_string(),
        node_kind: kind.to_string(),
        category: category.to_string(),
        ..FlowNode::default()
    }
}

#[allow(dead_code)]
pub fn make_edge(source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        source: source.to_string(),
        target: target.to_string(),
        ..FlowEdge::default()
    }
}

#[allow(dead_code)]
pub fn make_workflow(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Workflow {
    Workflow {
        name: "test workflow".to_string(),
        category: "Test".to_string(),
        nodes,
        edges,
        ..Workflow::default()
    }
}

/// A minimal, valid Flowise export: chat input feeding a chat model.
#[allow(dead_code)]
pub fn simple_chat_json() -> &'static str {
    r#"{
        "nodes": [
            {
                "id": "node_0",
                "type": "chatInput",
                "position": {"x": 0, "y": 0},
                "data": {"id": "node_0", "name": "chatInput", "category": "Input"}
            },
            {
                "id": "node_1",
                "type": "llmNode",
                "position": {"x": 100, "y": 100},
                "data": {
                    "id": "node_1",
                    "name": "chatOpenAI",
                    "category": "Chat Models",
                    "inputParams": [
                        {"name": "modelName", "type": "options", "optional": false},
                        {"name": "openAIApiKey", "type": "credential", "optional": false},
                        {"name": "temperature", "type": "number", "optional": true}
                    ]
                }
            }
        ],
        "edges": [
            {
                "source": "node_0",
                "sourceHandle": "node_0-output-output",
                "target": "node_1",
                "targetHandle": "node_1-input-prompt"
            }
        ],
        "viewport": {"x": 0, "y": 0, "zoom": 1}
    }"#
}

#[allow(dead_code)]
pub fn make_generated_node(id: &str, name: &str, kind: GeneratedNodeKind) -> GeneratedNode {
    GeneratedNode {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        agent_id: None,
    }
}

#[allow(dead_code)]
pub fn make_generated_edge(source: &str, target: &str) -> GeneratedEdge {
    GeneratedEdge {
        source: source.to_string(),
        target: target.to_string(),
    }
}

#[allow(dead_code)]
pub fn make_generated(nodes: Vec<GeneratedNode>, edges: Vec<GeneratedEdge>) -> GeneratedWorkflow {
    GeneratedWorkflow {
        name: "generated workflow".to_string(),
        description: "built by tests".to_string(),
        nodes,
        edges,
        agents: vec![],
        complexity: None,
        estimated_time: None,
    }
}

/// A three-step generated workflow: Start -> LLM -> End.
#[allow(dead_code)]
pub fn simple_generated() -> GeneratedWorkflow {
    make_generated(
        vec![
            make_generated_node("node_0", "Start", GeneratedNodeKind::Start),
            make_generated_node("node_1", "Answer", GeneratedNodeKind::Llm),
            make_generated_node("node_2", "End", GeneratedNodeKind::End),
        ],
        vec![
            make_generated_edge("node_0", "node_1"),
            make_generated_edge("node_1", "node_2"),
        ],
    )
}
