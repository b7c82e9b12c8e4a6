//! Tests for the classification engine and component rule table.
mod common;
use common::*;
use zanai_flow::prelude::*;

#[test]
fn test_component_rules_first_match_wins() {
    assert_eq!(classify_component("Input", "chatInput"), ComponentKind::Input);
    assert_eq!(classify_component("Chat Models", "llmNode"), ComponentKind::Llm);
    assert_eq!(classify_component("Memory", "memoryNode"), ComponentKind::Memory);
    assert_eq!(classify_component("Tools", "toolNode"), ComponentKind::Tool);
    assert_eq!(classify_component("Output", "endNode"), ComponentKind::Output);
    assert_eq!(classify_component("Agents", "executor"), ComponentKind::Reasoning);
    assert_eq!(classify_component("Analysis", "scorer"), ComponentKind::Analysis);
}

#[test]
fn test_component_rules_default_and_priority_quirks() {
    // Nothing matches: the default is input.
    assert_eq!(classify_component("Misc", "blob"), ComponentKind::Input);

    // The chat rule outranks the output rule, so a chatOutput node lands on
    // llm. The rule order is part of the contract.
    assert_eq!(classify_component("Output", "chatOutput"), ComponentKind::Llm);

    // The input rule outranks everything, including agents.
    assert_eq!(classify_component("Agents", "agentInput"), ComponentKind::Input);
}

#[test]
fn test_agent_type_follows_bucket() {
    let simple = make_workflow(
        vec![
            make_node("a", "chatInput", "chatInput", "Input"),
            make_node("b", "chatOutput", "chatOutput", "Output"),
        ],
        vec![make_edge("a", "b")],
    );
    let summary = Analyzer::new(&simple).summarize();
    assert_eq!(summary.complexity, ComplexityBucket::Simple);

    let mapping = ZanaiMapping::derive(&simple, &summary);
    assert_eq!(mapping.suggested_agent_type, AgentType::Template);
    assert_eq!(mapping.workflow_type, WorkflowShape::Chat);
}

#[test]
fn test_medium_workflow_suggests_custom_agent() {
    let medium = make_workflow(
        vec![
            make_node("a", "chatInput", "chatInput", "Input"),
            make_node("b", "chatOpenAI", "llmNode", "Chat Models"),
            make_node("c", "calculator", "toolNode", "Tools"),
            make_node("d", "chatOutput", "chatOutput", "Output"),
        ],
        vec![make_edge("a", "b"), make_edge("b", "c"), make_edge("c", "d")],
    );
    let summary = Analyzer::new(&medium).summarize();
    assert_eq!(summary.complexity, ComplexityBucket::Medium);

    let mapping = ZanaiMapping::derive(&medium, &summary);
    assert_eq!(mapping.suggested_agent_type, AgentType::Custom);
    assert_eq!(mapping.workflow_type, WorkflowShape::Agent);
}

#[test]
fn test_complex_workflow_with_tools_still_suggests_custom() {
    let nodes: Vec<FlowNode> = (0..8)
        .map(|i| {
            if i % 2 == 0 {
                make_node(&format!("n{}", i), "chatOpenAI", "llmNode", "Chat Models")
            } else {
                make_node(&format!("n{}", i), "serpAPI", "toolNode", "Tools")
            }
        })
        .collect();
    let workflow = make_workflow(nodes, vec![]);
    let summary = Analyzer::new(&workflow).summarize();
    assert_eq!(summary.complexity, ComplexityBucket::Complex);
    assert!(summary.patterns.iter().any(|p| p == "with-tools"));

    let mapping = ZanaiMapping::derive(&workflow, &summary);
    assert_eq!(mapping.suggested_agent_type, AgentType::Custom);
    assert_eq!(mapping.workflow_type, WorkflowShape::Multi);
}

#[test]
fn test_complex_workflow_without_tools_suggests_composed() {
    let nodes: Vec<FlowNode> = (0..8)
        .map(|i| make_node(&format!("n{}", i), "chatOpenAI", "llmNode", "Chat Models"))
        .collect();
    let workflow = make_workflow(nodes, vec![]);
    let summary = Analyzer::new(&workflow).summarize();
    assert_eq!(summary.complexity, ComplexityBucket::Complex);

    let mapping = ZanaiMapping::derive(&workflow, &summary);
    assert_eq!(mapping.suggested_agent_type, AgentType::Composed);
}

#[test]
fn test_workflow_shape_maps_onto_persisted_kind() {
    assert_eq!(WorkflowKind::from(WorkflowShape::Chat), WorkflowKind::Chatflow);
    assert_eq!(WorkflowKind::from(WorkflowShape::Agent), WorkflowKind::Agentflow);
    assert_eq!(WorkflowKind::from(WorkflowShape::Multi), WorkflowKind::Multiagent);
}

#[test]
fn test_required_config_skips_optional_and_credential_params() {
    let workflow = import_flow(simple_chat_json()).expect("import should succeed");
    let summary = Analyzer::new(&workflow).summarize();
    let mapping = ZanaiMapping::derive(&workflow, &summary);

    // Of the three declared params, only the required non-credential one
    // survives: modelName. openAIApiKey is a credential, temperature is
    // optional.
    assert_eq!(mapping.required_config, vec!["chatOpenAI.modelName"]);
}

#[test]
fn test_required_config_deduplicates() {
    let mut node_a = make_node("a", "chatOpenAI", "llmNode", "Chat Models");
    node_a.input_params.push(InputParam {
        name: "modelName".to_string(),
        label: String::new(),
        param_type: "options".to_string(),
        optional: false,
    });
    let mut node_b = node_a.clone();
    node_b.id = "b".to_string();

    let workflow = make_workflow(vec![node_a, node_b], vec![]);
    let summary = Analyzer::new(&workflow).summarize();
    let mapping = ZanaiMapping::derive(&workflow, &summary);

    assert_eq!(mapping.required_config, vec!["chatOpenAI.modelName"]);
}

#[test]
fn test_suggested_tools_includes_general_set() {
    let workflow = make_workflow(
        vec![
            make_node("a", "calculator", "toolNode", "Tools"),
            make_node("b", "serpAPI", "toolNode", "Tools"),
            make_node("c", "calculator", "toolNode", "Tools"),
        ],
        vec![],
    );
    let summary = Analyzer::new(&workflow).summarize();
    let mapping = ZanaiMapping::derive(&workflow, &summary);

    assert_eq!(
        mapping.suggested_tools,
        vec!["calculator", "serpAPI", "general-tool-set"]
    );
}

#[test]
fn test_single_node_workflow_still_maps() {
    let workflow = make_workflow(vec![make_node("only", "x", "llmNode", "Chat Models")], vec![]);
    let summary = Analyzer::new(&workflow).summarize();
    let mapping = ZanaiMapping::derive(&workflow, &summary);

    assert_eq!(mapping.suggested_components.len(), 1);
    assert_eq!(mapping.suggested_components[0].kind, ComponentKind::Llm);
    assert!(mapping.required_config.is_empty());
    assert!(mapping.suggested_tools.is_empty());
}
