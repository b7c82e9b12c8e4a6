use crate::analysis::{ComplexityBucket, FlowSummary};
use crate::workflow::{Workflow, WorkflowKind};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

mod rules;

pub use rules::{ComponentKind, classify_component};

/// The agent-configuration shape suggested for an imported workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    Template,
    Custom,
    Composed,
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentType::Template => write!(f, "template"),
            AgentType::Custom => write!(f, "custom"),
            AgentType::Composed => write!(f, "composed"),
        }
    }
}

/// The conversational shape suggested for an imported workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowShape {
    Chat,
    Agent,
    Multi,
}

impl fmt::Display for WorkflowShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowShape::Chat => write!(f, "chat"),
            WorkflowShape::Agent => write!(f, "agent"),
            WorkflowShape::Multi => write!(f, "multi"),
        }
    }
}

impl From<WorkflowShape> for WorkflowKind {
    fn from(shape: WorkflowShape) -> Self {
        match shape {
            WorkflowShape::Chat => WorkflowKind::Chatflow,
            WorkflowShape::Agent => WorkflowKind::Agentflow,
            WorkflowShape::Multi => WorkflowKind::Multiagent,
        }
    }
}

/// One node re-typed into the closed component set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMapping {
    pub node_id: String,
    pub node_name: String,
    pub kind: ComponentKind,
}

/// The derived suggestion of which internal agent configuration best fits an
/// imported workflow. Purely computed, never persisted, never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZanaiMapping {
    pub suggested_agent_type: AgentType,
    pub workflow_type: WorkflowShape,
    pub suggested_components: Vec<ComponentMapping>,
    pub required_config: Vec<String>,
    pub suggested_tools: Vec<String>,
}

impl ZanaiMapping {
    /// Derives a best-effort mapping from the analyzer's summary. There are
    /// no failure modes; a single-node workflow still maps.
    pub fn derive(workflow: &Workflow, summary: &FlowSummary) -> Self {
        let has_tools_pattern = summary.patterns.iter().any(|p| p == "with-tools");

        let suggested_agent_type = match summary.complexity {
            ComplexityBucket::Simple => AgentType::Template,
            ComplexityBucket::Medium => AgentType::Custom,
            ComplexityBucket::Complex if has_tools_pattern => AgentType::Custom,
            ComplexityBucket::Complex => AgentType::Composed,
        };

        let workflow_type = match summary.complexity {
            ComplexityBucket::Simple => WorkflowShape::Chat,
            ComplexityBucket::Medium => WorkflowShape::Agent,
            ComplexityBucket::Complex => WorkflowShape::Multi,
        };

        let suggested_components = workflow
            .nodes
            .iter()
            .map(|node| ComponentMapping {
                node_id: node.id.clone(),
                node_name: node.name.clone(),
                kind: classify_component(&node.category, &node.node_kind),
            })
            .collect();

        let required_config: Vec<String> = workflow
            .nodes
            .iter()
            .flat_map(|node| {
                node.input_params
                    .iter()
                    .filter(|param| !param.optional && param.param_type != "credential")
                    .map(move |param| format!("{}.{}", node.name, param.name))
            })
            .unique()
            .collect();

        let mut suggested_tools: Vec<String> = workflow
            .nodes
            .iter()
            .filter(|node| node.category.to_lowercase().contains("tool"))
            .map(|node| node.name.clone())
            .unique()
            .collect();
        if has_tools_pattern {
            suggested_tools.push("general-tool-set".to_string());
        }

        Self {
            suggested_agent_type,
            workflow_type,
            suggested_components,
            required_config,
            suggested_tools,
        }
    }
}
