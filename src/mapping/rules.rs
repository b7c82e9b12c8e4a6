use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of Zanai component types a graph node can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Input,
    Llm,
    Memory,
    Tool,
    Output,
    Reasoning,
    Analysis,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Input => write!(f, "input"),
            ComponentKind::Llm => write!(f, "llm"),
            ComponentKind::Memory => write!(f, "memory"),
            ComponentKind::Tool => write!(f, "tool"),
            ComponentKind::Output => write!(f, "output"),
            ComponentKind::Reasoning => write!(f, "reasoning"),
            ComponentKind::Analysis => write!(f, "analysis"),
        }
    }
}

/// Ordered (needle, component) rules evaluated first-match-wins against the
/// lowercased `"{category} {node_kind}"` haystack. The priority order is part
/// of the contract: input before llm/chat, chat before output, agent maps to
/// reasoning.
const COMPONENT_RULES: &[(&str, ComponentKind)] = &[
    ("input", ComponentKind::Input),
    ("llm", ComponentKind::Llm),
    ("chat", ComponentKind::Llm),
    ("memory", ComponentKind::Memory),
    ("tool", ComponentKind::Tool),
    ("output", ComponentKind::Output),
    ("agent", ComponentKind::Reasoning),
    ("analysis", ComponentKind::Analysis),
];

/// Maps one node onto exactly one component kind. Defaults to `Input` when
/// no rule matches.
pub fn classify_component(category: &str, node_kind: &str) -> ComponentKind {
    let haystack = format!("{} {}", category, node_kind).to_lowercase();
    COMPONENT_RULES
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|(_, kind)| *kind)
        .unwrap_or(ComponentKind::Input)
}
