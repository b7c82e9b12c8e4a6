use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse workflow complexity, assigned by a fixed threshold rule over
/// node/edge counts and category presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityBucket {
    Simple,
    Medium,
    Complex,
}

impl ComplexityBucket {
    /// Applies the threshold table in its fixed order.
    ///
    /// The thresholds are a heuristic rule table, not a derived metric; the
    /// exact numbers and their evaluation order are part of the contract.
    pub fn classify(
        node_count: usize,
        edge_count: usize,
        categories: &[&str],
        llm_like_nodes: usize,
    ) -> Self {
        let has_tool_or_agent = categories.iter().any(|c| {
            let c = c.to_lowercase();
            c.contains("tool") || c.contains("agent")
        });
        let has_memory = categories
            .iter()
            .any(|c| c.to_lowercase().contains("memory"));

        if node_count <= 3 && edge_count <= 2 && !has_tool_or_agent && !has_memory {
            return ComplexityBucket::Simple;
        }
        if node_count <= 6 && edge_count <= 5 && has_tool_or_agent && llm_like_nodes <= 1 {
            return ComplexityBucket::Medium;
        }
        ComplexityBucket::Complex
    }
}

impl fmt::Display for ComplexityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityBucket::Simple => write!(f, "simple"),
            ComplexityBucket::Medium => write!(f, "medium"),
            ComplexityBucket::Complex => write!(f, "complex"),
        }
    }
}

/// A node counts toward the "multiple LLM nodes" guard of the medium bucket
/// when its kind or category marks it as a chat-model wrapper.
pub(crate) fn is_llm_like(node_kind: &str, category: &str) -> bool {
    let kind = node_kind.to_lowercase();
    let category = category.to_lowercase();
    kind.contains("llm") || category.contains("llm") || category.contains("chat model")
}

fn kind_bonus(node_kind: &str) -> u32 {
    let kind = node_kind.to_lowercase();
    if kind.contains("condition") {
        20
    } else if kind.contains("parallel") {
        25
    } else if kind.contains("custom") {
        15
    } else {
        5
    }
}

/// Weighted complexity score used for persisted metadata: +10 per node,
/// +5 per edge, plus a per-kind bonus, capped at 100.
///
/// Unrelated to [`ComplexityBucket`]; the two can disagree for the same
/// workflow and both are kept as-is.
pub fn weighted_score<'a, I>(node_kinds: I, edge_count: usize) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let mut score: u32 = 0;
    for kind in node_kinds {
        score = score.saturating_add(10 + kind_bonus(kind));
    }
    score = score.saturating_add((edge_count as u32).saturating_mul(5));
    score.min(100)
}
