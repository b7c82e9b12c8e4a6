use crate::workflow::Workflow;
use ahash::AHashMap;
use serde::Serialize;

pub mod complexity;
mod patterns;

pub use complexity::{ComplexityBucket, weighted_score};

use patterns::PatternContext;

/// Read-only aggregate statistics over one normalized workflow graph.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSummary {
    pub node_count: usize,
    pub edge_count: usize,
    /// Node occurrences per `node_kind`.
    pub node_kinds: AHashMap<String, usize>,
    /// Node occurrences per `category`.
    pub categories: AHashMap<String, usize>,
    /// Edge occurrences per edge type (`"default"` when absent).
    pub edge_types: AHashMap<String, usize>,
    pub complexity: ComplexityBucket,
    pub patterns: Vec<String>,
    /// Weighted score for persisted metadata, independent of `complexity`.
    pub complexity_score: u32,
}

/// Computes aggregate statistics over a node/edge set in one pass.
pub struct Analyzer<'a> {
    workflow: &'a Workflow,
}

impl<'a> Analyzer<'a> {
    pub fn new(workflow: &'a Workflow) -> Self {
        Self { workflow }
    }

    /// Always succeeds given normalized input; the workflow is not mutated.
    /// Re-running on the same input yields the identical summary.
    pub fn summarize(&self) -> FlowSummary {
        let mut node_kinds: AHashMap<String, usize> = AHashMap::new();
        let mut categories: AHashMap<String, usize> = AHashMap::new();
        let mut edge_types: AHashMap<String, usize> = AHashMap::new();
        let mut llm_like_nodes = 0usize;

        for node in &self.workflow.nodes {
            *node_kinds.entry(node.node_kind.clone()).or_insert(0) += 1;
            *categories.entry(node.category.clone()).or_insert(0) += 1;
            if complexity::is_llm_like(&node.node_kind, &node.category) {
                llm_like_nodes += 1;
            }
        }

        for edge in &self.workflow.edges {
            let edge_type = if edge.edge_type.is_empty() {
                "default"
            } else {
                edge.edge_type.as_str()
            };
            *edge_types.entry(edge_type.to_string()).or_insert(0) += 1;
        }

        let node_count = self.workflow.node_count();
        let edge_count = self.workflow.edge_count();

        let category_names: Vec<&str> = categories.keys().map(String::as_str).collect();
        let bucket =
            ComplexityBucket::classify(node_count, edge_count, &category_names, llm_like_nodes);

        let ctx = PatternContext {
            node_kinds: &node_kinds,
            categories: &categories,
            node_count,
            edge_count,
        };
        let patterns = patterns::detect(&ctx);

        let complexity_score = weighted_score(
            self.workflow.nodes.iter().map(|n| n.node_kind.as_str()),
            edge_count,
        );

        FlowSummary {
            node_count,
            edge_count,
            node_kinds,
            categories,
            edge_types,
            complexity: bucket,
            patterns,
            complexity_score,
        }
    }
}
