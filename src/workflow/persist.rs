use super::definition::{Viewport, Workflow, WorkflowKind};
use crate::error::PersistError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The schema version written into every new flow-data blob.
pub const SCHEMA_VERSION: u32 = 1;

/// The versioned envelope persisted as the opaque `flow_data` column.
///
/// Nodes and edges are kept as raw JSON values: the import direction stores
/// canonical `FlowNode` objects, the export direction stores Flowise-shaped
/// ones. Consumers re-normalize on demand; only the schema version is
/// validated at the boundary so legacy or malformed blobs fail fast instead
/// of propagating nulls through the pipeline.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowData {
    pub schema_version: u32,
    pub nodes: Vec<serde_json::Value>,
    pub edges: Vec<serde_json::Value>,
    #[serde(default)]
    pub viewport: Viewport,
}

impl FlowData {
    pub fn new(
        nodes: Vec<serde_json::Value>,
        edges: Vec<serde_json::Value>,
        viewport: Viewport,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            nodes,
            edges,
            viewport,
        }
    }

    /// Serializes the envelope to the opaque JSON string handed to the store.
    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(|e| PersistError::JsonParse(e.to_string()))
    }

    /// Deserializes a persisted blob, validating the schema version first.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| PersistError::JsonParse(e.to_string()))?;

        let version = value
            .get("schemaVersion")
            .and_then(serde_json::Value::as_u64)
            .ok_or(PersistError::MissingSchemaVersion)?;
        if version != SCHEMA_VERSION as u64 {
            return Err(PersistError::UnsupportedSchemaVersion {
                found: version as u32,
                expected: SCHEMA_VERSION,
            });
        }

        serde_json::from_value(value).map_err(|e| PersistError::JsonParse(e.to_string()))
    }

    /// Loads a persisted blob from a file.
    pub fn from_file(path: &str) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path).map_err(|e| PersistError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Saves the envelope to a file as JSON.
    pub fn save(&self, path: &str) -> Result<(), PersistError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| PersistError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl Workflow {
    /// Wraps the canonical graph into a persistable envelope.
    pub fn to_flow_data(&self) -> Result<FlowData, PersistError> {
        let nodes = self
            .nodes
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PersistError::JsonParse(e.to_string()))?;
        let edges = self
            .edges
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PersistError::JsonParse(e.to_string()))?;
        Ok(FlowData::new(nodes, edges, self.viewport))
    }
}

/// A workflow row ready for the relational store: the opaque blob plus the
/// scalar metadata columns extracted from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecord {
    pub name: String,
    pub kind: WorkflowKind,
    pub category: String,
    pub flow_data: String,
    pub complexity_score: u32,
    pub node_count: usize,
    pub edge_count: usize,
    pub max_depth: u32,
}
