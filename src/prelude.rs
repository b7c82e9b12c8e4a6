//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the crate so
//! callers can bring the whole pipeline into scope with one `use`.

// Import direction: normalization, analysis, classification
pub use crate::analysis::{Analyzer, ComplexityBucket, FlowSummary, weighted_score};
pub use crate::flowise::{import_flow, normalize_edge, normalize_node};
pub use crate::mapping::{
    AgentType, ComponentKind, ComponentMapping, WorkflowShape, ZanaiMapping, classify_component,
};

// Export direction: generated workflows and the Flowise emitter
pub use crate::emit::{
    FlowiseEmitter, FlowiseExport, GeneratedEdge, GeneratedNode, GeneratedNodeKind,
    GeneratedWorkflow, layout_depth,
};

// Canonical model and persistence
pub use crate::workflow::{
    FlowData, FlowEdge, FlowNode, InputParam, IntoWorkflow, Position, SCHEMA_VERSION, Viewport,
    Workflow, WorkflowKind, WorkflowRecord,
};

// Collaborator seams
pub use crate::client::{
    AgentDirectory, AgentRecord, ChatBackend, ClientState, DecisionClient, StaticAgentDirectory,
};

// Error types
pub use crate::error::{ClientError, ConversionError, EmitError, ImportError, PersistError};

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
