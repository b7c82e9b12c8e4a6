use crate::client::ClientState;
use thiserror::Error;

/// Errors that can occur while importing an external Flowise export.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParse(String),

    #[error("Workflow import requires '{field}' to be an array at the top level")]
    FieldNotAnArray { field: &'static str },
}

/// Errors that can occur when converting a custom user format into a `Workflow`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while reading or writing the persisted flow-data blob.
#[derive(Error, Debug, Clone)]
pub enum PersistError {
    #[error("Invalid flow data JSON: {0}")]
    JsonParse(String),

    #[error("Persisted flow data is missing its 'schemaVersion' field")]
    MissingSchemaVersion,

    #[error("Persisted flow data has unsupported schema version {found} (expected {expected})")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    #[error("Could not access flow data at '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur while emitting a generated workflow into the Flowise shape.
#[derive(Error, Debug, Clone)]
pub enum EmitError {
    #[error("Agent lookup failed for node '{node_id}': {source}")]
    AgentLookup {
        node_id: String,
        source: ClientError,
    },

    #[error("Failed to serialize emitted workflow: {0}")]
    Serialize(String),
}

/// Errors raised by collaborator clients (agent directory, chat completion).
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Client is not ready (state: {state})")]
    NotReady { state: ClientState },

    #[error("Client initialization failed: {0}")]
    Initialization(String),

    #[error("Collaborator call failed: {0}")]
    Transport(String),
}
