use crate::error::ClientError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An internal agent record as returned by the agent directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Key-value agent lookup by id. Implemented by the surrounding application
/// against its store; a `None` result means the id is unknown and is treated
/// as normal input by the emitter.
pub trait AgentDirectory {
    fn find(&self, agent_id: &str) -> Result<Option<AgentRecord>, ClientError>;
}

/// An in-memory directory, mainly useful for tests and the CLI tools.
#[derive(Debug, Default)]
pub struct StaticAgentDirectory {
    agents: AHashMap<String, AgentRecord>,
}

impl StaticAgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agent(mut self, agent: AgentRecord) -> Self {
        self.agents.insert(agent.id.clone(), agent);
        self
    }
}

impl AgentDirectory for StaticAgentDirectory {
    fn find(&self, agent_id: &str) -> Result<Option<AgentRecord>, ClientError> {
        Ok(self.agents.get(agent_id).cloned())
    }
}

/// Initialization state of a collaborator client. Explicit rather than a
/// boolean flag so callers can distinguish "never connected" from "tried and
/// failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Uninitialized,
    Ready,
    Failed,
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientState::Uninitialized => write!(f, "uninitialized"),
            ClientState::Ready => write!(f, "ready"),
            ClientState::Failed => write!(f, "failed"),
        }
    }
}

/// The transport behind the LLM decision client. Implemented elsewhere
/// (HTTP SDK, test double); this crate only defines the seam.
pub trait ChatBackend {
    fn connect(&mut self) -> Result<(), ClientError>;
    fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ClientError>;
}

/// An LLM chat-completion client with an explicit lifecycle.
///
/// Constructed once per process or per request and passed by reference to
/// callers. `initialize` must be called before `complete`; a client that is
/// not `Ready` returns a typed error instead of panicking or silently
/// re-connecting.
pub struct DecisionClient<B: ChatBackend> {
    backend: B,
    state: ClientState,
}

impl<B: ChatBackend> DecisionClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ClientState::Uninitialized,
        }
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    /// Transitions `Uninitialized -> Ready` or `Uninitialized -> Failed`.
    /// Initializing an already-`Ready` client is a no-op.
    pub fn initialize(&mut self) -> Result<(), ClientError> {
        if self.state == ClientState::Ready {
            return Ok(());
        }
        match self.backend.connect() {
            Ok(()) => {
                self.state = ClientState::Ready;
                Ok(())
            }
            Err(e) => {
                self.state = ClientState::Failed;
                Err(ClientError::Initialization(e.to_string()))
            }
        }
    }

    /// Runs one chat completion. Fails with `NotReady` unless the client has
    /// been successfully initialized.
    pub fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ClientError> {
        if self.state != ClientState::Ready {
            return Err(ClientError::NotReady { state: self.state });
        }
        self.backend.complete(system_prompt, user_prompt)
    }
}
