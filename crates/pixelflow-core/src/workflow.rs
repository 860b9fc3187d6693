//! Workflow persistence over a key-value store.
//!
//! The editor saves whatever workflow shape it currently has as JSON under
//! a string key - no schema versioning, no migration. The backing store is
//! abstracted behind [`WorkflowStore`] so that native code and tests use an
//! in-memory map while the browser build persists to localStorage.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nodes::NodeKind;
use crate::Operation;

/// Key the editor saves its current workflow under.
pub const DEFAULT_WORKFLOW_KEY: &str = "workflow";

/// Errors from workflow persistence.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The workflow value could not be serialized or deserialized.
    #[error("Workflow serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store rejected the operation.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// A string key-value store with `put`/`get` semantics.
pub trait WorkflowStore {
    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), WorkflowError>;

    /// Fetch the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, WorkflowError>;
}

/// In-memory store used natively and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkflowStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), WorkflowError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, WorkflowError> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_workflow<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), WorkflowError>
where
    S: WorkflowStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value)?;
    store.put(key, &json)
}

/// Load and deserialize the value stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored under the key. A stored value
/// that does not parse as `T` is an error, not an absence.
pub fn load_workflow<S, T>(store: &S, key: &str) -> Result<Option<T>, WorkflowError>
where
    S: WorkflowStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// A node placed on the editor canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Caller-assigned identifier, unique within the workflow.
    pub id: String,
    /// Node kind, controlling rendering and behavior.
    pub kind: NodeKind,
    /// Display label.
    pub label: String,
    /// Image operation carried by process nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
}

/// The workflow document the editor saves and loads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workflow {
    /// Nodes on the canvas.
    pub nodes: Vec<WorkflowNode>,
    /// Connections between nodes.
    pub edges: Vec<WorkflowEdge>,
}
