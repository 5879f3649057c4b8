use crate::Transport;
use async_trait::async_trait;
use board_editor_core::{BoardEditorError, BoardEditorResult};
use serde::Serialize;
use serde_json::Value;

pub mod board_commands;
pub mod swimlane_commands;

pub use board_commands::*;
pub use swimlane_commands::*;

/// One remote board operation: a request (or a short fixed sequence of them)
/// plus the checks that turn the response into a result.
#[async_trait]
pub trait BoardCommand: Send + Sync {
    type Output: Send;

    /// Run against the remote service. Nothing is retried.
    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<Self::Output>;

    /// Human-readable description, also used to label remote failures
    fn description(&self) -> String;
}

/// What commands need from the caller: a transport and the project in scope.
pub struct CommandContext<'a> {
    pub transport: &'a dyn Transport,
    pub project_key: &'a str,
}

pub(crate) fn to_body<T: Serialize>(payload: &T) -> BoardEditorResult<Value> {
    serde_json::to_value(payload).map_err(|e| BoardEditorError::Serialization(e.to_string()))
}
