use crate::Endpoint;
use async_trait::async_trait;
use board_editor_core::{BoardEditorError, BoardEditorResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status and raw body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into a `RemoteOperation` error for `operation`.
    pub fn error_for_status(self, operation: impl FnOnce() -> String) -> BoardEditorResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(BoardEditorError::remote(operation(), self.status, self.body))
        }
    }

    /// Decodes the body. Failures are reported as `Decode`, never as a remote error.
    pub fn json<T: DeserializeOwned>(&self, context: &str) -> BoardEditorResult<T> {
        serde_json::from_str(&self.body).map_err(|e| BoardEditorError::Decode {
            context: context.to_string(),
            body: self.body.clone(),
            message: e.to_string(),
        })
    }
}

/// Authenticated request/response capability against the remote service.
///
/// Implementations report network failures as errors but hand back every
/// HTTP response, whatever its status; callers decide what a failure means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, endpoint: &Endpoint) -> BoardEditorResult<ApiResponse>;

    async fn put(&self, endpoint: &Endpoint, body: &Value) -> BoardEditorResult<ApiResponse>;

    async fn post(&self, endpoint: &Endpoint, body: &Value) -> BoardEditorResult<ApiResponse>;

    async fn delete(&self, endpoint: &Endpoint) -> BoardEditorResult<ApiResponse>;
}
