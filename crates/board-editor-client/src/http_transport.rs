use crate::{ApiResponse, Endpoint, Transport};
use async_trait::async_trait;
use board_editor_core::{BoardEditorError, BoardEditorResult, EditorConfig};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// [`Transport`] over HTTPS with Basic authentication.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    username: String,
    password: String,
}

impl HttpTransport {
    pub fn new(config: &EditorConfig) -> BoardEditorResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("board-editor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BoardEditorError::Connection(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&Value>,
    ) -> BoardEditorResult<ApiResponse> {
        let url = endpoint.resolve(&self.base_url);
        debug!(%method, %url, "Sending request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BoardEditorError::Connection(format!("{method} {endpoint}: {e}")))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            BoardEditorError::Connection(format!("{method} {endpoint}: reading body: {e}"))
        })?;
        debug!(%method, %endpoint, status, bytes = body.len(), "Received response");

        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &Endpoint) -> BoardEditorResult<ApiResponse> {
        self.send(Method::GET, endpoint, None).await
    }

    async fn put(&self, endpoint: &Endpoint, body: &Value) -> BoardEditorResult<ApiResponse> {
        self.send(Method::PUT, endpoint, Some(body)).await
    }

    async fn post(&self, endpoint: &Endpoint, body: &Value) -> BoardEditorResult<ApiResponse> {
        self.send(Method::POST, endpoint, Some(body)).await
    }

    async fn delete(&self, endpoint: &Endpoint) -> BoardEditorResult<ApiResponse> {
        self.send(Method::DELETE, endpoint, None).await
    }
}
