//! Typed wrapper over the REST surface.

use serde::Deserialize;

use doable_core::todo::{NewTodo, Todo, UpdateTodo};
use doable_core::types::DbId;

/// Error from a client call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, malformed body).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Rejected locally before any request was made.
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Shape of the server's structured error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// One method per route; no caching, no retries.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl TodoApi {
    /// Point the client at an API base URL (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET /todos
    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self
            .client
            .get(format!("{}/todos", self.base_url))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /todos
    pub async fn create(&self, input: &NewTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(format!("{}/todos", self.base_url))
            .json(input)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// GET /todos/{id}
    pub async fn get(&self, id: DbId) -> Result<Todo, ClientError> {
        let response = self
            .client
            .get(format!("{}/todos/{id}", self.base_url))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// PUT /todos/{id}
    pub async fn update(&self, id: DbId, input: &UpdateTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .put(format!("{}/todos/{id}", self.base_url))
            .json(input)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// DELETE /todos/{id}
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/todos/{id}", self.base_url))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Convert error statuses into [`ClientError::Api`], decoding the
    /// structured `{error}` body when present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
