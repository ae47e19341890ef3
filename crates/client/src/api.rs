//! REST client for the taskdeck HTTP API.
//!
//! Wraps the todo endpoints (liveness, list, get, create, update, delete,
//! stats) using [`reqwest`]. One method per endpoint; error bodies are
//! parsed for the server's structured message.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use taskdeck_core::todo::Priority;
use taskdeck_core::types::DbId;
use taskdeck_db::models::todo::{CreateTodo, Todo, TodoStats, UpdateTodo};

use crate::error::ClientError;

/// HTTP client for a single taskdeck API server.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

/// Payload returned by the liveness endpoint.
#[derive(Debug, Deserialize)]
pub struct Liveness {
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
}

/// Wire shape of server error bodies: `{ "error": ..., "code": ... }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Optional filters forwarded as query parameters to `GET /todos`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl TodoApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// GET / -- liveness probe.
    pub async fn ping(&self) -> Result<Liveness, ClientError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// GET /todos -- list todos, optionally filtered and paginated.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Todo>, ClientError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(completed) = query.completed {
            params.push(("completed", completed.to_string()));
        }
        if let Some(priority) = query.priority {
            params.push(("priority", priority.to_string()));
        }
        if let Some(skip) = query.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/todos", self.base_url))
            .query(&params)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// GET /todos/{id}
    pub async fn get(&self, id: DbId) -> Result<Todo, ClientError> {
        let response = self
            .client
            .get(format!("{}/todos/{id}", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// POST /todos
    pub async fn create(&self, input: &CreateTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(format!("{}/todos", self.base_url))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// PUT /todos/{id} -- send only the fields to change.
    pub async fn update(&self, id: DbId, input: &UpdateTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .put(format!("{}/todos/{id}", self.base_url))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// DELETE /todos/{id}
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/todos/{id}", self.base_url))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// GET /todos/stats/summary
    pub async fn stats(&self) -> Result<TodoStats, ClientError> {
        let response = self
            .client
            .get(format!("{}/todos/stats/summary", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success; on failure, pulls the server's structured
    /// `error` message when present, falling back to the raw body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Check the status and deserialize the JSON body.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Check the status and discard the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await.map(|_| ())
    }
}
