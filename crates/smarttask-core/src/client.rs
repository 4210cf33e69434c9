//! HTTP client for the task scoring API.
//!
//! Two endpoints live under `{base}/api/tasks/`: `analyze/` scores every
//! submitted task and `suggest/` proposes what to work on next. Both take
//! and return `{"tasks": [...]}`.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::InvokeError;
use crate::task::TaskRecord;

/// Path of the task API below the server root.
pub const API_BASE_PATH: &str = "/api/tasks";

/// Scoring API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Analyze,
    Suggest,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Analyze => "analyze/",
            Endpoint::Suggest => "suggest/",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Analyze => "analyze",
            Endpoint::Suggest => "suggest",
        }
    }
}

#[derive(Serialize)]
struct TasksRequest<'a> {
    tasks: &'a [TaskRecord],
}

/// Client for the scoring API.
#[derive(Debug, Clone)]
pub struct TaskApiClient {
    base_url: String,
    http_client: Client,
}

impl TaskApiClient {
    /// Create a client for the server at `base_url`, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: &str) -> Result<Self, InvokeError> {
        Self::with_timeout(base_url, None)
    }

    /// Like [`TaskApiClient::new`], with an optional whole-request timeout.
    /// `None` leaves the transport default in place.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, InvokeError> {
        Url::parse(base_url).map_err(|source| InvokeError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(InvokeError::Network)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}/{}", self.base_url, API_BASE_PATH, endpoint.path())
    }

    /// Score and explain `tasks`.
    pub async fn analyze(&self, tasks: &[TaskRecord]) -> Result<Vec<TaskRecord>, InvokeError> {
        self.post_tasks(Endpoint::Analyze, tasks).await
    }

    /// Ask for suggested tasks. `tasks` may be empty.
    pub async fn suggest(&self, tasks: &[TaskRecord]) -> Result<Vec<TaskRecord>, InvokeError> {
        self.post_tasks(Endpoint::Suggest, tasks).await
    }

    /// POST `{"tasks": tasks}` to `endpoint` and return the response's tasks.
    pub async fn post_tasks(
        &self,
        endpoint: Endpoint,
        tasks: &[TaskRecord],
    ) -> Result<Vec<TaskRecord>, InvokeError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(endpoint = endpoint.as_str(), %url, count = tasks.len(), "posting tasks");

        let resp = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&TasksRequest { tasks })
            .send()
            .await
            .map_err(InvokeError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(endpoint = endpoint.as_str(), status = status.as_u16(), "scoring API returned an error status");
            return Err(InvokeError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(InvokeError::Network)?;
        let data: Value = serde_json::from_str(&body).map_err(InvokeError::ResponseDecode)?;
        let tasks = tasks_from_response(data);
        tracing::debug!(endpoint = endpoint.as_str(), count = tasks.len(), "received tasks");
        Ok(tasks)
    }
}

/// Pull the `tasks` array out of a response body. Anything other than an
/// array there reads as "no tasks".
pub fn tasks_from_response(data: Value) -> Vec<TaskRecord> {
    let tasks = match data {
        Value::Object(mut map) => map.remove("tasks"),
        _ => None,
    };
    match tasks {
        Some(Value::Array(items)) => items.into_iter().map(TaskRecord::from).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            tracing::warn!(found = %other, "response 'tasks' field is not an array; showing no tasks");
            Vec::new()
        }
    }
}
