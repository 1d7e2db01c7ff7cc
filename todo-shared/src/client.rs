//! Browser-side HTTP client for the todo API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::{self, ApiError, ErrorBody};
use crate::todo::{Todo, TodoDraft, TodoId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Server error: status {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Calls the todo endpoints on the origin that served the page.
#[derive(Debug, Clone, Default)]
pub struct TodoClient {
    base: String,
}

impl TodoClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = send(Request::get(&self.url(api::TODOS_PATH))).await?;
        json(response).await
    }

    pub async fn get(&self, id: TodoId) -> Result<Todo, ClientError> {
        let response = send(Request::get(&self.url(&api::todo_path(id)))).await?;
        json(response).await
    }

    pub async fn post_todo(&self, draft: &TodoDraft) -> Result<Todo, ClientError> {
        let request = Request::post(&self.url(api::TODOS_PATH))
            .json(draft)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        json(check(response).await?).await
    }

    pub async fn toggle(&self, id: TodoId) -> Result<Todo, ClientError> {
        let response = send(Request::put(&self.url(&api::toggle_path(id)))).await?;
        json(response).await
    }

    pub async fn delete(&self, id: TodoId) -> Result<(), ClientError> {
        send(Request::delete(&self.url(&api::todo_path(id)))).await?;
        Ok(())
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;
    check(response).await
}

/// Turn a non-2xx response into the API error it carries, if any.
async fn check(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(ClientError::Api(body.error)),
        Err(_) => {
            log::warn!("todo API answered {status} without an error body");
            Err(ClientError::Status { status })
        }
    }
}

async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response
        .json()
        .await
        .map_err(|e| ClientError::Deserialization(e.to_string()))
}
