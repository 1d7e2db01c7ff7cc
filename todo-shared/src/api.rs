//! REST contract between the frontend and the server.
//!
//! | method   | path                      | body        | response          |
//! |----------|---------------------------|-------------|-------------------|
//! | `GET`    | `/api/todo`               |             | `Vec<Todo>`       |
//! | `POST`   | `/api/todo`               | `TodoDraft` | `201` + `Todo`    |
//! | `GET`    | `/api/todo/{id}`          |             | `Todo`            |
//! | `PUT`    | `/api/todo/{id}/toggle`   |             | `Todo`            |
//! | `DELETE` | `/api/todo/{id}`          |             | `204`             |
//!
//! Failures carry an [`ErrorBody`].

use serde::{Deserialize, Serialize};

use crate::todo::TodoId;

pub const TODOS_PATH: &str = "/api/todo";

pub fn todo_path(id: TodoId) -> String {
    format!("{TODOS_PATH}/{id}")
}

pub fn toggle_path(id: TodoId) -> String {
    format!("{TODOS_PATH}/{id}/toggle")
}

/// Error type shared across the server/client boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ApiError {
    #[error("todo {id} not found")]
    NotFound { id: TodoId },

    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// JSON body of every failed API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ApiError,
}
