use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_shared::ApiError;
use todo_shared::api::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Api(ApiError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Api(ApiError::Validation { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Extractor rejections answer in the same shape as handler errors.
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {rejection}");
        ApiError::validation("body", rejection.body_text()).into()
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected todo id: {rejection}");
        ApiError::validation("id", rejection.body_text()).into()
    }
}

/// Failed API calls answer with an [`ErrorBody`].
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ServerError::Api(error) => error,
            other => {
                tracing::error!("{other}");
                ApiError::Internal(other.to_string())
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
