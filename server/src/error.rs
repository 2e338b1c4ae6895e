use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("todo not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    /// Malformed or mistyped request body; keeps axum's status (400/415/422).
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// Path segment that does not parse, such as a non-integer id.
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::InvalidBody(rejection) => (rejection.status(), self.to_string()),
            ServerError::InvalidPath(rejection) => (rejection.status(), self.to_string()),
            ServerError::Database(e) => {
                tracing::error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
