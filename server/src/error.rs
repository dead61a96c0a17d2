use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jobtech::FetchError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search error: {0}")]
    Fetch(#[from] FetchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Fetch(err) => {
                tracing::error!("Search error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("External service error: {}", err),
                )
            }
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
