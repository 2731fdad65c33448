use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgtextError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Invalid object address: {0}")]
    InvalidAddress(#[from] url::ParseError),

    #[error("Object address has no bucket host: {0}")]
    MissingBucket(String),

    #[error("Failed to encode response body: {0}")]
    Encode(serde_json::Error),

    #[error("Response body is not a text payload: {0}")]
    Decode(serde_json::Error),

    #[error("Textract error: {0}")]
    Textract(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failed invocations surface the way API Gateway reports a crashed Lambda:
/// no custom body, just the gateway's generic message.
impl IntoResponse for ImgtextError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Invocation failed");

        let body = Json(json!({
            "message": "Internal server error"
        }));

        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ImgtextError>;
