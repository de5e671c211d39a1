use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

// Drops the request URL, which may carry an API key
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(err.without_url())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalApi(_) | AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to API clients
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::ExternalApi(msg)
            | AppError::Generation(msg) => msg.clone(),
            AppError::HttpClient(_) => self.to_string(),
        }
    }
}

/// Error response for list endpoints
///
/// The front end always reads the list field, so failures carry an empty list
/// under the same key a success would use.
#[derive(Debug)]
pub struct ListFailure {
    pub status: StatusCode,
    pub message: String,
    pub list_field: &'static str,
}

impl ListFailure {
    pub fn new(status: StatusCode, message: impl Into<String>, list_field: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            list_field,
        }
    }

    /// Status and client message taken from an [`AppError`]
    pub fn from_error(error: &AppError, list_field: &'static str) -> Self {
        Self::new(error.status(), error.public_message(), list_field)
    }
}

impl IntoResponse for ListFailure {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "error": self.message,
        });
        body[self.list_field] = json!([]);

        (self.status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
