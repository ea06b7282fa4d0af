//! Error types for Libros server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

static MISSING_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"missing field `([^`]+)`").expect("valid regex"));
static FIELD_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w.\[\]]+): ").expect("valid regex"));
static REJECTION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Failed to (?:deserialize|parse) [^:]*: ").expect("valid regex"));

/// Application error codes exposed in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
}

/// A single field-level problem found in a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Offending field, or `body` when the body as a whole is unusable
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {}", describe(.0))]
    Validation(Vec<FieldError>),

    #[error("Internal server error: {0}")]
    Internal(String),
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, code, message, details) = match self {
            AppError::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::BadValue,
                message,
                details,
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            details,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let (field, message) = split_rejection(&rejection.body_text());
        AppError::Validation(vec![FieldError::new(field, message)])
    }
}

/// Split an extractor rejection text into the offending field and the
/// deserializer message without axum's prefix or the field path
fn split_rejection(text: &str) -> (String, String) {
    let detail = REJECTION_PREFIX.replace(text, "");

    if let Some(caps) = MISSING_FIELD.captures(&detail) {
        return (caps[1].to_string(), detail.to_string());
    }

    match FIELD_PATH.captures(&detail) {
        Some(caps) => {
            let prefix_len = caps[0].len();
            (caps[1].to_string(), detail[prefix_len..].to_string())
        }
        None => ("body".to_string(), detail.to_string()),
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
