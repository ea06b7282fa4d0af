//! API handlers for Libros REST endpoints

pub mod books;
pub mod cors;
pub mod health;
pub mod openapi;

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that turns malformed payloads into a field-level
/// validation error before the handler runs
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
