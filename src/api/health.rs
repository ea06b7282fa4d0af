//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Number of books in the catalog
    pub total_libros: usize,
}

/// Health check endpoint, reports the catalog size
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(state): State<crate::AppState>,
) -> AppResult<Json<HealthResponse>> {
    let total_libros = state.services.catalog.count_books().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        total_libros,
    }))
}
