//! Libros Book Catalog
//!
//! A small REST JSON API exposing an in-memory catalog of book records.

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = api::cors::cors_layer(&state.config.cors);

    let catalog = Router::new()
        // Health check
        .route("/", get(api::health::health_check))
        // Books
        .route(
            "/libros",
            get(api::books::list_books).post(api::books::create_book),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(catalog)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .map_response(|res: axum::http::Response<_>| res.map(axum::body::Body::new))
                .layer(TraceLayer::new_for_http()),
        )
}
