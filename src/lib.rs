//! Library Records Server
//!
//! A REST JSON API for managing the members and books of a library,
//! backed by PostgreSQL.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

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
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let library = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Members
        .route(
            "/library/members",
            post(api::members::create_member).get(api::members::list_members),
        )
        .route(
            "/library/members/:id",
            get(api::members::get_member)
                .put(api::members::update_member)
                .delete(api::members::delete_member),
        )
        // Books
        .route(
            "/library/books",
            post(api::books::create_book).get(api::books::list_books),
        )
        .route("/library/books/search", get(api::books::search_books))
        .route(
            "/library/books/:id",
            get(api::books::get_book)
                .put(api::books::update_book)
                .delete(api::books::delete_book),
        )
        .with_state(state);

    Router::new()
        .merge(library)
        .merge(api::openapi::create_openapi_router())
        .fallback(api::not_found)
        .layer(CatchPanicLayer::custom(api::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
