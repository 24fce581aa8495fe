pub mod handlers;
pub mod models;
pub mod services;
pub mod config;
pub mod routes;
pub mod errors;
pub mod database;
pub mod utils;

use std::sync::Arc;
use axum::http::{header, Method};
use database::Database;
use tower_http::cors::{Any, CorsLayer};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// Any origin may call the API, as the bookshelf has no credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::DELETE,
            Method::POST,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Router over a fresh, empty collection.
pub fn app() -> axum::Router {
    let state = Arc::new(AppStateInner { db: Database::new() });
    routes::create_routes(state, cors_layer())
}
