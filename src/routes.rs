use crate::{
    handlers::{
        book_handler::BookHandler,
        health_handler::{health_checker_handler, welcome_handler},
    },
    AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn create_routes(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/healthy", get(health_checker_handler))
        .merge(book_routes())
        .with_state(app_state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(BookHandler::get_books).post(BookHandler::create_book),
        )
        .route(
            "/books/{id}",
            get(BookHandler::get_book)
                .put(BookHandler::update_book)
                .delete(BookHandler::delete_book),
        )
}
