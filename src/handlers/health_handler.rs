use axum::Json;

use crate::models::response_model::ApiResponse;

pub async fn welcome_handler() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(
        "Welcome to Bookshelf API! \n Go to route /books",
    ))
}

pub async fn health_checker_handler() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("OK"))
}
