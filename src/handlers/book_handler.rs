use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::errors::AppError;
use crate::models::book_model::{Book, BookDetailDto, BookListDto, BookPayload};
use crate::models::paging::BookQuery;
use crate::models::response_model::ApiResponse;
use crate::services::book_service::BookService;
use crate::AppState;

pub struct BookHandler;

impl BookHandler {
    fn create_service(state: &AppState) -> BookService {
        BookService::new(state.db.clone())
    }

    /// POST /books
    pub async fn create_book(
        State(state): State<AppState>,
        WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
    ) -> Result<(StatusCode, Json<ApiResponse<Book>>), AppError> {
        let service = Self::create_service(&state);
        let book = service.add_book(payload)?;

        Ok((
            StatusCode::CREATED,
            Json(ApiResponse::with_message("Buku berhasil ditambahkan", book)),
        ))
    }

    /// GET /books
    pub async fn get_books(
        State(state): State<AppState>,
        WithRejection(Query(pairs), _): WithRejection<Query<Vec<(String, String)>>, AppError>,
    ) -> Result<Json<ApiResponse<BookListDto>>, AppError> {
        let query: BookQuery = pairs.into_iter().collect();
        let service = Self::create_service(&state);
        let books = service.get_books(&query)?;

        Ok(Json(ApiResponse::success(BookListDto { books })))
    }

    /// GET /books/{id}
    pub async fn get_book(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<BookDetailDto>>, AppError> {
        let service = Self::create_service(&state);
        let book = service.get_book(&id)?;

        Ok(Json(ApiResponse::success(BookDetailDto { book })))
    }

    /// PUT /books/{id}
    pub async fn update_book(
        State(state): State<AppState>,
        Path(id): Path<String>,
        WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
    ) -> Result<Json<ApiResponse<()>>, AppError> {
        let service = Self::create_service(&state);
        service.update_book(&id, payload)?;

        Ok(Json(ApiResponse::message("Buku berhasil diperbarui")))
    }

    /// DELETE /books/{id}
    pub async fn delete_book(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<()>>, AppError> {
        let service = Self::create_service(&state);
        service.delete_book(&id)?;

        Ok(Json(ApiResponse::message("Buku berhasil dihapus")))
    }
}
