use chrono::Utc;
use cuid2::CuidConstructor;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::book_model::{Book, BookPayload, BookSummary};
use crate::models::paging::{BookFilter, BookQuery, PaginationParams};

const BOOK_ID_LENGTH: u16 = 16;

pub struct BookService {
    db: Database,
}

impl BookService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn add_book(&self, payload: BookPayload) -> AppResult<Book> {
        let fields = payload
            .validate()
            .map_err(|e| AppError::BadRequest(format!("Gagal menambahkan buku. {}", e)))?;

        let id = CuidConstructor::new()
            .with_length(BOOK_ID_LENGTH)
            .create_id();
        let book = Book::new(id, fields, Utc::now());

        let mut books = self
            .db
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to add the book: {}", e)))?;
        books.append(book.clone());

        tracing::info!(book_id = %book.id, name = %book.name, "Book added");

        Ok(book)
    }

    pub fn get_books(&self, query: &BookQuery) -> AppResult<Vec<BookSummary>> {
        let filter = query.filter();
        let pagination = query.pagination(&filter);

        let books = self.db.lock().map_err(|e| {
            AppError::ServiceUnavailable(format!("Failed to fetch books data: {}", e))
        })?;
        let listed = list_books(books.all(), &filter, pagination);

        tracing::debug!(
            ?filter,
            page = pagination.page,
            limit = pagination.limit,
            returned = listed.len(),
            "Listed books"
        );

        Ok(listed)
    }

    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        let books = self
            .db
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to find book with id {}: {}", id, e)))?;

        books
            .find_index_by_id(id)
            .and_then(|index| books.get(index))
            .cloned()
            .ok_or_else(|| AppError::NotFound("Buku tidak ditemukan".to_string()))
    }

    pub fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        let fields = payload
            .validate()
            .map_err(|e| AppError::BadRequest(format!("Gagal memperbarui buku. {}", e)))?;

        let mut books = self
            .db
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed updating book: {}", e)))?;

        let index = books.find_index_by_id(id).ok_or_else(|| {
            AppError::NotFound("Gagal memperbarui buku. Id tidak ditemukan".to_string())
        })?;

        let mut book = books.all()[index].clone();
        book.apply(fields, Utc::now());
        books.replace_at(index, book);

        tracing::info!(book_id = %id, "Book updated");

        Ok(())
    }

    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        let mut books = self
            .db
            .lock()
            .map_err(|e| AppError::Internal(format!("Delete failed: {}", e)))?;

        let index = books.find_index_by_id(id).ok_or_else(|| {
            AppError::NotFound("Buku gagal dihapus. Id tidak ditemukan".to_string())
        })?;
        books.remove_at(index);

        tracing::info!(book_id = %id, "Book deleted");

        Ok(())
    }
}

/// Filters in insertion order, cuts out the requested page and projects it.
pub fn list_books(
    books: &[Book],
    filter: &BookFilter,
    pagination: PaginationParams,
) -> Vec<BookSummary> {
    let Some((skip, take)) = pagination.window() else {
        return Vec::new();
    };

    books
        .iter()
        .filter(|book| filter.matches(book))
        .skip(skip)
        .take(take)
        .map(BookSummary::from)
        .collect()
}
