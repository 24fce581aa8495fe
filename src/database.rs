use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};

use crate::models::book_model::Book;

/// Shared handle to the in-memory book collection.
///
/// Every service operation takes the lock once and keeps it for its whole
/// find-then-mutate sequence, so ids stay unique under concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Database {
    books: Arc<Mutex<BookCollection>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, BookCollection>> {
        self.books
            .lock()
            .map_err(|_| anyhow!("book collection lock poisoned"))
    }
}

/// Books in insertion order. Lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    /// Caller guarantees `book.id` is not already present.
    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn replace_at(&mut self, index: usize, book: Book) {
        self.books[index] = book;
    }

    pub fn remove_at(&mut self, index: usize) -> Book {
        self.books.remove(index)
    }

    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
