use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;
use crate::utils::numeric::Numeric;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: Numeric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub page_count: Numeric,
    pub read_page: Numeric,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(id: String, fields: ValidatedBook, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            finished: fields.finished,
            reading: fields.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field. `id` and `inserted_at` are kept.
    pub fn apply(&mut self, fields: ValidatedBook, now: DateTime<Utc>) {
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.finished = fields.finished;
        self.reading = fields.reading;
        self.updated_at = now;
    }
}

/// List projection of a [`Book`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookListDto {
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetailDto {
    pub book: Book,
}

/// Request body for create and update, loosely typed as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub year: Value,
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub summary: Value,
    #[serde(default)]
    pub publisher: Value,
    #[serde(default)]
    pub page_count: Value,
    #[serde(default)]
    pub read_page: Value,
}

/// Payload fields that passed validation, with derived flags filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBook {
    pub name: String,
    pub year: Numeric,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Numeric,
    pub read_page: Numeric,
    pub finished: bool,
    pub reading: bool,
}

impl BookPayload {
    /// Checks run in order and the first failure is returned.
    pub fn validate(self) -> Result<ValidatedBook, ValidationError> {
        let name = loose_string(&self.name)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingName)?;

        let page_count = Numeric::parse_value(&self.page_count);
        let read_page = Numeric::parse_value(&self.read_page);
        if read_page.greater_than(&page_count) {
            return Err(ValidationError::ReadPageExceedsPageCount);
        }

        Ok(ValidatedBook {
            name,
            year: Numeric::parse_value(&self.year),
            author: loose_string(&self.author),
            summary: loose_string(&self.summary),
            publisher: loose_string(&self.publisher),
            page_count,
            read_page,
            finished: page_count.same_as(&read_page),
            reading: !read_page.same_as(&Numeric::new(0)),
        })
    }
}

fn loose_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
