use crate::models::book_model::Book;
use crate::utils::numeric::Numeric;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 2;
const FILTERED_LIMIT: i64 = 3;
const FINISHED_LIMIT: i64 = 1;

/// Raw query string of `GET /books`. Empty values count as absent and the
/// first occurrence of a repeated key wins.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl FromIterator<(String, String)> for BookQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = BookQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl BookQuery {
    pub fn filter(&self) -> BookFilter {
        BookFilter {
            name: non_empty(&self.name).map(str::to_lowercase),
            reading: non_empty(&self.reading).map(|v| v == "1"),
            finished: non_empty(&self.finished).map(|v| v == "1"),
        }
    }

    pub fn pagination(&self, filter: &BookFilter) -> PaginationParams {
        let page = non_empty(&self.page)
            .and_then(|v| Numeric::parse_str(v).value())
            .filter(|page| *page >= 1)
            .unwrap_or(DEFAULT_PAGE);
        // A limit of 0 is the same as no limit at all.
        let explicit_limit = non_empty(&self.limit)
            .and_then(|v| Numeric::parse_str(v).value())
            .filter(|limit| *limit != 0);

        PaginationParams {
            page,
            limit: resolve_limit(explicit_limit, filter),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Filter-dependent limit. Rules are checked in order and the first match
/// wins, so `finished=1` without an explicit limit resolves to 3, not 1.
#[allow(clippy::if_same_then_else)]
fn resolve_limit(explicit: Option<i64>, filter: &BookFilter) -> i64 {
    let reading = filter.reading;
    let finished = filter.finished;

    if explicit.is_none() && (reading == Some(true) || finished == Some(true)) {
        FILTERED_LIMIT
    } else if explicit.is_none() && finished == Some(false) {
        FILTERED_LIMIT
    } else if finished == Some(true) {
        FINISHED_LIMIT
    } else if finished == Some(false) {
        FILTERED_LIMIT
    } else {
        explicit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Already lowercased.
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(name) = &self.name {
            if !book.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: i64,
    pub limit: i64,
}

impl PaginationParams {
    pub fn take(&self) -> i64 {
        self.limit
    }

    /// `(skip, take)` as slice bounds, or `None` when the window is empty.
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.page < 1 || self.limit < 1 {
            return None;
        }
        let skip = usize::try_from(self.page.checked_sub(1)?.checked_mul(self.limit)?).ok()?;
        let take = usize::try_from(self.take()).ok()?;
        Some((skip, take))
    }
}
