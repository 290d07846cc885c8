use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    RequestPartsExt,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

pub const PER_PAGE: u32 = 15;

/// One slice of a filtered result set, as returned by a repository.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Length-aware pagination envelope.
#[derive(Serialize, Debug)]
pub struct Paginated<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub first_page_url: String,
    pub from: Option<u64>,
    pub last_page: u32,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(page: Page<T>, pagination: &Pagination, path: String) -> Paginated<T> {
        let per_page = pagination.per_page();
        let current_page = pagination.page();
        let last_page = page.total.div_ceil(per_page as u64).max(1) as u32;
        let page_url = |number: u32| format!("{}?page={}", path, number);

        let (from, to) = match page.items.len() as u64 {
            0 => (None, None),
            len => {
                let from = pagination.offset() + 1;
                (Some(from), Some(from + len - 1))
            }
        };

        Self {
            current_page,
            first_page_url: page_url(1),
            from,
            last_page,
            last_page_url: page_url(last_page),
            next_page_url: (current_page < last_page).then(|| page_url(current_page + 1)),
            per_page,
            prev_page_url: (current_page > 1).then(|| page_url(current_page - 1)),
            to,
            total: page.total,
            data: page.items,
            path,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Pagination {
    page: u32,
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl Pagination {
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Reads a raw `page` value, falling back to the first page when it is
    /// missing, not a number, or out of range.
    pub fn parse(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        PER_PAGE
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page() as u64
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<PageQuery>>().await {
            Ok(Query(query)) => Ok(Pagination::parse(query.page.as_deref())),
            Err(err) => {
                tracing::debug!("Ignoring unreadable query string: {}", err);
                Ok(Pagination::new(1))
            }
        }
    }
}
