//! DTOs for top article result pages.

use serde::Serialize;

use crate::domain::entities::{AccessPlatform, ArticleRecord, ReportDate, ViewMode};
use crate::domain::pagination::Page;

/// One page of a top articles result set.
#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub date: ReportDate,
    pub access: AccessPlatform,
    pub view: ViewMode,
    /// ISO code when the page covers a single country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub pagination: PaginationMeta,
    pub items: Vec<ArticleRecord>,
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> From<&Page<T>> for PaginationMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_prev: page.has_prev(),
            has_next: page.has_next(),
        }
    }
}
