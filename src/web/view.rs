//! View models shared by the result pages.
//!
//! Templates only print fields. Selection flags, hrefs and disabled states
//! are computed here so every page navigates the same way.

use crate::domain::entities::{AccessPlatform, ArticleRecord, ViewMode};
use crate::domain::pagination::Page;

/// An article as shown on a card or a list row.
#[derive(Debug, Clone)]
pub struct ArticleCard {
    pub rank: u32,
    pub country: String,
    pub title: String,
    pub url: String,
    pub views: u64,
    pub project: String,
}

impl From<&ArticleRecord> for ArticleCard {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            rank: record.rank,
            country: record.country.clone(),
            title: record.display_title(),
            url: record.url(),
            views: record.views,
            project: record.project.clone(),
        }
    }
}

/// A numbered page button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub current: bool,
    pub href: String,
}

/// An `<option>` of a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Options for the access platform select, with `selected` marked.
pub fn access_options(selected: AccessPlatform) -> Vec<SelectOption> {
    AccessPlatform::ALL
        .iter()
        .map(|access| SelectOption {
            value: access.as_str().to_string(),
            label: access.as_str().to_string(),
            selected: *access == selected,
        })
        .collect()
}

/// Builds result page hrefs from a path and the query that identifies the
/// result set (date and access platform).
#[derive(Debug, Clone)]
pub struct PageLinks {
    base: String,
}

impl PageLinks {
    /// `query` must already be URL-safe, e.g. `date=2024-03-02&access=desktop`.
    pub fn new(path: &str, query: &str) -> Self {
        Self {
            base: format!("{path}?{query}"),
        }
    }

    pub fn href(&self, view: ViewMode, page: u32) -> String {
        format!("{}&view={}&page={}", self.base, view, page)
    }
}

/// One rendered page of results with its navigation.
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub cards: Vec<ArticleCard>,
    pub gallery: bool,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    pub pages: Vec<PageLink>,
    /// `None` disables the "previous" control.
    pub prev_href: Option<String>,
    /// `None` disables the "next" control.
    pub next_href: Option<String>,
    /// Same page in the other view mode.
    pub toggle_href: String,
    pub toggle_label: &'static str,
}

impl ResultsView {
    pub fn new(records: &[ArticleRecord], view: ViewMode, page: u32, links: &PageLinks) -> Self {
        let page = Page::slice(records, page, view.page_size());

        let pages = page
            .page_numbers()
            .map(|number| PageLink {
                number,
                current: number == page.page,
                href: links.href(view, number),
            })
            .collect();

        let prev_href = page
            .has_prev()
            .then(|| links.href(view, page.page - 1));
        let next_href = page
            .has_next()
            .then(|| links.href(view, page.page + 1));

        let toggle = view.toggled();
        let toggle_label = match toggle {
            ViewMode::Gallery => "Gallery view",
            ViewMode::List => "List view",
        };

        Self {
            cards: page.items.iter().map(ArticleCard::from).collect(),
            gallery: view == ViewMode::Gallery,
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            pages,
            prev_href,
            next_href,
            toggle_href: links.href(toggle, page.page),
            toggle_label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
