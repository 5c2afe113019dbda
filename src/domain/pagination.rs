//! Page arithmetic over an in-memory result set.
//!
//! The whole filtered list is held in memory, so a page is a slice of it.
//! The current page is never clamped: asking for a page past the end yields an
//! empty slice, and the navigation flags are what keep users in range.

use serde::Serialize;

/// `ceil(count / page_size)`; zero when there is nothing to show.
pub fn total_pages(count: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size as usize) as u32
}

/// One page of a larger result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number as requested.
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl<T: Clone> Page<T> {
    /// Cuts page `page` of size `page_size` out of `records`.
    pub fn slice(records: &[T], page: u32, page_size: u32) -> Self {
        let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let items = if start >= records.len() {
            Vec::new()
        } else {
            let end = (start + page_size as usize).min(records.len());
            records[start..end].to_vec()
        };

        Self {
            items,
            page,
            page_size,
            total_items: records.len(),
            total_pages: total_pages(records.len(), page_size),
        }
    }
}

impl<T> Page<T> {
    /// Whether the "previous" control is enabled.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether the "next" control is enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page numbers for the numbered buttons, `1..=total_pages`.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(37, 18), 3);
    }

    #[test]
    fn test_first_page_shows_min_of_size_and_count() {
        assert_eq!(Page::slice(&records(5), 1, 12).items.len(), 5);
        assert_eq!(Page::slice(&records(30), 1, 12).items.len(), 12);
        assert_eq!(Page::slice(&records(30), 1, 18).items.len(), 18);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let page = Page::slice(&records(30), 3, 12);
        assert_eq!(page.items, vec![24, 25, 26, 27, 28, 29]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_first_page_disables_prev() {
        let page = Page::slice(&records(30), 1, 12);
        assert!(!page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn test_page_beyond_total_is_empty_not_clamped() {
        // Page 3 of a gallery (12/page) becomes out of range in list mode (18/page).
        let page = Page::slice(&records(30), 3, 18);
        assert!(page.is_empty());
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_same_page_recomputes_for_new_size() {
        let data = records(40);
        let gallery = Page::slice(&data, 2, 12);
        let list = Page::slice(&data, 2, 18);
        assert_eq!(gallery.items.first(), Some(&12));
        assert_eq!(list.items.first(), Some(&18));
        assert_eq!(list.items.len(), 18);
    }

    #[test]
    fn test_empty_result_set() {
        let page = Page::slice(&records(0), 1, 12);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.page_numbers().count(), 0);
    }
}
