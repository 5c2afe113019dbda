//! Presentation mode of a result page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a page of articles is laid out.
///
/// The mode decides the page size; switching modes keeps the current page
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Gallery,
    List,
}

impl ViewMode {
    pub const GALLERY_PAGE_SIZE: u32 = 12;
    pub const LIST_PAGE_SIZE: u32 = 18;

    pub fn page_size(&self) -> u32 {
        match self {
            Self::Gallery => Self::GALLERY_PAGE_SIZE,
            Self::List => Self::LIST_PAGE_SIZE,
        }
    }

    /// The other mode, used by the gallery/list toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Gallery => Self::List,
            Self::List => Self::Gallery,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sizes() {
        assert_eq!(ViewMode::Gallery.page_size(), 12);
        assert_eq!(ViewMode::List.page_size(), 18);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ViewMode::Gallery.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Gallery);
    }
}
