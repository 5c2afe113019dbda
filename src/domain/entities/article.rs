//! Flattened top-article record.

use serde::Serialize;
use url::Url;

/// One ranked article of one country's daily top list.
///
/// Built from a single item of a pageviews response and never mutated
/// afterwards. The record lives for one render of a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// Display name of the country (falls back to the ISO code when unknown).
    pub country: String,
    pub rank: u32,
    pub title: String,
    pub views: u64,
    /// Wiki project the article belongs to, e.g. `fr.wikipedia`.
    pub project: String,
}

impl ArticleRecord {
    /// Creates a new record.
    pub fn new(
        country: impl Into<String>,
        rank: u32,
        title: impl Into<String>,
        views: u64,
        project: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            rank,
            title: title.into(),
            views,
            project: project.into(),
        }
    }

    /// Title with underscores turned into spaces, as shown on cards.
    pub fn display_title(&self) -> String {
        self.title.replace('_', " ")
    }

    /// Link to the article on its project.
    ///
    /// Project names come without a TLD (`en.wikipedia`), so `.org` is appended.
    /// The title is percent-encoded as a single path segment.
    pub fn url(&self) -> String {
        match Url::parse(&format!("https://{}.org/", self.project)) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.clear().push("wiki").push(&self.title);
                }
                url.into()
            }
            Err(_) => format!("https://{}.org/wiki/{}", self.project, self.title),
        }
    }
}
