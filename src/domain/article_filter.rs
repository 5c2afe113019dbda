//! Post-processing of flattened top lists.
//!
//! Country top lists are dominated by pages that are not articles: main pages,
//! search pages, and other namespaced pages. [`TrueArticles`] strips them and
//! drops duplicate entries before a list is paginated.

use std::collections::HashSet;

use crate::domain::entities::ArticleRecord;

/// Filters a flattened list of records before pagination.
///
/// Implementations must keep the relative order of the records they retain.
#[cfg_attr(test, mockall::automock)]
pub trait ArticleFilter: Send + Sync {
    fn filter(&self, records: Vec<ArticleRecord>) -> Vec<ArticleRecord>;
}

/// Main page titles across the wikis popular in Africa.
const MAIN_PAGES: &[&str] = &[
    "Main_Page",
    "Accueil_principal",
    "Wikipédia:Accueil_principal",
    "Página_principal",
    "Portada",
    "Hauptseite",
    "Mwanzo",
    "Ukurasa_Mkuu",
    "الصفحة_الرئيسية",
    "Tuisblad",
    "-",
];

/// Namespace prefixes of pages that are not encyclopedic articles.
const NAMESPACES: &[&str] = &[
    "Special:",
    "Spécial:",
    "Especial:",
    "Wikipedia:",
    "Wikipédia:",
    "File:",
    "Fichier:",
    "Help:",
    "Aide:",
    "Portal:",
    "Portail:",
    "Category:",
    "Catégorie:",
    "Template:",
    "Modèle:",
    "User:",
    "Utilisateur:",
    "Talk:",
    "Discussion:",
    "خاص:",
    "ويكيبيديا:",
];

/// Keeps encyclopedic articles only, first occurrence wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrueArticles;

impl TrueArticles {
    pub fn new() -> Self {
        Self
    }

    /// Whether a title names an actual article.
    pub fn is_article(title: &str) -> bool {
        let title = title.trim();
        !title.is_empty()
            && !MAIN_PAGES.contains(&title)
            && !NAMESPACES.iter().any(|ns| title.starts_with(ns))
    }
}

impl ArticleFilter for TrueArticles {
    fn filter(&self, records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|record| Self::is_article(&record.title))
            .filter(|record| {
                seen.insert((
                    record.country.clone(),
                    record.project.clone(),
                    record.title.clone(),
                ))
            })
            .collect()
    }
}
