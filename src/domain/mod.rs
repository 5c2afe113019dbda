//! Domain layer: entities, upstream contracts and the pure transformations
//! between them.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`clients`] - Upstream API trait definitions
//! - [`countries`] - Static country catalog
//! - [`article_filter`] - "True articles" post-processing
//! - [`pagination`] - Page arithmetic over in-memory results
//!
//! # Aggregation Flow
//!
//! 1. A service issues one [`clients::TopQuery`] per configured country
//! 2. Responses are flattened into [`entities::ArticleRecord`]s
//! 3. [`article_filter::ArticleFilter`] drops non-articles and duplicates
//! 4. [`pagination::Page`] cuts the page to render

pub mod article_filter;
pub mod clients;
pub mod countries;
pub mod entities;
pub mod pagination;
