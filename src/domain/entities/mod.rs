//! Core domain entities.
//!
//! Plain data structures describing what the dashboard works with. None of
//! them is persisted: each value lives for one request.
//!
//! # Entity Types
//!
//! - [`ArticleRecord`] - One ranked article of a country's top list
//! - [`Submission`] - A validated request-form submission
//! - [`ReportDate`] - The calendar day a top list is requested for
//! - [`AccessPlatform`] - Device category pageviews are counted under
//! - [`ViewMode`] - Gallery or list presentation
//! - [`Country`] / [`Continent`] - Entries of the static catalog

pub mod access;
pub mod article;
pub mod country;
pub mod submission;
pub mod view;

pub use access::{AccessPlatform, UnknownAccessPlatform};
pub use article::ArticleRecord;
pub use country::{Continent, Country};
pub use submission::{InvalidReportDate, ReportDate, Submission};
pub use view::ViewMode;
