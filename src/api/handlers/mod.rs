//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod articles;
pub mod health;
pub mod location;
pub mod submissions;

pub use articles::{articles_handler, country_articles_handler};
pub use health::health_handler;
pub use location::location_handler;
pub use submissions::submission_handler;
