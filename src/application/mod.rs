//! Application layer: services and form validation.
//!
//! Services consume the upstream client traits and give HTTP handlers and the
//! CLI a small API that speaks in domain types and [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::articles_service::ArticlesService`] - Fan-out, flattening and filtering of top lists
//! - [`services::location_service::LocationService`] - Coordinates to country code
//!
//! [`submission`] holds the request form rules shared by the HTML form and the
//! JSON API.

pub mod services;
pub mod submission;
