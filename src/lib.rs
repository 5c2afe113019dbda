//! # Top Africa
//!
//! A dashboard of the most viewed Wikimedia articles across African countries,
//! built with Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, country catalog, pagination,
//!   article filter and upstream client traits
//! - **Application Layer** ([`application`]) - Fan-out aggregation, location
//!   lookup and form validation
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for the
//!   Wikimedia pageviews API and BigDataCloud reverse geocoding
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered request form and result pages
//!
//! ## Features
//!
//! - One concurrent pageviews request per country, joined all-or-nothing by default
//! - Main pages, special pages and duplicates filtered out of the rankings
//! - Gallery (12 per page) and list (18 per page) views
//! - Country prefill from browser geolocation
//! - Rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! export COUNTRIES="KE,NG,SN,CD"   # Optional, defaults to all of Africa
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ArticlesService, JoinPolicy, LocationService};
    pub use crate::domain::article_filter::{ArticleFilter, TrueArticles};
    pub use crate::domain::clients::{LocationClient, PageviewsClient};
    pub use crate::domain::entities::{AccessPlatform, ArticleRecord, ReportDate, ViewMode};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
