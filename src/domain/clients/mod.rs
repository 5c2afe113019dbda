//! Upstream client trait definitions for the domain layer.
//!
//! The dashboard owns no data: everything it shows comes from two third-party
//! APIs. These traits describe what the services need from them; the
//! `reqwest`-backed implementations live in `crate::infrastructure::http`.
//!
//! - [`PageviewsClient`] - Per-country daily top articles
//! - [`LocationClient`] - Coordinates to country code
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod error;
pub mod location_client;
pub mod pageviews_client;

pub use error::{ClientError, ClientResult};
pub use location_client::{Coordinates, LocationClient};
pub use pageviews_client::{
    CountryTopList, PageviewsClient, TopArticle, TopArticlesResponse, TopQuery,
};

#[cfg(test)]
pub use location_client::MockLocationClient;
#[cfg(test)]
pub use pageviews_client::MockPageviewsClient;
