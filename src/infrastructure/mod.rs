//! Infrastructure layer: adapters to the outside world.
//!
//! - [`http`] - `reqwest` clients for the pageviews and location APIs

pub mod http;
