//! Web dashboard layer for browser-based UI.
//!
//! Provides the request form and the result pages. Uses Askama templates for
//! server-side rendering; the only client-side script is the one-shot
//! geolocation helper on the form.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration
//! - [`view`] - View models shared by the templates

pub mod handlers;
pub mod routes;
pub mod view;
