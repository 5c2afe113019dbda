//! HTML template rendering handlers for the dashboard.

mod africa;
mod country;
mod form;

pub use africa::africa_handler;
pub use country::country_handler;
pub use form::{form_handler, submit_handler};
