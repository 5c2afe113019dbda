//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ArticlesService, LocationService};

/// Services shared across requests.
///
/// Cloning is cheap: every field is an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub articles_service: Arc<ArticlesService>,
    pub location_service: Arc<LocationService>,
}

impl AppState {
    pub fn new(articles_service: Arc<ArticlesService>, location_service: Arc<LocationService>) -> Self {
        Self {
            articles_service,
            location_service,
        }
    }
}
