//! Business logic services for the application layer.

pub mod articles_service;
pub mod location_service;

pub use articles_service::{ArticlesService, JoinPolicy};
pub use location_service::LocationService;
