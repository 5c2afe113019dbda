//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request
//! validation lives next to each query type.

pub mod articles;
pub mod health;
pub mod location;
pub mod pagination;
pub mod submission;
