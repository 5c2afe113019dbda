//! Client trait for reverse geocoding coordinates to a country.

use async_trait::async_trait;

use super::ClientResult;

/// Geographic position reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Resolves coordinates to an ISO 3166-1 alpha-2 country code.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::BigDataCloudClient`] - reverse-geocode client API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationClient: Send + Sync {
    /// Returns the country code of the place at `coordinates`.
    ///
    /// # Errors
    ///
    /// Returns a [`super::ClientError`] when the lookup fails or yields no country.
    async fn country_code(&self, coordinates: Coordinates) -> ClientResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_bounds() {
        assert!(Coordinates::new(-4.32, 15.31).is_valid());
        assert!(Coordinates::new(90.0, -180.0).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, 180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }
}
