//! Country and continent entries of the static catalog.

use serde::Serialize;

/// A country with its ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

impl Country {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// A named group of countries offered by the country picker.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Continent {
    pub name: &'static str,
    pub countries: &'static [Country],
}
