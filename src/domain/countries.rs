//! Static catalog of continents and the countries the picker offers.
//!
//! Only Africa is queried by the aggregation view; the catalog still models
//! continents so the request form can be pointed at another one later.

use crate::domain::entities::{Continent, Country};

/// Name of the continent the dashboard aggregates by default.
pub const DEFAULT_CONTINENT: &str = "Africa";

/// Country preselected by the picker when nothing else chose one.
pub const DEFAULT_COUNTRY: &str = "CD";

/// All 54 sovereign African states.
pub static AFRICA: &[Country] = &[
    Country::new("DZ", "Algeria"),
    Country::new("AO", "Angola"),
    Country::new("BJ", "Benin"),
    Country::new("BW", "Botswana"),
    Country::new("BF", "Burkina Faso"),
    Country::new("BI", "Burundi"),
    Country::new("CV", "Cabo Verde"),
    Country::new("CM", "Cameroon"),
    Country::new("CF", "Central African Republic"),
    Country::new("TD", "Chad"),
    Country::new("KM", "Comoros"),
    Country::new("CD", "Democratic Republic of the Congo"),
    Country::new("CG", "Republic of the Congo"),
    Country::new("CI", "Côte d'Ivoire"),
    Country::new("DJ", "Djibouti"),
    Country::new("EG", "Egypt"),
    Country::new("GQ", "Equatorial Guinea"),
    Country::new("ER", "Eritrea"),
    Country::new("SZ", "Eswatini"),
    Country::new("ET", "Ethiopia"),
    Country::new("GA", "Gabon"),
    Country::new("GM", "Gambia"),
    Country::new("GH", "Ghana"),
    Country::new("GN", "Guinea"),
    Country::new("GW", "Guinea-Bissau"),
    Country::new("KE", "Kenya"),
    Country::new("LS", "Lesotho"),
    Country::new("LR", "Liberia"),
    Country::new("LY", "Libya"),
    Country::new("MG", "Madagascar"),
    Country::new("MW", "Malawi"),
    Country::new("ML", "Mali"),
    Country::new("MR", "Mauritania"),
    Country::new("MU", "Mauritius"),
    Country::new("MA", "Morocco"),
    Country::new("MZ", "Mozambique"),
    Country::new("NA", "Namibia"),
    Country::new("NE", "Niger"),
    Country::new("NG", "Nigeria"),
    Country::new("RW", "Rwanda"),
    Country::new("ST", "São Tomé and Príncipe"),
    Country::new("SN", "Senegal"),
    Country::new("SC", "Seychelles"),
    Country::new("SL", "Sierra Leone"),
    Country::new("SO", "Somalia"),
    Country::new("ZA", "South Africa"),
    Country::new("SS", "South Sudan"),
    Country::new("SD", "Sudan"),
    Country::new("TZ", "Tanzania"),
    Country::new("TG", "Togo"),
    Country::new("TN", "Tunisia"),
    Country::new("UG", "Uganda"),
    Country::new("ZM", "Zambia"),
    Country::new("ZW", "Zimbabwe"),
];

static CONTINENTS: &[Continent] = &[Continent {
    name: DEFAULT_CONTINENT,
    countries: AFRICA,
}];

/// Every continent known to the catalog.
pub fn continents() -> &'static [Continent] {
    CONTINENTS
}

/// Looks a continent up by name, ignoring ASCII case.
pub fn continent(name: &str) -> Option<&'static Continent> {
    CONTINENTS
        .iter()
        .find(|continent| continent.name.eq_ignore_ascii_case(name))
}

/// Finds a country by ISO code (case-insensitive) across all continents.
pub fn find(code: &str) -> Option<&'static Country> {
    CONTINENTS
        .iter()
        .flat_map(|continent| continent.countries.iter())
        .find(|country| country.code.eq_ignore_ascii_case(code))
}

/// Display name for an ISO code; unknown codes are returned unchanged.
pub fn country_name(code: &str) -> String {
    find(code)
        .map(|country| country.name.to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn is_known(code: &str) -> bool {
    find(code).is_some()
}
