//! Access platform a pageview was recorded under.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Device/client category Wikimedia logs traffic under.
///
/// The wire names (`all-access`, `desktop`, `mobile-app`, `mobile-web`) are used
/// verbatim in the pageviews API path, query strings and JSON payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessPlatform {
    #[default]
    AllAccess,
    Desktop,
    MobileApp,
    MobileWeb,
}

impl AccessPlatform {
    /// Every platform, in the order the form lists them.
    pub const ALL: [AccessPlatform; 4] = [
        AccessPlatform::AllAccess,
        AccessPlatform::Desktop,
        AccessPlatform::MobileApp,
        AccessPlatform::MobileWeb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllAccess => "all-access",
            Self::Desktop => "desktop",
            Self::MobileApp => "mobile-app",
            Self::MobileWeb => "mobile-web",
        }
    }
}

impl fmt::Display for AccessPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known access platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown access platform: {0}")]
pub struct UnknownAccessPlatform(pub String);

impl FromStr for AccessPlatform {
    type Err = UnknownAccessPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| UnknownAccessPlatform(s.to_string()))
    }
}
