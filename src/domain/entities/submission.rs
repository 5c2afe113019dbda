//! Normalized form submission and the report date it carries.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::AccessPlatform;

/// Calendar day a top list is requested for.
///
/// Always formatted as `YYYY-MM-DD`; the pageviews API addresses days by the
/// zero-padded `year`/`month`/`day` path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The day before today (UTC). Wikimedia publishes a day's top list only
    /// once the day is over.
    pub fn yesterday() -> Self {
        Self(Utc::now().date_naive() - Duration::days(1))
    }

    /// Builds a date from separate year/month/day parts.
    pub fn from_parts(year: &str, month: &str, day: &str) -> Result<Self, InvalidReportDate> {
        let parse = |part: &str| part.trim().parse::<u32>().ok();
        let (Some(y), Some(m), Some(d)) = (parse(year), parse(month), parse(day)) else {
            return Err(InvalidReportDate(format!("{year}-{month}-{day}")));
        };
        NaiveDate::from_ymd_opt(y as i32, m, d)
            .map(Self)
            .ok_or_else(|| InvalidReportDate(format!("{year}-{month}-{day}")))
    }

    pub fn year(&self) -> String {
        format!("{:04}", self.0.year())
    }

    pub fn month(&self) -> String {
        format!("{:02}", self.0.month())
    }

    pub fn day(&self) -> String {
        format!("{:02}", self.0.day())
    }

    /// `DD/MM/YYYY`, the heading format of the dashboard.
    pub fn heading(&self) -> String {
        format!("{}/{}/{}", self.day(), self.month(), self.year())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl Default for ReportDate {
    fn default() -> Self {
        Self::yesterday()
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Returned when a string is not a `YYYY-MM-DD` calendar day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{0}', expected YYYY-MM-DD")]
pub struct InvalidReportDate(pub String);

impl FromStr for ReportDate {
    type Err = InvalidReportDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
                Self::from_parts(y, m, d).map_err(|_| InvalidReportDate(s.to_string()))
            }
            _ => Err(InvalidReportDate(s.to_string())),
        }
    }
}

impl Serialize for ReportDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReportDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A validated request for one country's top list.
///
/// Produced by the request form once country and date are present, then handed
/// to the caller exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// ISO 3166-1 alpha-2 code, upper case.
    pub country: String,
    pub date: ReportDate,
    pub access: AccessPlatform,
}

impl Submission {
    pub fn new(country: impl Into<String>, date: ReportDate, access: AccessPlatform) -> Self {
        Self {
            country: country.into(),
            date,
            access,
        }
    }

    pub fn year(&self) -> String {
        self.date.year()
    }

    pub fn month(&self) -> String {
        self.date.month()
    }

    pub fn day(&self) -> String {
        self.date.day()
    }

    /// Relative URL of the country view this submission resolves to.
    pub fn country_view_path(&self) -> String {
        format!(
            "/country/{}?year={}&month={}&day={}&access={}",
            self.country,
            self.year(),
            self.month(),
            self.day(),
            self.access
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_decomposes_into_padded_parts() {
        let date: ReportDate = "2024-03-02".parse().unwrap();
        assert_eq!(date.year(), "2024");
        assert_eq!(date.month(), "03");
        assert_eq!(date.day(), "02");
        assert_eq!(date.to_string(), "2024-03-02");
        assert_eq!(date.heading(), "02/03/2024");
    }

    #[test]
    fn test_date_rejects_malformed_input() {
        assert!("".parse::<ReportDate>().is_err());
        assert!("2024-3-2".parse::<ReportDate>().is_err());
        assert!("2024-02-30".parse::<ReportDate>().is_err());
        assert!("02/03/2024".parse::<ReportDate>().is_err());
    }

    #[test]
    fn test_from_parts() {
        let date = ReportDate::from_parts("2023", "12", "31").unwrap();
        assert_eq!(date.to_string(), "2023-12-31");
        assert!(ReportDate::from_parts("2023", "13", "01").is_err());
        assert!(ReportDate::from_parts("abcd", "01", "01").is_err());
    }

    #[test]
    fn test_yesterday_is_before_today() {
        assert!(ReportDate::yesterday().as_naive() < Utc::now().date_naive());
    }

    #[test]
    fn test_submission_exposes_date_parts() {
        let submission = Submission::new(
            "CD",
            "2024-03-02".parse().unwrap(),
            AccessPlatform::MobileWeb,
        );
        assert_eq!(submission.year(), "2024");
        assert_eq!(submission.month(), "03");
        assert_eq!(submission.day(), "02");
        assert_eq!(
            submission.country_view_path(),
            "/country/CD?year=2024&month=03&day=02&access=mobile-web"
        );
    }

    #[test]
    fn test_report_date_serde() {
        let date: ReportDate = serde_json::from_str("\"2024-01-15\"").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-01-15\"");
        assert!(serde_json::from_str::<ReportDate>("\"15-01-2024\"").is_err());
    }
}
