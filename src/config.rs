//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PAGEVIEWS_API_URL` - Wikimedia REST API root (default: `https://wikimedia.org/api/rest_v1`)
//! - `LOCATION_API_URL` - Reverse geocoding endpoint
//!   (default: `https://api.bigdatacloud.net/data/reverse-geocode-client`)
//! - `USER_AGENT` - User agent sent upstream (default: `top-africa/<version>`)
//! - `HTTP_TIMEOUT_SECONDS` - Upstream request timeout (default: 10, 1..=120)
//! - `FETCH_JOIN_POLICY` - `all-or-nothing` or `tolerant` (default: `all-or-nothing`)
//! - `COUNTRIES` - Comma-separated ISO codes to aggregate (default: all of Africa)
//! - `BEHIND_PROXY` - Read client IPs from proxy headers (default: `false`)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export COUNTRIES="KE,NG,SN,CD"
//! export FETCH_JOIN_POLICY="tolerant"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::JoinPolicy;
use crate::domain::countries;

pub const DEFAULT_PAGEVIEWS_API_URL: &str = "https://wikimedia.org/api/rest_v1";
pub const DEFAULT_LOCATION_API_URL: &str =
    "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub pageviews_api_url: String,
    pub location_api_url: String,
    pub user_agent: String,
    pub http_timeout_seconds: u64,
    pub join_policy: JoinPolicy,
    /// ISO codes of the countries the aggregation view fans out over.
    pub countries: Vec<String>,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            pageviews_api_url: DEFAULT_PAGEVIEWS_API_URL.to_string(),
            location_api_url: DEFAULT_LOCATION_API_URL.to_string(),
            user_agent: default_user_agent(),
            http_timeout_seconds: 10,
            join_policy: JoinPolicy::default(),
            countries: default_countries(),
            behind_proxy: false,
        }
    }
}

fn default_user_agent() -> String {
    format!("top-africa/{}", env!("CARGO_PKG_VERSION"))
}

fn default_countries() -> Vec<String> {
    countries::AFRICA
        .iter()
        .map(|country| country.code.to_string())
        .collect()
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `FETCH_JOIN_POLICY` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let pageviews_api_url =
            env::var("PAGEVIEWS_API_URL").unwrap_or(defaults.pageviews_api_url);
        let location_api_url = env::var("LOCATION_API_URL").unwrap_or(defaults.location_api_url);
        let user_agent = env::var("USER_AGENT").unwrap_or(defaults.user_agent);

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.http_timeout_seconds);

        let join_policy = match env::var("FETCH_JOIN_POLICY") {
            Ok(raw) => raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid FETCH_JOIN_POLICY")?,
            Err(_) => defaults.join_policy,
        };

        let countries = Self::load_countries().unwrap_or(defaults.countries);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            pageviews_api_url,
            location_api_url,
            user_agent,
            http_timeout_seconds,
            join_policy,
            countries,
            behind_proxy,
        })
    }

    /// Reads `COUNTRIES` as a comma-separated list of upper-cased ISO codes.
    ///
    /// Returns `None` when the variable is unset or holds no codes.
    fn load_countries() -> Option<Vec<String>> {
        let raw = env::var("COUNTRIES").ok()?;
        let codes: Vec<String> = raw
            .split(',')
            .map(|code| code.trim().to_ascii_uppercase())
            .filter(|code| !code.is_empty())
            .collect();

        if codes.is_empty() { None } else { Some(codes) }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - an API URL is not `http(s)://`
    /// - `http_timeout_seconds` is outside 1..=120
    /// - a configured country is not in the catalog
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, value) in [
            ("PAGEVIEWS_API_URL", &self.pageviews_api_url),
            ("LOCATION_API_URL", &self.location_api_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
            }
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("USER_AGENT must not be empty");
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 120 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.http_timeout_seconds
            );
        }

        let unknown: Vec<&str> = self
            .countries
            .iter()
            .filter(|code| !countries::is_known(code))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            anyhow::bail!("COUNTRIES contains unknown codes: {}", unknown.join(", "));
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Pageviews API: {}", self.pageviews_api_url);
        tracing::info!("  Location API: {}", self.location_api_url);
        tracing::info!("  User agent: {}", self.user_agent);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Join policy: {}", self.join_policy);
        tracing::info!("  Countries: {}", self.countries.len());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
