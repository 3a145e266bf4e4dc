//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOWROOM_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOWROOM_PORT` - Listen port (default: 3000)
//! - `SHOWROOM_DATA_SOURCE` - Catalog document path or URL (default: assets/data/catalog.json)
//! - `SHOWROOM_PRODUCT_KIND` - `watch` or `car` (default: watch)
//! - `SHOWROOM_FETCH_TIMEOUT_SECS` - Timeout for a remote document fetch (default: 10)
//! - `SHOWROOM_LIST_PAGE_SIZE` - Products per listing page (default: 9)
//! - `SHOWROOM_GALLERY_PAGE_SIZE` - Products per gallery page (default: 6)
//! - `SHOWROOM_FEATURED_LIMIT` - Featured products on the home page (default: 6)
//! - `SHOWROOM_RELATED_LIMIT` - Related products on a detail page (default: 4)
//! - `SHOWROOM_CORS_ORIGIN` - Allowed browser origin for the JSON API
//! - `SHOWROOM_LOG_JSON` - Emit JSON log lines instead of text (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance traces sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use showroom_core::model::ProductKind;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog document settings
    pub catalog: CatalogConfig,
    /// Page sizes and list limits
    pub pages: PageConfig,
    /// Allowed CORS origin; no CORS layer when unset
    pub cors_origin: Option<String>,
    /// Structured JSON logs for log shippers
    pub json_logs: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Where the catalog comes from and what it sells.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// File path or `http(s)://` URL of the catalog document
    pub data_source: String,
    /// Watch or car catalog
    pub product_kind: ProductKind,
    /// Request timeout for remote documents
    pub fetch_timeout: Duration,
}

/// Per-view page sizes and list limits. Every value is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub list_page_size: usize,
    pub gallery_page_size: usize,
    pub featured_limit: usize,
    pub related_limit: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            list_page_size: 9,
            gallery_page_size: 6,
            featured_limit: 6,
            related_limit: 4,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let host = env.parse_or("SHOWROOM_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = env.parse_or("SHOWROOM_PORT", 3000_u16)?;

        let catalog = CatalogConfig {
            data_source: env
                .optional("SHOWROOM_DATA_SOURCE")
                .unwrap_or_else(|| "assets/data/catalog.json".to_string()),
            product_kind: env.parse_or("SHOWROOM_PRODUCT_KIND", ProductKind::Watch)?,
            fetch_timeout: Duration::from_secs(env.positive("SHOWROOM_FETCH_TIMEOUT_SECS", 10)?),
        };

        let defaults = PageConfig::default();
        let pages = PageConfig {
            list_page_size: env.positive("SHOWROOM_LIST_PAGE_SIZE", defaults.list_page_size)?,
            gallery_page_size: env
                .positive("SHOWROOM_GALLERY_PAGE_SIZE", defaults.gallery_page_size)?,
            featured_limit: env.positive("SHOWROOM_FEATURED_LIMIT", defaults.featured_limit)?,
            related_limit: env.positive("SHOWROOM_RELATED_LIMIT", defaults.related_limit)?,
        };

        Ok(Self {
            host,
            port,
            catalog,
            pages,
            cors_origin: env.optional("SHOWROOM_CORS_ORIGIN"),
            json_logs: env.parse_or("SHOWROOM_LOG_JSON", false)?,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env.rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: env.rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable; blank counts as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |raw| {
            raw.parse::<T>().map_err(|e| invalid(key, e.to_string()))
        })
    }

    /// Parse a count that must be at least 1.
    fn positive<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr + PartialOrd + From<u8> + Copy,
        T::Err: std::fmt::Display,
    {
        let value = self.parse_or(key, default)?;
        if value < T::from(1) {
            return Err(invalid(key, "must be at least 1".to_string()));
        }
        Ok(value)
    }

    /// Parse a sample rate in `0.0..=1.0`.
    fn rate(&self, key: &str, default: f32) -> Result<f32, ConfigError> {
        let value = self.parse_or(key, default)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(key, format!("{value} is not between 0.0 and 1.0")));
        }
        Ok(value)
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), message)
}
