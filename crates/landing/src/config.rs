//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults match the page's shipped behavior.
//!
//! - `DRIFTLINE_FETCH_DELAY_MS` - Simulated catalog fetch latency (default: 600)
//! - `DRIFTLINE_SEND_DELAY_MS` - Simulated contact send latency (default: 900)
//! - `DRIFTLINE_PAGE_SIZE` - Products per catalog page (default: 6)
//! - `DRIFTLINE_PAGE_CUTOFF` - Last page the load-more control will request
//!   (default: 2)

use std::time::Duration;

use thiserror::Error;

const DEFAULT_FETCH_DELAY_MS: u64 = 600;
const DEFAULT_SEND_DELAY_MS: u64 = 900;
const DEFAULT_PAGE_SIZE: usize = 6;
const DEFAULT_PAGE_CUTOFF: u32 = 2;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Landing-page engine configuration.
#[derive(Debug, Clone)]
pub struct LandingConfig {
    /// Artificial latency applied to catalog page fetches.
    pub fetch_delay: Duration,
    /// Artificial latency applied to contact-form sends.
    pub send_delay: Duration,
    /// Number of products per catalog page.
    pub page_size: usize,
    /// Last page the caller-side cursor will request; past it the load-more
    /// control disappears.
    pub page_cutoff: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            send_delay: Duration::from_millis(DEFAULT_SEND_DELAY_MS),
            page_size: DEFAULT_PAGE_SIZE,
            page_cutoff: DEFAULT_PAGE_CUTOFF,
        }
    }
}

impl LandingConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            fetch_delay: Duration::from_millis(parse_env_or(
                "DRIFTLINE_FETCH_DELAY_MS",
                DEFAULT_FETCH_DELAY_MS,
            )?),
            send_delay: Duration::from_millis(parse_env_or(
                "DRIFTLINE_SEND_DELAY_MS",
                DEFAULT_SEND_DELAY_MS,
            )?),
            page_size: parse_env_or("DRIFTLINE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            page_cutoff: parse_env_or("DRIFTLINE_PAGE_CUTOFF", DEFAULT_PAGE_CUTOFF)?,
        })
    }

    /// A configuration with zero artificial latency, for tests and demos.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            fetch_delay: Duration::ZERO,
            send_delay: Duration::ZERO,
            page_size: DEFAULT_PAGE_SIZE,
            page_cutoff: DEFAULT_PAGE_CUTOFF,
        }
    }
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}
