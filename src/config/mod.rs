use crate::core::{PricingError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Engine configuration
///
/// Reference data flows in through caching read-through layers; surge
/// rules must propagate faster than rate data, so they get a shorter
/// staleness window.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub log_level: String,
    /// Civil timezone surge rules are authored in (informational; the
    /// caller localizes pickup instants before handing them to the engine)
    pub civil_timezone: String,
    /// Max staleness for cached rate cards, seconds
    pub rate_cache_ttl_secs: u64,
    /// Max staleness for cached surge rules, seconds
    pub surge_cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            civil_timezone: env::var("PRICING_CIVIL_TIMEZONE")
                .unwrap_or_else(|_| "Europe/London".to_string()),
            rate_cache_ttl_secs: env::var("PRICING_RATE_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .map_err(|_| {
                    PricingError::configuration("Invalid PRICING_RATE_CACHE_TTL_SECS")
                })?,
            surge_cache_ttl_secs: env::var("PRICING_SURGE_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|_| {
                    PricingError::configuration("Invalid PRICING_SURGE_CACHE_TTL_SECS")
                })?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.rate_cache_ttl_secs == 0 || self.surge_cache_ttl_secs == 0 {
            return Err(PricingError::configuration(
                "Cache TTLs must be greater than 0",
            ));
        }

        if self.surge_cache_ttl_secs > self.rate_cache_ttl_secs {
            return Err(PricingError::configuration(
                "Surge rules must not be cached longer than rate data",
            ));
        }

        Ok(())
    }

    pub fn rate_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.rate_cache_ttl_secs)
    }

    pub fn surge_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.surge_cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            civil_timezone: "Europe/London".to_string(),
            rate_cache_ttl_secs: 300,
            surge_cache_ttl_secs: 60,
        }
    }
}
