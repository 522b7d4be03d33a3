//! Configuration Module
//!
//! Loads client configuration from environment variables, then applies
//! command-line overrides.

use std::env;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{PokedexError, Result};

/// Default PokeAPI root
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default cache entry lifetime in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 5;

/// Largest accepted ttl or sweep interval, in seconds (365 days)
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Age in seconds after which cached responses are dropped
    pub cache_ttl: u64,
    /// Sweeper period in seconds; `None` means the same as `cache_ttl`
    pub sweep_interval: Option<u64>,
    /// Root URL of the PokeAPI, without trailing slash
    pub api_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache ttl in seconds (default: 5)
    /// - `POKEDEX_SWEEP_INTERVAL_SECS` - Sweep period in seconds (default: the ttl)
    /// - `POKEDEX_API_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            sweep_interval: env::var("POKEDEX_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|v| normalize_base_url(&v))
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }

    /// Applies command-line flags on top of this configuration and validates
    /// the result.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self> {
        if let Some(ttl) = cli.cache_ttl {
            self.cache_ttl = ttl;
        }
        if let Some(interval) = cli.sweep_interval {
            self.sweep_interval = Some(interval);
        }
        if let Some(url) = &cli.base_url {
            self.api_base_url = normalize_base_url(url);
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects values the cache or client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl == 0 {
            return Err(PokedexError::Config(
                "cache ttl must be at least 1 second".to_string(),
            ));
        }
        if self.cache_ttl > MAX_CACHE_TTL_SECS {
            return Err(PokedexError::Config(format!(
                "cache ttl must be at most {} seconds",
                MAX_CACHE_TTL_SECS
            )));
        }
        match self.sweep_interval {
            Some(0) => {
                return Err(PokedexError::Config(
                    "sweep interval must be at least 1 second".to_string(),
                ));
            }
            Some(secs) if secs > MAX_CACHE_TTL_SECS => {
                return Err(PokedexError::Config(format!(
                    "sweep interval must be at most {} seconds",
                    MAX_CACHE_TTL_SECS
                )));
            }
            _ => {}
        }
        if self.api_base_url.is_empty() {
            return Err(PokedexError::Config("API base URL is empty".to_string()));
        }
        Ok(())
    }

    /// Cache ttl as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Sweep period, defaulting to the ttl.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval.unwrap_or(self.cache_ttl))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            sweep_interval: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 5);
        assert_eq!(config.sweep_interval, None);
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.sweep_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEDEX_CACHE_TTL_SECS");
        env::remove_var("POKEDEX_SWEEP_INTERVAL_SECS");
        env::remove_var("POKEDEX_API_BASE_URL");

        let config = Config::from_env();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_replace_env_values() {
        let cli = Cli::parse_from([
            "pokedex",
            "--cache-ttl",
            "30",
            "--sweep-interval",
            "10",
            "--base-url",
            "http://127.0.0.1:9000/api/v2/",
        ]);

        let config = Config::default().with_overrides(&cli).unwrap();
        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
        assert_eq!(config.sweep_interval(), Duration::from_secs(10));
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/api/v2");
    }

    #[test]
    fn test_overrides_reject_zero_ttl() {
        let cli = Cli::parse_from(["pokedex", "--cache-ttl", "0"]);

        let result = Config::default().with_overrides(&cli);
        assert!(matches!(result, Err(PokedexError::Config(_))));
    }

    #[test]
    fn test_overrides_reject_ttl_beyond_duration_range() {
        let cli = Cli::parse_from(["pokedex", "--cache-ttl", "18446744073709551615"]);

        let result = Config::default().with_overrides(&cli);
        assert!(matches!(result, Err(PokedexError::Config(_))));
    }

    #[test]
    fn test_validate_bounds_sweep_interval() {
        let at_limit = Config {
            cache_ttl: MAX_CACHE_TTL_SECS,
            sweep_interval: Some(MAX_CACHE_TTL_SECS),
            ..Config::default()
        };
        assert!(at_limit.validate().is_ok());

        let too_long = Config {
            sweep_interval: Some(MAX_CACHE_TTL_SECS + 1),
            ..Config::default()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_sweep_interval() {
        let config = Config {
            sweep_interval: Some(0),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
