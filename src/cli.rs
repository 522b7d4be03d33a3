//! Command-line interface parsing for the Pokedex
//!
//! Flags override the environment-based [`Config`](crate::config::Config).

use clap::Parser;

/// Pokedex - browse PokeAPI location areas from an interactive prompt
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex for PokeAPI location areas")]
#[command(version)]
pub struct Cli {
    /// Seconds before a cached API response is discarded
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Seconds between cache sweeps (defaults to the cache ttl)
    #[arg(long, value_name = "SECS")]
    pub sweep_interval: Option<u64>,

    /// Root URL of the PokeAPI
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pokedex"]);
        assert!(cli.cache_ttl.is_none());
        assert!(cli.sweep_interval.is_none());
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn test_cli_parse_cache_ttl() {
        let cli = Cli::parse_from(["pokedex", "--cache-ttl", "60"]);
        assert_eq!(cli.cache_ttl, Some(60));
    }

    #[test]
    fn test_cli_rejects_negative_ttl() {
        let result = Cli::try_parse_from(["pokedex", "--cache-ttl", "-1"]);
        assert!(result.is_err());
    }
}
