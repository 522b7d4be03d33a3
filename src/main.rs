//! Pokedex - an interactive PokeAPI client
//!
//! Pages through location areas and explores them, with an in-memory TTL
//! cache in front of every API request.

use std::io;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Cli, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables and CLI flags
/// 3. Create the response cache and its sweeper
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
/// 5. Stop the sweeper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of command output,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()
        .with_overrides(&cli)
        .context("failed to load configuration")?;
    info!(
        "Configuration loaded: cache_ttl={}s, sweep_interval={}s, api_base_url={}",
        config.cache_ttl,
        config.sweep_interval().as_secs(),
        config.api_base_url
    );

    let cache = Cache::with_sweep_interval(config.cache_ttl(), config.sweep_interval());
    debug!(staleness_bound = ?cache.staleness_bound(), "Response cache initialized");

    let client = PokeApiClient::new(config.api_base_url.clone(), cache);
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    let result = repl::run(&mut session, stdin, &mut stdout).await;

    let stats = session.client().cache().stats().await;
    info!(
        hits = stats.hits,
        misses = stats.misses,
        expired = stats.expired,
        "Cache statistics at exit"
    );
    session.client().cache().shutdown();

    result.context("reading standard input")
}
