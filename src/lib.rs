//! Pokedex - an interactive PokeAPI client
//!
//! Pages through location areas and explores them, with an in-memory TTL
//! cache in front of every API request.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use cli::Cli;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
