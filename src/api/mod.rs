//! API Module
//!
//! Cached HTTP access to the PokeAPI.
//!
//! # Endpoints
//! - `GET /location-area/` - Paginated listing of location areas
//! - `GET /location-area/{name}` - A single location area

pub mod client;

pub use client::PokeApiClient;
