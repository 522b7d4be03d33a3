//! PokeAPI response models
//!
//! Serde structs for the JSON bodies returned by the location-area endpoints.
//! Only the fields the commands print are modeled; everything else is ignored.

pub mod location;

pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
