//! REPL Module
//!
//! Interactive prompt that pages through location areas and explores them.
//!
//! # Commands
//! - `help` - Print usage
//! - `exit` - Leave the prompt
//! - `map` / `mapb` - Next / previous page of location areas. Past the last
//!   page `map` prints `you're on the last page` rather than wrapping to the
//!   first; before the first page `mapb` prints `you're on the first page`.
//! - `explore <area>` - Pokemon found in an area

pub mod commands;
pub mod session;

pub use commands::{clean_input, Command, COMMANDS};
pub use session::{run, Flow, Session, PROMPT};
