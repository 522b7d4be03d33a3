//! REPL command parsing
//!
//! Turns one line of user input into a [`Command`].

/// Name and help text of every command, in the order `help` prints them.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    (
        "map",
        "Displays the names of the next 20 location areas in the Pokemon world",
    ),
    ("mapb", "Displays the names of the previous 20 location areas"),
    ("explore", "Lists the Pokemon found in a location area: explore <area>"),
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Next page of location areas
    Map,
    /// Previous page of location areas
    MapBack,
    /// Pokemon in the named area; the argument may be missing
    Explore(Option<String>),
    Unknown(String),
}

impl Command {
    // == Parse ==
    /// Parses a raw input line. Returns `None` for blank input.
    ///
    /// Words after the first argument are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let words = clean_input(line);
        let (name, rest) = words.split_first()?;
        let arg = rest.first().cloned();

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(arg),
            _ => Command::Unknown(name.clone()),
        };
        Some(command)
    }
}

/// Trims, lowercases and splits input on any whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
