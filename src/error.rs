//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself has no
//! error type: a miss is reported as `None`, never as an error.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for fetching, parsing and command handling.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("Response failed with status code: {status} and\nbody: {body}")]
    Status { status: u16, body: String },

    /// Payload did not match the expected JSON shape
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("Missing argument for command {0}")]
    MissingArgument(&'static str),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PokedexError::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
    }

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument("explore");
        assert_eq!(err.to_string(), "Missing argument for command explore");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: PokedexError = serde_err.into();
        assert!(matches!(err, PokedexError::Parse(_)));
    }
}
