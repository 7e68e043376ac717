//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>` so failures propagate
//! with `?` and are mapped to an exit code in one place.

use std::fmt;

use shoe_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn engine_errors_keep_their_source() {
        let e: CliError = GameError::EmptyDeck.into();
        assert_eq!(e.to_string(), "Engine error: Cannot draw from an empty deck");
        assert!(e.source().is_some());
    }

    #[test]
    fn config_errors_are_flattened() {
        let e: CliError = ConfigError::Invalid("bad".into()).into();
        assert_eq!(e.to_string(), "Configuration error: bad");
        assert!(e.source().is_none());
    }
}
