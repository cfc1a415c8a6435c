// src/error.rs

//! Error types for the apt-cache wrapper

use thiserror::Error;

/// Errors raised while configuring or running apt-cache
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure (config file, capture file, process spawn)
    #[error("I/O error: {0}")]
    IoError(String),

    /// Malformed configuration file or unknown subcommand name
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The tool could not be found or started
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The tool ran but exited unsuccessfully
    #[error("Command failed: {command} (exit code {code})")]
    CommandFailed { command: String, code: i32 },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
