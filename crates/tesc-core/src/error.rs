//! Error types for tesc

use thiserror::Error;

/// Main error type for tesc operations
#[derive(Error, Debug)]
pub enum TescError {
    /// A bright variant was requested for a color that is already bright
    #[error("{channel} color is already bright (code {code})")]
    AlreadyBright {
        /// "Foreground" or "Background"
        channel: &'static str,
        /// Code of the rejected color
        code: u8,
    },

    /// A color or style name that does not match any known value
    #[error("Unknown {kind} name: {name:?}")]
    UnknownName {
        /// What kind of value was being parsed
        kind: &'static str,
        /// The offending input
        name: String,
    },

    /// IO error while writing escape sequences or reading files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for tesc operations
pub type Result<T> = std::result::Result<T, TescError>;
