//! Error types for MediScan
//!
//! The domain itself has no failure path: catalog lookups are total with
//! explicit fallbacks, and blank form input suppresses the action locally.
//! What remains is the ambient surface: terminal I/O, line editing and
//! configuration files.

use thiserror::Error;

/// Main error type for the MediScan application.
#[derive(Error, Debug)]
pub enum MediScanError {
    /// User pressed Ctrl-C at a prompt.
    #[error("Interrupted")]
    Interrupted,

    /// Line-editor failures other than interrupt/EOF.
    #[error("Readline error: {0}")]
    Readline(String),

    /// Configuration errors with context.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file parse errors.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file serialization errors.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// JSON output errors.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for MediScan operations.
pub type Result<T> = std::result::Result<T, MediScanError>;

impl MediScanError {
    /// Whether the error is the user interrupting a prompt rather than a
    /// real failure; the app treats it as a quiet exit.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, MediScanError::Interrupted)
    }
}
