//! Error types for the configuration and logging layers.
//!
//! Widget operations themselves never fail.

use thiserror::Error;

/// Errors from [`ToggleConfig::validate`](crate::ToggleConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The widget id is empty.
    #[error("Widget id must not be empty")]
    EmptyId,

    /// The widget id contains whitespace.
    #[error("Widget id '{0}' must not contain whitespace")]
    InvalidId(String),

    /// The control label is empty or only whitespace.
    #[error("Button label must not be empty")]
    EmptyLabel,
}

/// Errors from [`init_file_logger`](crate::logging::init_file_logger).
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be created.
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger is already installed.
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
