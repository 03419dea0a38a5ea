//! Custom error types for the AgentCore tool layer
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for AgentCore tool operations
#[derive(Error, Debug)]
pub enum AgentCoreError {
    /// Browser sandbox client errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Code interpreter sandbox client errors
    #[error("Code interpreter error: {0}")]
    CodeInterpreter(String),

    /// No active sandbox session for the requested operation
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for AgentCore tool operations
pub type Result<T> = std::result::Result<T, AgentCoreError>;

impl AgentCoreError {
    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a code interpreter error
    pub fn code_interpreter(msg: impl Into<String>) -> Self {
        Self::CodeInterpreter(msg.into())
    }

    /// Create a session error
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
