//! Error types for samplerctl
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LscpError
pub type Result<T> = std::result::Result<T, LscpError>;

/// Unified error type for samplerctl operations
#[derive(Debug, Error)]
pub enum LscpError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("socket connection broken")]
    ConnectionBroken,

    #[error("socket operation timed out")]
    Timeout,

    #[error("no host configured to connect to")]
    NoHost,

    // -------------------------------------------------------------------------
    // Protocol Errors (reported by the server)
    // -------------------------------------------------------------------------
    #[error("server error {code}: {message}")]
    Protocol { code: i32, message: String },

    /// A `WRN` status line, promoted to an error because the client was
    /// configured with warnings-as-errors.
    #[error("server warning {code}: {message}")]
    Warning { code: i32, message: String },

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("malformed parameter line: {0:?}")]
    MalformedParameterLine(String),

    #[error("unknown parameter type: {0:?}")]
    UnknownType(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
}
