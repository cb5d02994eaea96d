//! Domain-level error type.
//!
//! Errors are transport agnostic: the HTTP adapter maps them onto status
//! codes and the wire envelope. Every failure point produces its error
//! deliberately rather than funnelling through a catch-all.

use std::fmt;

/// Stable machine-readable category describing the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request payload is missing or fails validation.
    InvalidRequest,
    /// The requested entity does not exist under the given key.
    NotFound,
    /// An unexpected failure inside the domain or an adapter.
    InternalError,
}

/// Domain error carrying a category and a human-readable message.
///
/// The message for [`ErrorCode::InternalError`] is never sent to clients;
/// the HTTP adapter redacts it to a generic string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Construct an error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The request is malformed or fails validation.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// The entity addressed by the request is absent.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// An unexpected internal failure. The message is kept for logs only.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Stable error category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
