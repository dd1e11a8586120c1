use std::fmt;
use thiserror::Error;

/// The error type for azsas operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
///
/// Every kind means the caller supplied invalid input. Nothing here is
/// transient, so retrying with the same input yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A connection string segment has no `=` or an empty key
    MalformedSegment,

    /// The account key is not valid base64
    InvalidKeyEncoding,

    /// Configuration error (missing entries, unsupported values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

// Convenience constructors
impl Error {
    /// Create a malformed segment error
    pub fn malformed_segment(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedSegment, message)
    }

    /// Create an invalid key encoding error
    pub fn invalid_key_encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidKeyEncoding, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedSegment => write!(f, "malformed connection string segment"),
            ErrorKind::InvalidKeyEncoding => write!(f, "invalid account key encoding"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
