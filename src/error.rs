//! Validation error types

use thiserror::Error;

/// Validation failures
///
/// Both variants carry the fully rendered diagnostic, which is what gets
/// displayed. The message is meant to reach the author unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value has the wrong fundamental type (an integration defect upstream)
    #[error("{0}")]
    Type(String),

    /// A value violates a format, alphabet, length or consistency rule
    #[error("{0}")]
    Format(String),
}

/// The two failure kinds a validator can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong fundamental type
    Type,
    /// Right type, wrong content
    Format,
}

impl ValidationError {
    /// The rendered diagnostic
    pub fn message(&self) -> &str {
        match self {
            Self::Type(message) | Self::Format(message) => message,
        }
    }

    /// Which of the two failure kinds this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(_) => ErrorKind::Type,
            Self::Format(_) => ErrorKind::Format,
        }
    }

    /// Returns true for a type violation
    pub fn is_type(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Returns true for a format violation
    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}

/// Result type alias using ValidationError
pub type Result<T> = std::result::Result<T, ValidationError>;
