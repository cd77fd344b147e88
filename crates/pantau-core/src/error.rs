//! Error types for the monitoring library.
//!
//! Only the edges of the library can fail: reading a snapshot from disk,
//! decoding its JSON, and resolving configuration such as the
//! default snapshot path or an evaluation date. The timeline builder and the
//! status classifier are total over their input and never return these.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all monitoring operations.
#[derive(Error, Debug)]
pub enum PantauError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PantauError {
        PantauError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PantauError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for monitoring operations
pub type Result<T> = std::result::Result<T, PantauError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PantauError::invalid_input("today").with_reason("not a date");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'today': not a date"
        );
    }

    #[test]
    fn test_file_system_error_names_path() {
        let err = PantauError::file_system(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(
            err.to_string(),
            "File system error at path '/tmp/missing.json': gone"
        );
    }

    #[test]
    fn test_serialization_from_serde_json() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PantauError = source.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
