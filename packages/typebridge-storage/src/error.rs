//! Error types for typebridge-storage

use std::fmt;
use thiserror::Error;
use typebridge_core::{ConfigError, QueryError, RegistryError};

/// Storage error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Attribute <-> column conversion failed
    Conversion,
    /// Stored identifier with no matching value (strict read)
    UnknownValue,
    /// Specification could not be built or executed
    Query,
    /// No entity matched
    NotFound,
    /// Configuration or registry setup errors
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Conversion => "conversion",
            ErrorKind::UnknownValue => "unknown_value",
            ErrorKind::Query => "query",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct StorageError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl StorageError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conversion, message)
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Query, message)
    }

    pub fn not_found(entity: &str, filter: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("No {} matches {}", entity, filter),
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl From<RegistryError> for StorageError {
    fn from(err: RegistryError) -> Self {
        let kind = if err.is_unknown_identifier() {
            ErrorKind::UnknownValue
        } else {
            ErrorKind::Config
        };
        StorageError::new(kind, err.to_string()).with_source(err)
    }
}

impl From<QueryError> for StorageError {
    fn from(err: QueryError) -> Self {
        StorageError::query(err.to_string()).with_source(err)
    }
}

impl From<ConfigError> for StorageError {
    fn from(err: ConfigError) -> Self {
        StorageError::config(err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = StorageError::conversion("bad column");
        assert_eq!(err.to_string(), "[conversion] bad column");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_not_found() {
        let err = StorageError::not_found("Item", "price < 10");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "[not_found] No Item matches price < 10");
    }

    #[test]
    fn test_from_query_error_keeps_source() {
        let err: StorageError = QueryError::NaNNotAllowed.into();
        assert_eq!(err.kind, ErrorKind::Query);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::UnknownValue.as_str(), "unknown_value");
        assert_eq!(ErrorKind::Config.to_string(), "config");
    }
}
