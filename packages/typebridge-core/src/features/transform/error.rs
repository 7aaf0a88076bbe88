//! Transform errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A required argument was absent
    #[error("{argument} == null")]
    NullArgument { argument: &'static str },
}

impl TransformError {
    pub fn null_argument(argument: &'static str) -> Self {
        TransformError::NullArgument { argument }
    }
}
