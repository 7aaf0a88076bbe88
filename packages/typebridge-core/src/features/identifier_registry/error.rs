//! Registry error types

use thiserror::Error;

/// Errors raised while building or querying an [`IdentifierRegistry`].
///
/// Values and ids are captured in their `Debug` rendering so the error stays
/// independent of the registry's type parameters.
///
/// [`IdentifierRegistry`]: super::IdentifierRegistry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two distinct values projected onto the same identifier
    #[error("Trying to store different values under the same key ({id}) : {first}, {second}")]
    DuplicateIdentifier {
        id: String,
        first: String,
        second: String,
    },

    /// Strict decode of an identifier nothing maps to
    #[error("Unknown {type_name} value : {id}, supported values are : [{}]", known.join(", "))]
    UnknownIdentifier {
        type_name: &'static str,
        id: String,
        known: Vec<String>,
    },
}

impl RegistryError {
    pub(crate) fn duplicate(
        id: impl std::fmt::Debug,
        first: impl std::fmt::Debug,
        second: impl std::fmt::Debug,
    ) -> Self {
        Self::DuplicateIdentifier {
            id: format!("{:?}", id),
            first: format!("{:?}", first),
            second: format!("{:?}", second),
        }
    }

    pub(crate) fn unknown<E: std::fmt::Debug>(
        type_name: &'static str,
        id: impl std::fmt::Debug,
        known: &[E],
    ) -> Self {
        Self::UnknownIdentifier {
            type_name,
            id: format!("{:?}", id),
            known: known.iter().map(|e| format!("{:?}", e)).collect(),
        }
    }

    /// Whether this error came from a strict decode (recoverable by the caller)
    pub fn is_unknown_identifier(&self) -> bool {
        matches!(self, Self::UnknownIdentifier { .. })
    }
}
