//! Attribute converter port

use crate::Result;

/// Converts a domain attribute to its stored column value and back.
///
/// Reads come in two flavours: [`to_attribute`](Self::to_attribute) for
/// persisted data that may be stale (never fails), and
/// [`try_to_attribute`](Self::try_to_attribute) for input that must be
/// valid.
pub trait AttributeConverter<A>: Send + Sync {
    type Column;

    /// Absent attribute is stored as an absent column.
    fn to_column(&self, attribute: Option<&A>) -> Option<Self::Column>;

    /// Lenient read
    fn to_attribute(&self, column: Option<&Self::Column>) -> Option<A>;

    /// Strict read
    fn try_to_attribute(&self, column: Option<&Self::Column>) -> Result<Option<A>>;
}
