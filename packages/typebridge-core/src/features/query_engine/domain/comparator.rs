// Comparator - the closed set of comparison operators
//
// Each variant carries its own strategy as data, so turning a
// (property, value) pair into a predicate is a single match.

use super::expression::{CompareOp, CompareStrategy, Expr, ExprBuilder};
use super::value::{Value, ValueKind};
use crate::features::query_engine::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Comparator {
    #[default]
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

/// What a comparator does with a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStrategy {
    /// Works for every value kind
    Equality,
    /// Needs a value with an ordering
    Ordering(CompareOp),
}

impl Comparator {
    pub const ALL: [Comparator; 5] = [
        Comparator::Eq,
        Comparator::Lt,
        Comparator::Gt,
        Comparator::Le,
        Comparator::Ge,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Lt => "<",
            Comparator::Gt => ">",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Comparator::Eq => "eq",
            Comparator::Lt => "lt",
            Comparator::Gt => "gt",
            Comparator::Le => "le",
            Comparator::Ge => "ge",
        }
    }

    pub fn strategy(&self) -> ComparisonStrategy {
        match self {
            Comparator::Eq => ComparisonStrategy::Equality,
            Comparator::Lt => ComparisonStrategy::Ordering(CompareOp::Lt),
            Comparator::Gt => ComparisonStrategy::Ordering(CompareOp::Gt),
            Comparator::Le => ComparisonStrategy::Ordering(CompareOp::Lte),
            Comparator::Ge => ComparisonStrategy::Ordering(CompareOp::Gte),
        }
    }

    pub fn requires_ordering(&self) -> bool {
        matches!(self.strategy(), ComparisonStrategy::Ordering(_))
    }

    /// Whether this comparator accepts values of `kind`.
    pub fn supports(&self, kind: ValueKind) -> bool {
        match self.strategy() {
            ComparisonStrategy::Equality => kind != ValueKind::Null,
            ComparisonStrategy::Ordering(_) => {
                matches!(kind, ValueKind::Numeric | ValueKind::Ordered)
            }
        }
    }

    /// Predicate `property <op> value`.
    ///
    /// Ordering comparators reject values without an ordering and name
    /// `V` in the error. NaN never yields a predicate.
    pub fn to_predicate<V: Into<Value>>(&self, property: &str, value: V) -> Result<Expr, QueryError> {
        self.predicate_for(property, value.into(), std::any::type_name::<V>())
    }

    pub(crate) fn predicate_for(
        &self,
        property: &str,
        value: Value,
        type_name: &'static str,
    ) -> Result<Expr, QueryError> {
        if value.contains_nan() {
            return Err(QueryError::NaNNotAllowed);
        }

        let kind = value.kind();
        if !self.supports(kind) {
            return Err(QueryError::UnsupportedComparisonType {
                comparator: *self,
                type_name,
                kind,
            });
        }

        match self.strategy() {
            ComparisonStrategy::Equality => Ok(ExprBuilder::eq(property, value)),
            ComparisonStrategy::Ordering(op) => {
                let strategy = match kind {
                    ValueKind::Numeric => CompareStrategy::Numeric,
                    _ => CompareStrategy::Ordered,
                };
                Ok(ExprBuilder::compare(op, strategy, property, value))
            }
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Comparator {
    type Err = QueryError;

    /// Accepts keywords (case-insensitive) or symbols
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Comparator::ALL
            .into_iter()
            .find(|c| c.symbol() == trimmed || c.keyword().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| QueryError::UnknownComparator(s.to_string()))
    }
}

impl TryFrom<String> for Comparator {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Comparator> for &'static str {
    fn from(value: Comparator) -> Self {
        value.keyword()
    }
}
