//! Query engine domain - values, expressions, comparators, entity ports

pub mod comparator;
pub mod entity;
pub mod expression;
pub mod value;

pub use comparator::{Comparator, ComparisonStrategy};
pub use entity::{Entity, PropertyAccess};
pub use expression::{CompareOp, CompareStrategy, Expr, ExprBuilder};
pub use value::{Value, ValueKind};
