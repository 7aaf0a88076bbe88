// Expression AST - storage-neutral predicates
//
// A predicate is plain data: a tree of field references, literals,
// comparisons and boolean connectives. Repositories translate it into
// their own query language or evaluate it in memory.
//
// Canonical form (sorted connective operands, normalized floats) gives
// logically equivalent predicates the same fingerprint.

use super::value::Value;
use crate::features::query_engine::error::QueryError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Expression AST for filtering (fully serializable)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Expr {
    // Field access
    Field(String),

    // Literals
    Literal(Value),

    // Equality, defined for every value kind
    Eq(Box<Expr>, Box<Expr>),

    // Ordering comparison
    Compare {
        op: CompareOp,
        strategy: CompareStrategy,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    // Boolean logic
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),

    // Null checks
    IsNull(Box<Expr>),
    IsNotNull(Box<Expr>),
}

/// Ordering operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
        }
    }

    /// Whether `left.cmp(right)` satisfies the operator
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Gte => ordering != Ordering::Less,
        }
    }
}

/// How the two sides of an ordering comparison are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareStrategy {
    /// Int/Float compared by numeric value
    Numeric,
    /// Same-kind natural ordering (strings, booleans, dates, timestamps)
    Ordered,
}

impl Expr {
    /// Canonicalize expression for deterministic hashing
    ///
    /// Rules:
    /// 1. And/Or operands sorted by serialized representation
    /// 2. Float NaN rejected, -0.0 normalized to 0.0
    pub fn canonicalize(self) -> Result<Self, QueryError> {
        match self {
            Expr::And(exprs) => Ok(Expr::And(Self::canonical_operands(exprs)?)),
            Expr::Or(exprs) => Ok(Expr::Or(Self::canonical_operands(exprs)?)),

            Expr::Literal(value) => Ok(Expr::Literal(Self::canonical_value(value)?)),

            Expr::Eq(left, right) => Ok(Expr::Eq(
                Box::new(left.canonicalize()?),
                Box::new(right.canonicalize()?),
            )),
            Expr::Compare {
                op,
                strategy,
                left,
                right,
            } => Ok(Expr::Compare {
                op,
                strategy,
                left: Box::new(left.canonicalize()?),
                right: Box::new(right.canonicalize()?),
            }),

            Expr::Not(e) => Ok(Expr::Not(Box::new(e.canonicalize()?))),
            Expr::IsNull(e) => Ok(Expr::IsNull(Box::new(e.canonicalize()?))),
            Expr::IsNotNull(e) => Ok(Expr::IsNotNull(Box::new(e.canonicalize()?))),

            field @ Expr::Field(_) => Ok(field),
        }
    }

    fn canonical_operands(exprs: Vec<Expr>) -> Result<Vec<Expr>, QueryError> {
        let mut canonical = exprs
            .into_iter()
            .map(Expr::canonicalize)
            .collect::<Result<Vec<_>, _>>()?;
        // Sort by JSON serialization for determinism
        canonical.sort_by_cached_key(|e| serde_json::to_string(e).unwrap_or_default());
        Ok(canonical)
    }

    fn canonical_value(value: Value) -> Result<Value, QueryError> {
        match value {
            Value::Float(f) if f.is_nan() => Err(QueryError::NaNNotAllowed),
            Value::Float(f) if f == 0.0 => Ok(Value::Float(0.0)),
            Value::List(items) => Ok(Value::List(
                items
                    .into_iter()
                    .map(Self::canonical_value)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            other => Ok(other),
        }
    }

    /// Deterministic hash of the canonical form
    pub fn hash_canonical(&self) -> Result<[u8; 32], QueryError> {
        let canonical = self.clone().canonicalize()?;
        let serialized = serde_json::to_string(&canonical)
            .map_err(|e| QueryError::InvalidStructure(e.to_string()))?;
        Ok(blake3::hash(serialized.as_bytes()).into())
    }

    /// Hex form of [`Expr::hash_canonical`], usable as a cache key
    pub fn fingerprint(&self) -> Result<String, QueryError> {
        let canonical = self.clone().canonicalize()?;
        let serialized = serde_json::to_string(&canonical)
            .map_err(|e| QueryError::InvalidStructure(e.to_string()))?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }

    /// Field names referenced anywhere in the tree, in visiting order
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Field(name) => out.push(name),
            Expr::Literal(_) => {}
            Expr::Eq(l, r) | Expr::Compare { left: l, right: r, .. } => {
                l.collect_fields(out);
                r.collect_fields(out);
            }
            Expr::And(exprs) | Expr::Or(exprs) => {
                exprs.iter().for_each(|e| e.collect_fields(out));
            }
            Expr::Not(e) | Expr::IsNull(e) | Expr::IsNotNull(e) => e.collect_fields(out),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Field(name) => f.write_str(name),
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Eq(l, r) => write!(f, "{} = {}", l, r),
            Expr::Compare { op, left, right, .. } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            Expr::And(exprs) => write_connective(f, exprs, "AND", "TRUE"),
            Expr::Or(exprs) => write_connective(f, exprs, "OR", "FALSE"),
            Expr::Not(e) => write!(f, "NOT ({})", e),
            Expr::IsNull(e) => write!(f, "{} IS NULL", e),
            Expr::IsNotNull(e) => write!(f, "{} IS NOT NULL", e),
        }
    }
}

fn write_connective(
    f: &mut fmt::Formatter<'_>,
    exprs: &[Expr],
    keyword: &str,
    empty: &str,
) -> fmt::Result {
    if exprs.is_empty() {
        return f.write_str(empty);
    }
    f.write_str("(")?;
    for (i, e) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", keyword)?;
        }
        write!(f, "{}", e)?;
    }
    f.write_str(")")
}

/// Expression builder for ergonomic construction
pub struct ExprBuilder;

impl ExprBuilder {
    /// Create field reference
    pub fn field(name: &str) -> Expr {
        Expr::Field(name.to_string())
    }

    /// Create literal value
    pub fn literal<T: Into<Value>>(value: T) -> Expr {
        Expr::Literal(value.into())
    }

    /// Equal comparison
    pub fn eq(field: &str, value: impl Into<Value>) -> Expr {
        Expr::Eq(
            Box::new(Self::field(field)),
            Box::new(Self::literal(value)),
        )
    }

    /// Ordering comparison with an explicit strategy
    pub fn compare(
        op: CompareOp,
        strategy: CompareStrategy,
        field: &str,
        value: impl Into<Value>,
    ) -> Expr {
        Expr::Compare {
            op,
            strategy,
            left: Box::new(Self::field(field)),
            right: Box::new(Self::literal(value)),
        }
    }

    /// Numeric comparison (Int/Float)
    pub fn numeric(op: CompareOp, field: &str, value: impl Into<Value>) -> Expr {
        Self::compare(op, CompareStrategy::Numeric, field, value)
    }

    /// Same-kind ordered comparison
    pub fn ordered(op: CompareOp, field: &str, value: impl Into<Value>) -> Expr {
        Self::compare(op, CompareStrategy::Ordered, field, value)
    }

    /// Logical AND
    pub fn and(exprs: Vec<Expr>) -> Expr {
        Expr::And(exprs)
    }

    /// Logical OR
    pub fn or(exprs: Vec<Expr>) -> Expr {
        Expr::Or(exprs)
    }

    /// Logical NOT
    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    /// Is null check
    pub fn is_null(field: &str) -> Expr {
        Expr::IsNull(Box::new(Self::field(field)))
    }

    /// Is not null check
    pub fn is_not_null(field: &str) -> Expr {
        Expr::IsNotNull(Box::new(Self::field(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_op_matches() {
        assert!(CompareOp::Lt.matches(Ordering::Less));
        assert!(!CompareOp::Lt.matches(Ordering::Equal));
        assert!(CompareOp::Lte.matches(Ordering::Equal));
        assert!(CompareOp::Gt.matches(Ordering::Greater));
        assert!(CompareOp::Gte.matches(Ordering::Equal));
        assert!(!CompareOp::Gte.matches(Ordering::Less));
    }

    #[test]
    fn test_display() {
        let expr = ExprBuilder::or(vec![
            ExprBuilder::eq("category", 2),
            ExprBuilder::numeric(CompareOp::Lt, "price", 1850),
        ]);
        assert_eq!(expr.to_string(), "(category = 2 OR price < 1850)");

        let negated = ExprBuilder::not(ExprBuilder::is_null("name"));
        assert_eq!(negated.to_string(), "NOT (name IS NULL)");

        assert_eq!(ExprBuilder::and(vec![]).to_string(), "TRUE");
        assert_eq!(ExprBuilder::or(vec![]).to_string(), "FALSE");
    }

    #[test]
    fn test_fields() {
        let expr = ExprBuilder::and(vec![
            ExprBuilder::eq("name", "goody"),
            ExprBuilder::or(vec![
                ExprBuilder::ordered(CompareOp::Gte, "released", "2020"),
                ExprBuilder::is_not_null("price"),
            ]),
        ]);
        assert_eq!(expr.fields(), vec!["name", "released", "price"]);
    }

    #[test]
    fn test_serialization() {
        let expr = ExprBuilder::numeric(CompareOp::Gte, "price", 10.5);
        let json = serde_json::to_string(&expr).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }

    #[test]
    fn test_canonicalize_or_ordering() {
        let a = ExprBuilder::or(vec![ExprBuilder::eq("c", 3), ExprBuilder::eq("c", 1)]);
        let b = ExprBuilder::or(vec![ExprBuilder::eq("c", 1), ExprBuilder::eq("c", 3)]);
        assert_ne!(a, b);
        assert_eq!(a.clone().canonicalize().unwrap(), b.clone().canonicalize().unwrap());
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn test_canonicalize_nested() {
        let a = ExprBuilder::and(vec![
            ExprBuilder::or(vec![ExprBuilder::eq("x", 2), ExprBuilder::eq("x", 1)]),
            ExprBuilder::eq("y", "b"),
        ]);
        let b = ExprBuilder::and(vec![
            ExprBuilder::eq("y", "b"),
            ExprBuilder::or(vec![ExprBuilder::eq("x", 1), ExprBuilder::eq("x", 2)]),
        ]);
        assert_eq!(a.hash_canonical().unwrap(), b.hash_canonical().unwrap());
    }

    #[test]
    fn test_canonicalize_float_normalization() {
        let neg = ExprBuilder::eq("x", -0.0);
        let pos = ExprBuilder::eq("x", 0.0);
        assert_eq!(neg.fingerprint().unwrap(), pos.fingerprint().unwrap());
    }

    #[test]
    fn test_canonicalize_nan_rejection() {
        let expr = ExprBuilder::numeric(CompareOp::Lt, "x", f64::NAN);
        assert_eq!(expr.canonicalize(), Err(QueryError::NaNNotAllowed));
    }

    #[test]
    fn test_fingerprint_distinguishes_strategy() {
        let numeric = ExprBuilder::numeric(CompareOp::Lt, "x", 1);
        let ordered = ExprBuilder::ordered(CompareOp::Lt, "x", 1);
        assert_ne!(numeric.fingerprint().unwrap(), ordered.fingerprint().unwrap());
    }
}
