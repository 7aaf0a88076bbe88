// Expression evaluator - evaluates Expr against an in-memory entity
//
// Null handling follows SQL: a missing or null property never satisfies
// a comparison, only IS NULL.

use crate::features::query_engine::domain::{
    CompareOp, CompareStrategy, Expr, PropertyAccess, Value,
};

pub struct ExprEvaluator;

impl ExprEvaluator {
    /// Evaluate expression against an entity's properties
    pub fn eval<P: PropertyAccess + ?Sized>(expr: &Expr, entity: &P) -> bool {
        match expr {
            Expr::Field(name) => matches!(entity.property(name), Some(Value::Bool(true))),
            Expr::Literal(val) => matches!(val, Value::Bool(true)),
            Expr::Eq(left, right) => match Self::operands(left, right, entity) {
                Some((l, r)) => l.query_eq(&r),
                None => false,
            },
            Expr::Compare {
                op,
                strategy,
                left,
                right,
            } => Self::eval_compare(*op, *strategy, left, right, entity),
            Expr::And(exprs) => exprs.iter().all(|e| Self::eval(e, entity)),
            Expr::Or(exprs) => exprs.iter().any(|e| Self::eval(e, entity)),
            Expr::Not(e) => !Self::eval(e, entity),
            Expr::IsNull(e) => Self::resolve(e, entity).is_none(),
            Expr::IsNotNull(e) => Self::resolve(e, entity).is_some(),
        }
    }

    fn eval_compare<P: PropertyAccess + ?Sized>(
        op: CompareOp,
        strategy: CompareStrategy,
        left: &Expr,
        right: &Expr,
        entity: &P,
    ) -> bool {
        let Some((l, r)) = Self::operands(left, right, entity) else {
            return false;
        };
        let ordering = match strategy {
            CompareStrategy::Numeric => l.compare_numeric(&r),
            CompareStrategy::Ordered => l.compare_ordered(&r),
        };
        ordering.is_some_and(|o| op.matches(o))
    }

    fn operands<P: PropertyAccess + ?Sized>(
        left: &Expr,
        right: &Expr,
        entity: &P,
    ) -> Option<(Value, Value)> {
        Some((Self::resolve(left, entity)?, Self::resolve(right, entity)?))
    }

    /// Resolve an operand to a non-null value
    fn resolve<P: PropertyAccess + ?Sized>(expr: &Expr, entity: &P) -> Option<Value> {
        let value = match expr {
            Expr::Field(name) => entity.property(name),
            Expr::Literal(value) => Some(value.clone()),
            _ => None,
        };
        value.filter(|v| !v.is_null())
    }
}
