//! Specification - a predicate bound to the entity type it filters
//!
//! Composable with `|`, `&` and `!` as well as the named methods.

use crate::features::query_engine::domain::{Expr, PropertyAccess};
use crate::features::query_engine::error::QueryError;
use crate::features::query_engine::infrastructure::ExprEvaluator;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Not};

pub struct Specification<E> {
    predicate: Expr,
    _entity: PhantomData<fn(&E) -> bool>,
}

impl<E> Specification<E> {
    pub fn new(predicate: Expr) -> Self {
        Self {
            predicate,
            _entity: PhantomData,
        }
    }

    /// Disjunction of `predicates`. Empty input yields `None`, a single
    /// predicate is returned bare.
    pub fn any_of<I: IntoIterator<Item = Expr>>(predicates: I) -> Option<Self> {
        Self::combine(predicates, Expr::Or)
    }

    /// Conjunction of `predicates`, same shape rules as [`Self::any_of`]
    pub fn all_of<I: IntoIterator<Item = Expr>>(predicates: I) -> Option<Self> {
        Self::combine(predicates, Expr::And)
    }

    fn combine<I: IntoIterator<Item = Expr>>(
        predicates: I,
        connective: fn(Vec<Expr>) -> Expr,
    ) -> Option<Self> {
        let mut predicates: Vec<Expr> = predicates.into_iter().collect();
        match predicates.len() {
            0 => None,
            1 => predicates.pop().map(Self::new),
            _ => Some(Self::new(connective(predicates))),
        }
    }

    pub fn predicate(&self) -> &Expr {
        &self.predicate
    }

    pub fn into_predicate(self) -> Expr {
        self.predicate
    }

    pub fn or(self, other: Self) -> Self {
        Self::new(match (self.predicate, other.predicate) {
            (Expr::Or(mut left), Expr::Or(right)) => {
                left.extend(right);
                Expr::Or(left)
            }
            (Expr::Or(mut left), right) => {
                left.push(right);
                Expr::Or(left)
            }
            (left, right) => Expr::Or(vec![left, right]),
        })
    }

    pub fn and(self, other: Self) -> Self {
        Self::new(match (self.predicate, other.predicate) {
            (Expr::And(mut left), Expr::And(right)) => {
                left.extend(right);
                Expr::And(left)
            }
            (Expr::And(mut left), right) => {
                left.push(right);
                Expr::And(left)
            }
            (left, right) => Expr::And(vec![left, right]),
        })
    }

    /// `self AND other`, or `self` unchanged when `other` is absent
    pub fn and_maybe(self, other: Option<Self>) -> Self {
        match other {
            Some(other) => self.and(other),
            None => self,
        }
    }

    pub fn negate(self) -> Self {
        match self.predicate {
            Expr::Not(inner) => Self::new(*inner),
            predicate => Self::new(Expr::Not(Box::new(predicate))),
        }
    }

    pub fn is_satisfied_by(&self, entity: &E) -> bool
    where
        E: PropertyAccess,
    {
        ExprEvaluator::eval(&self.predicate, entity)
    }

    /// Order-insensitive fingerprint of the predicate
    pub fn fingerprint(&self) -> Result<String, QueryError> {
        self.predicate.fingerprint()
    }
}

impl<E> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Self::new(self.predicate.clone())
    }
}

impl<E> PartialEq for Specification<E> {
    fn eq(&self, other: &Self) -> bool {
        self.predicate == other.predicate
    }
}

impl<E> fmt::Debug for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("entity", &std::any::type_name::<E>())
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl<E> fmt::Display for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.predicate)
    }
}

impl<E> BitOr for Specification<E> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl<E> BitAnd for Specification<E> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<E> Not for Specification<E> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}
