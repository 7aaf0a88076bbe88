//! PredicateBuilder - optional filter values to storage-neutral predicates
//!
//! Absent values (`None`, or a value that converts to [`Value::Null`])
//! produce no predicate at all, so callers can chain optional search
//! criteria without branching:
//!
//! ```
//! use typebridge_core::{Comparator, NoopSink, PredicateBuilder, Value};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! type Row = HashMap<String, Value>;
//!
//! let builder = PredicateBuilder::with_sink(Arc::new(NoopSink));
//! let price = builder
//!     .build_predicate::<Row, _>("price", Some(1850), Comparator::Lt)
//!     .unwrap();
//! assert_eq!(price.unwrap().to_string(), "price < 1850");
//!
//! let nothing = builder
//!     .build_predicate::<Row, i64>("price", None, Comparator::Lt)
//!     .unwrap();
//! assert!(nothing.is_none());
//! ```

use super::specification::Specification;
use crate::config::TypebridgeConfig;
use crate::features::query_engine::domain::{Comparator, Entity, Expr, Value};
use crate::features::query_engine::error::QueryError;
use crate::features::query_engine::infrastructure::{
    DiagnosticSink, NoopSink, PredicateEvent, TracingSink,
};
use crate::shared::short_type_name;
use std::fmt;
use std::sync::Arc;

/// Default cap on the number of disjuncts in one specification
pub const DEFAULT_MAX_DISJUNCTS: usize = 1000;

#[derive(Clone)]
pub struct PredicateBuilder {
    default_comparator: Comparator,
    max_disjuncts: usize,
    sink: Arc<dyn DiagnosticSink>,
}

impl PredicateBuilder {
    /// Builder reporting to `tracing` at debug level
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink::default()))
    }

    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            default_comparator: Comparator::default(),
            max_disjuncts: DEFAULT_MAX_DISJUNCTS,
            sink,
        }
    }

    pub fn from_config(config: &TypebridgeConfig) -> Self {
        let sink: Arc<dyn DiagnosticSink> = if config.diagnostics.enabled {
            Arc::new(TracingSink::new(config.diagnostics.level))
        } else {
            Arc::new(NoopSink)
        };
        Self::with_sink(sink)
            .default_comparator(config.query.default_comparator)
            .max_disjuncts(config.query.max_disjuncts)
    }

    pub fn default_comparator(mut self, comparator: Comparator) -> Self {
        self.default_comparator = comparator;
        self
    }

    pub fn max_disjuncts(mut self, limit: usize) -> Self {
        self.max_disjuncts = limit;
        self
    }

    pub fn comparator(&self) -> Comparator {
        self.default_comparator
    }

    pub fn disjunct_limit(&self) -> usize {
        self.max_disjuncts
    }

    pub fn sink(&self) -> &Arc<dyn DiagnosticSink> {
        &self.sink
    }

    /// `property <comparator> value` against entity `E`.
    ///
    /// Returns `Ok(None)` when the value is absent. Ordering comparators on
    /// values without an ordering fail with
    /// [`QueryError::UnsupportedComparisonType`].
    pub fn build_predicate<E, V>(
        &self,
        property: &str,
        value: Option<V>,
        comparator: Comparator,
    ) -> Result<Option<Expr>, QueryError>
    where
        E: Entity,
        V: Into<Value>,
    {
        let built = self.predicate_with_event::<E, V>(property, value, comparator)?;
        Ok(built.map(|(predicate, event)| {
            self.sink.predicate_built(&event);
            predicate
        }))
    }

    /// Builds the predicate and its audit event without reporting it.
    fn predicate_with_event<E, V>(
        &self,
        property: &str,
        value: Option<V>,
        comparator: Comparator,
    ) -> Result<Option<(Expr, PredicateEvent)>, QueryError>
    where
        E: Entity,
        V: Into<Value>,
    {
        let Some(value) = value.map(Into::into).filter(|v: &Value| !v.is_null()) else {
            return Ok(None);
        };

        let predicate =
            comparator.predicate_for(property, value.clone(), short_type_name::<V>())?;
        let event = PredicateEvent::new(E::entity_name(), property, comparator, value);
        Ok(Some((predicate, event)))
    }

    /// [`Self::build_predicate`] with the configured default comparator
    pub fn build_default_predicate<E, V>(
        &self,
        property: &str,
        value: Option<V>,
    ) -> Result<Option<Expr>, QueryError>
    where
        E: Entity,
        V: Into<Value>,
    {
        self.build_predicate::<E, V>(property, value, self.default_comparator)
    }

    /// Map the value first (e.g. enum to stored id). The mapper is not
    /// called for an absent value.
    pub fn build_predicate_mapped<E, V, W, F>(
        &self,
        property: &str,
        value: Option<V>,
        comparator: Comparator,
        mapper: F,
    ) -> Result<Option<Expr>, QueryError>
    where
        E: Entity,
        W: Into<Value>,
        F: FnOnce(V) -> W,
    {
        self.build_predicate::<E, W>(property, value.map(mapper), comparator)
    }

    /// Single-value specification, `None` when the value is absent
    pub fn build_value_specification<E, V>(
        &self,
        property: &str,
        value: Option<V>,
        comparator: Comparator,
    ) -> Result<Option<Specification<E>>, QueryError>
    where
        E: Entity,
        V: Into<Value>,
    {
        Ok(self
            .build_predicate::<E, V>(property, value, comparator)?
            .map(Specification::new))
    }

    /// Disjunction over `values`: an entity matches when any value matches.
    ///
    /// Absent or empty input yields `None`, absent elements are skipped and
    /// a single predicate is returned without an enclosing OR. Audit events
    /// are reported only once the whole disjunction is accepted.
    pub fn build_specification<E, V, I>(
        &self,
        property: &str,
        values: Option<I>,
        comparator: Comparator,
    ) -> Result<Option<Specification<E>>, QueryError>
    where
        E: Entity,
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let Some(values) = values else {
            return Ok(None);
        };

        let mut built = Vec::new();
        for value in values {
            if let Some(pair) = self.predicate_with_event::<E, V>(property, Some(value), comparator)? {
                built.push(pair);
            }
        }

        if built.len() > self.max_disjuncts {
            return Err(QueryError::TooManyValues {
                property: property.to_string(),
                count: built.len(),
                limit: self.max_disjuncts,
            });
        }

        let predicates = built
            .into_iter()
            .map(|(predicate, event)| {
                self.sink.predicate_built(&event);
                predicate
            })
            .collect::<Vec<_>>();
        Ok(Specification::any_of(predicates))
    }

    /// [`Self::build_specification`] after mapping every value
    pub fn build_specification_mapped<E, V, W, I, F>(
        &self,
        property: &str,
        values: Option<I>,
        comparator: Comparator,
        mapper: F,
    ) -> Result<Option<Specification<E>>, QueryError>
    where
        E: Entity,
        W: Into<Value>,
        I: IntoIterator<Item = V>,
        F: FnMut(V) -> W,
    {
        let mapped = values.map(|values| values.into_iter().map(mapper));
        self.build_specification::<E, W, _>(property, mapped, comparator)
    }
}

impl Default for PredicateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PredicateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateBuilder")
            .field("default_comparator", &self.default_comparator)
            .field("max_disjuncts", &self.max_disjuncts)
            .finish_non_exhaustive()
    }
}
