//! Diagnostic sinks for predicate construction
//!
//! Every predicate the builder produces is reported to a sink. The
//! default sink forwards to `tracing`; tests swap in [`RecordingSink`].

use crate::features::query_engine::domain::{Comparator, Value};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// `tracing` target for predicate events
pub const QUERY_TARGET: &str = "typebridge::query";

/// One predicate built for `entity.property <comparator> value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredicateEvent {
    pub entity: &'static str,
    pub property: String,
    pub comparator: Comparator,
    pub value: Value,
}

impl PredicateEvent {
    pub fn new(
        entity: &'static str,
        property: impl Into<String>,
        comparator: Comparator,
        value: Value,
    ) -> Self {
        Self {
            entity,
            property: property.into(),
            comparator,
            value,
        }
    }
}

impl fmt::Display for PredicateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} {} {}",
            self.entity,
            self.property,
            self.comparator.symbol(),
            self.value
        )
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn predicate_built(&self, event: &PredicateEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    #[default]
    Debug,
    Trace,
}

/// Forwards events to `tracing` under [`QUERY_TARGET`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    level: DiagnosticLevel,
}

impl TracingSink {
    pub fn new(level: DiagnosticLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> DiagnosticLevel {
        self.level
    }
}

impl DiagnosticSink for TracingSink {
    fn predicate_built(&self, event: &PredicateEvent) {
        match self.level {
            DiagnosticLevel::Debug => debug!(
                target: QUERY_TARGET,
                entity = event.entity,
                property = %event.property,
                comparator = event.comparator.symbol(),
                value = %event.value,
                "{}", event
            ),
            DiagnosticLevel::Trace => trace!(
                target: QUERY_TARGET,
                entity = event.entity,
                property = %event.property,
                comparator = event.comparator.symbol(),
                value = %event.value,
                "{}", event
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn predicate_built(&self, _event: &PredicateEvent) {}
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PredicateEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PredicateEvent> {
        self.events.lock().clone()
    }

    /// Rendered events, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.events.lock().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn take(&self) -> Vec<PredicateEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl DiagnosticSink for RecordingSink {
    fn predicate_built(&self, event: &PredicateEvent) {
        self.events.lock().push(event.clone());
    }
}
