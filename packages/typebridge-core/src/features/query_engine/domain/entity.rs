//! Entity ports
//!
//! Predicates address entities by property name. Anything that can hand
//! out a [`Value`] per property can be filtered in memory.

use super::value::Value;
use crate::shared::short_type_name;
use std::collections::{BTreeMap, HashMap};

/// Property lookup by name. `None` means the entity has no such property.
pub trait PropertyAccess {
    fn property(&self, name: &str) -> Option<Value>;
}

/// A persisted domain type that predicates can target.
pub trait Entity: PropertyAccess {
    /// Name used in diagnostics (`Item.price < 1850`)
    fn entity_name() -> &'static str
    where
        Self: Sized,
    {
        short_type_name::<Self>()
    }
}

impl PropertyAccess for HashMap<String, Value> {
    fn property(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl PropertyAccess for BTreeMap<String, Value> {
    fn property(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Entity for HashMap<String, Value> {
    fn entity_name() -> &'static str {
        "Row"
    }
}

impl Entity for BTreeMap<String, Value> {
    fn entity_name() -> &'static str {
        "Row"
    }
}
