//! Choice - labelled identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier paired with a human readable label (select boxes, option lists).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice<Id> {
    pub id: Id,
    pub label: String,
}

impl<Id> Choice<Id> {
    pub fn new(id: Id, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl<Id: fmt::Display> fmt::Display for Choice<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.label)
    }
}
