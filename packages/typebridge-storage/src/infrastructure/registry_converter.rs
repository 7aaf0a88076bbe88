//! Registry-backed attribute converter
//!
//! Every enum column goes through its [`IdentifierRegistry`]: writes call
//! `to_id`, lenient reads `to_enum_fail_safe`, strict reads `to_enum`.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use typebridge_core::IdentifierRegistry;

use crate::domain::AttributeConverter;
use crate::Result;

pub struct RegistryConverter<E, Id> {
    registry: Arc<IdentifierRegistry<E, Id>>,
}

impl<E, Id> RegistryConverter<E, Id> {
    pub fn new(registry: Arc<IdentifierRegistry<E, Id>>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &IdentifierRegistry<E, Id> {
        &self.registry
    }
}

impl<E, Id> From<IdentifierRegistry<E, Id>> for RegistryConverter<E, Id> {
    fn from(registry: IdentifierRegistry<E, Id>) -> Self {
        Self::new(Arc::new(registry))
    }
}

impl<E, Id> Clone for RegistryConverter<E, Id> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E: fmt::Debug, Id> fmt::Debug for RegistryConverter<E, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryConverter")
            .field("registry", &self.registry)
            .finish()
    }
}

impl<E, Id> AttributeConverter<E> for RegistryConverter<E, Id>
where
    E: Clone + Eq + Hash + fmt::Debug + Send + Sync,
    Id: Clone + Eq + Hash + fmt::Debug + Send + Sync,
{
    type Column = Id;

    fn to_column(&self, attribute: Option<&E>) -> Option<Id> {
        self.registry.to_id(attribute)
    }

    fn to_attribute(&self, column: Option<&Id>) -> Option<E> {
        self.registry.to_enum_fail_safe(column)
    }

    fn try_to_attribute(&self, column: Option<&Id>) -> Result<Option<E>> {
        Ok(self.registry.to_enum(column)?)
    }
}
