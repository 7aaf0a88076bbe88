//! IdentifierRegistry - bidirectional value <-> identifier mapping
//!
//! A registry is built once from an ordered value set and a projection
//! `E -> Id`, and is immutable afterwards. It is the single place where a
//! domain value meets its persisted/wire identifier.
//!
//! # Strict vs fail-safe decoding
//!
//! - [`IdentifierRegistry::to_enum`] rejects unknown ids with
//!   [`RegistryError::UnknownIdentifier`] (untrusted input).
//! - [`IdentifierRegistry::to_enum_fail_safe`] logs a warning and returns the
//!   configured fallback (stale persisted data, retired codes).

use super::{Choice, Enumerated};
use crate::features::identifier_registry::error::RegistryError;
use crate::shared::short_type_name;
use ahash::{AHashMap, AHashSet};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tracing::warn;

type Projection<E, Id> = Arc<dyn Fn(&E) -> Id + Send + Sync>;

/// Bidirectional mapping between a closed value set `E` and identifiers `Id`.
///
/// # Examples
///
/// ```rust
/// use typebridge_core::features::identifier_registry::IdentifierRegistry;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Category { Opera, Oratorio }
///
/// let by_code = IdentifierRegistry::new(&[Category::Opera, Category::Oratorio], |c| match c {
///     Category::Opera => 1,
///     Category::Oratorio => 2,
/// })
/// .unwrap();
///
/// assert_eq!(by_code.id_of(&Category::Oratorio), 2);
/// assert_eq!(by_code.to_enum(Some(&2)).unwrap(), Some(Category::Oratorio));
/// assert!(by_code.to_enum(Some(&99)).is_err());
/// ```
#[derive(Clone)]
pub struct IdentifierRegistry<E, Id> {
    values: Arc<[E]>,
    by_id: AHashMap<Id, E>,
    to_id: Projection<E, Id>,
    on_fail: Option<E>,
    type_name: &'static str,
}

impl<E, Id> IdentifierRegistry<E, Id>
where
    E: Clone + Eq + Hash + fmt::Debug,
    Id: Clone + Eq + Hash + fmt::Debug,
{
    /// Build a registry without a fail-safe fallback.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateIdentifier`] if two values project onto the same id.
    pub fn new<F>(values: &[E], to_id: F) -> Result<Self, RegistryError>
    where
        F: Fn(&E) -> Id + Send + Sync + 'static,
    {
        Self::with_fallback(values, to_id, None)
    }

    /// Build a registry whose fail-safe decode returns `on_fail` for unknown ids.
    ///
    /// Values are registered in the given order; the first collision aborts
    /// construction, nothing is ever overwritten.
    pub fn with_fallback<F>(values: &[E], to_id: F, on_fail: Option<E>) -> Result<Self, RegistryError>
    where
        F: Fn(&E) -> Id + Send + Sync + 'static,
    {
        let mut by_id = AHashMap::with_capacity(values.len());
        for value in values {
            let id = to_id(value);
            if let Some(previous) = by_id.get(&id) {
                return Err(RegistryError::duplicate(&id, previous, value));
            }
            by_id.insert(id, value.clone());
        }

        Ok(Self {
            values: values.into(),
            by_id,
            to_id: Arc::new(to_id),
            on_fail,
            type_name: short_type_name::<E>(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Conversion
    // ═══════════════════════════════════════════════════════════════════════

    /// Project a value onto its identifier
    pub fn id_of(&self, value: &E) -> Id {
        (self.to_id)(value)
    }

    /// Absent in, absent out; otherwise the projected identifier.
    pub fn to_id(&self, value: Option<&E>) -> Option<Id> {
        value.map(|v| self.id_of(v))
    }

    /// Strict lookup of a present identifier.
    pub fn value_of<Q>(&self, id: &Q) -> Result<E, RegistryError>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.by_id
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::unknown(self.type_name, id, &self.values))
    }

    /// Strict decode: absent id gives `Ok(None)`, unknown id is an error.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownIdentifier`] naming the id and every known value.
    pub fn to_enum<Q>(&self, id: Option<&Q>) -> Result<Option<E>, RegistryError>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        id.map(|id| self.value_of(id)).transpose()
    }

    /// Lenient decode: unknown ids are logged and replaced by the fallback
    /// (which may itself be absent).
    pub fn to_enum_fail_safe<Q>(&self, id: Option<&Q>) -> Option<E>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let id = id?;
        match self.by_id.get(id) {
            Some(found) => Some(found.clone()),
            None => {
                let err = RegistryError::unknown(self.type_name, id, &self.values);
                warn!(target: "typebridge::registry", fallback = ?self.on_fail, "{}", err);
                self.on_fail.clone()
            }
        }
    }

    /// Whether `id` maps to a value (no logging, no fallback)
    pub fn contains_id<Q>(&self, id: &Q) -> bool
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_id.contains_key(id)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Value / identifier listings
    // ═══════════════════════════════════════════════════════════════════════

    /// All values in construction order (fresh copy)
    pub fn all_values(&self) -> Vec<E> {
        self.values.to_vec()
    }

    /// All identifiers in construction order
    pub fn all_identifiers(&self) -> Vec<Id> {
        self.extend_identifiers(Vec::with_capacity(self.values.len()))
    }

    /// Identifiers of `subset`, in the caller's order
    pub fn identifiers_of<'a, I>(&self, subset: I) -> Vec<Id>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        self.extend_identifiers_of(Vec::new(), subset)
    }

    /// Identifiers of every value not in `skip`, in construction order
    pub fn identifiers_excluding<'a, I>(&self, skip: I) -> Vec<Id>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        self.extend_identifiers_excluding(Vec::new(), skip)
    }

    /// Identifiers of every value except the fallback (all of them when there is none)
    pub fn identifiers_excluding_fail_value(&self) -> Vec<Id> {
        self.extend_identifiers_excluding_fail_value(Vec::new())
    }

    /// Append all identifiers to `coll` and hand it back.
    pub fn extend_identifiers<C: Extend<Id>>(&self, mut coll: C) -> C {
        coll.extend(self.values.iter().map(|v| self.id_of(v)));
        coll
    }

    /// Append the identifiers of `subset` (caller's order) to `coll`.
    pub fn extend_identifiers_of<'a, C, I>(&self, mut coll: C, subset: I) -> C
    where
        C: Extend<Id>,
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        coll.extend(subset.into_iter().map(|v| self.id_of(v)));
        coll
    }

    /// Append the identifiers of every value not in `skip` to `coll`.
    pub fn extend_identifiers_excluding<'a, C, I>(&self, mut coll: C, skip: I) -> C
    where
        C: Extend<Id>,
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let skip: AHashSet<&E> = skip.into_iter().collect();
        coll.extend(
            self.values
                .iter()
                .filter(|v| !skip.contains(*v))
                .map(|v| self.id_of(v)),
        );
        coll
    }

    /// Append every identifier except the fallback's to `coll`.
    pub fn extend_identifiers_excluding_fail_value<C: Extend<Id>>(&self, coll: C) -> C {
        match &self.on_fail {
            Some(fail) => self.extend_identifiers_excluding(coll, std::iter::once(fail)),
            None => self.extend_identifiers(coll),
        }
    }

    /// Labelled identifiers in construction order
    pub fn choices<F>(&self, label: F) -> Vec<Choice<Id>>
    where
        F: Fn(&E) -> String,
    {
        self.values
            .iter()
            .map(|v| Choice::new(self.id_of(v), label(v)))
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn fail_value(&self) -> Option<&E> {
        self.on_fail.as_ref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Simple name of `E`, as used in error messages
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<E> IdentifierRegistry<E, String>
where
    E: Enumerated + Clone + Eq + Hash + fmt::Debug,
{
    /// Registry over every declared value, keyed by its declared name.
    pub fn by_name() -> Result<Self, RegistryError> {
        Self::by_name_of(E::values(), None)
    }

    /// Like [`by_name`](Self::by_name) with a fail-safe fallback.
    pub fn by_name_with_fallback(on_fail: E) -> Result<Self, RegistryError> {
        Self::by_name_of(E::values(), Some(on_fail))
    }

    /// Name-keyed registry over a subset of the declared values.
    pub fn by_name_of(values: &[E], on_fail: Option<E>) -> Result<Self, RegistryError> {
        Self::with_fallback(values, |e: &E| e.name().to_string(), on_fail)
    }
}

impl<E: fmt::Debug, Id> fmt::Debug for IdentifierRegistry<E, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierRegistry")
            .field("type_name", &self.type_name)
            .field("values", &self.values)
            .field("on_fail", &self.on_fail)
            .finish()
    }
}
