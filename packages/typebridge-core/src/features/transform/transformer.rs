//! ObjectTransformer - one copy routine for both "create" and "refresh"
//!
//! `transform` allocates a target through the factory and copies into it,
//! `update` copies into a target the caller already owns.

use super::error::TransformError;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Produces a fresh, empty target
pub type Factory<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Copies the relevant fields of a source into a target
pub type CopyFn<S, T> = Arc<dyn Fn(&S, &mut T) + Send + Sync>;

/// Total order over produced targets
pub type OrderFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

pub struct ObjectTransformer<S, T> {
    factory: Factory<T>,
    copy: CopyFn<S, T>,
    order: Option<OrderFn<T>>,
}

impl<S, T> ObjectTransformer<S, T> {
    pub fn new<F, C>(factory: F, copy: C) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        C: Fn(&S, &mut T) + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
            copy: Arc::new(copy),
            order: None,
        }
    }

    /// Transformer whose targets start from `T::default()`
    pub fn with_default<C>(copy: C) -> Self
    where
        T: Default + 'static,
        C: Fn(&S, &mut T) + Send + Sync + 'static,
    {
        Self::new(T::default, copy)
    }

    /// Sort every batch produced by `transform_all` with `order`
    pub fn with_order<O>(mut self, order: O) -> Self
    where
        O: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.order = Some(Arc::new(order));
        self
    }

    pub fn is_ordered(&self) -> bool {
        self.order.is_some()
    }

    /// Absent source gives an absent target.
    pub fn transform(&self, source: Option<&S>) -> Option<T> {
        source.map(|source| self.transform_one(source))
    }

    fn transform_one(&self, source: &S) -> T {
        let mut target = (self.factory)();
        (self.copy)(source, &mut target);
        target
    }

    pub fn update(&self, source: &S, target: &mut T) {
        (self.copy)(source, target);
    }

    /// [`Self::update`] for callers holding optional arguments. Either one
    /// missing is a contract violation, reported as `NullArgument`.
    pub fn try_update(&self, source: Option<&S>, target: Option<&mut T>) -> Result<(), TransformError> {
        let source = source.ok_or_else(|| TransformError::null_argument("source"))?;
        let target = target.ok_or_else(|| TransformError::null_argument("target"))?;
        self.update(source, target);
        Ok(())
    }

    /// Transform every source into a new `Vec`, preserving source order
    /// unless an order is configured.
    ///
    /// Absent sources stay absent; an empty input gives an empty `Vec`.
    pub fn transform_all<'a, I>(&self, sources: Option<I>) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        self.transform_all_into(sources, Vec::new())
    }

    /// Append the transformed batch to `into`. Only the new batch is
    /// sorted, existing contents keep their place.
    pub fn transform_all_into<'a, I, C>(&self, sources: Option<I>, into: C) -> Option<C>
    where
        I: IntoIterator<Item = &'a S>,
        C: Extend<T>,
        S: 'a,
    {
        match &self.order {
            Some(order) => self.collect_sorted(sources?, into, |a, b| order(a, b)),
            None => {
                let mut into = into;
                into.extend(sources?.into_iter().map(|s| self.transform_one(s)));
                Some(into)
            }
        }
    }

    /// Like [`Self::transform_all`] with a per-call order, overriding any
    /// configured one.
    pub fn transform_all_sorted_by<'a, I, O>(&self, sources: Option<I>, order: O) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = &'a S>,
        O: FnMut(&T, &T) -> Ordering,
        S: 'a,
    {
        self.collect_sorted(sources?, Vec::new(), order)
    }

    fn collect_sorted<'a, I, C, O>(&self, sources: I, mut into: C, order: O) -> Option<C>
    where
        I: IntoIterator<Item = &'a S>,
        C: Extend<T>,
        O: FnMut(&T, &T) -> Ordering,
        S: 'a,
    {
        let mut batch: Vec<T> = sources.into_iter().map(|s| self.transform_one(s)).collect();
        // Stable: equal targets keep source order
        batch.sort_by(order);
        into.extend(batch);
        Some(into)
    }
}

impl<S, T> Clone for ObjectTransformer<S, T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            copy: Arc::clone(&self.copy),
            order: self.order.clone(),
        }
    }
}

impl<S, T> fmt::Debug for ObjectTransformer<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectTransformer")
            .field("source", &std::any::type_name::<S>())
            .field("target", &std::any::type_name::<T>())
            .field("ordered", &self.is_ordered())
            .finish()
    }
}
