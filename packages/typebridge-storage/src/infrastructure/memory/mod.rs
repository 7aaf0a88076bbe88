//! In-memory repository adapter
//!
//! Evaluates specifications with the core evaluator. Used by tests and as
//! the reference executor for the repository contract.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use typebridge_core::{Entity, Specification};

use crate::domain::EntityRepository;
use crate::{Result, StorageError};

const STORAGE_TARGET: &str = "typebridge::storage";

pub struct InMemoryRepository<E> {
    rows: RwLock<Vec<E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn with_rows(rows: Vec<E>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    fn matching(&self, spec: Option<&Specification<E>>) -> Vec<E>
    where
        E: Clone,
    {
        let rows = self.rows.read();
        let Some(spec) = spec else {
            return rows.clone();
        };

        // The fingerprint is audit-only; failing to compute it never fails the query.
        match spec.fingerprint() {
            Ok(fingerprint) => debug!(
                target: STORAGE_TARGET,
                entity = E::entity_name(),
                fingerprint = %fingerprint,
                "{}", spec
            ),
            Err(err) => debug!(
                target: STORAGE_TARGET,
                entity = E::entity_name(),
                error = %err,
                "{}", spec
            ),
        }
        rows.iter().filter(|row| spec.is_satisfied_by(row)).cloned().collect()
    }
}

#[async_trait]
impl<E> EntityRepository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync + 'static,
{
    async fn save(&self, entity: E) -> Result<()> {
        self.rows.write().push(entity);
        Ok(())
    }

    async fn save_all(&self, entities: Vec<E>) -> Result<usize> {
        let count = entities.len();
        self.rows.write().extend(entities);
        Ok(count)
    }

    async fn find_all(&self, spec: Option<&Specification<E>>) -> Result<Vec<E>> {
        Ok(self.matching(spec))
    }

    async fn find_one(&self, spec: &Specification<E>) -> Result<E> {
        self.matching(Some(spec))
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::not_found(E::entity_name(), spec))
    }

    async fn count(&self, spec: Option<&Specification<E>>) -> Result<usize> {
        Ok(self.matching(spec).len())
    }
}
