//! Entity repository port

use async_trait::async_trait;
use typebridge_core::{Entity, Specification};

use crate::Result;

/// Specification-driven access to stored entities
///
/// An absent specification matches every entity.
#[async_trait]
pub trait EntityRepository<E>: Send + Sync
where
    E: Entity + Send + Sync + 'static,
{
    // ═══════════════════════════════════════════════════════════════════════
    // Writes
    // ═══════════════════════════════════════════════════════════════════════

    async fn save(&self, entity: E) -> Result<()>;

    /// Returns the number of entities saved
    async fn save_all(&self, entities: Vec<E>) -> Result<usize>;

    // ═══════════════════════════════════════════════════════════════════════
    // Reads
    // ═══════════════════════════════════════════════════════════════════════

    /// Matching entities in storage order
    async fn find_all(&self, spec: Option<&Specification<E>>) -> Result<Vec<E>>;

    /// First matching entity
    ///
    /// # Errors
    ///
    /// `ErrorKind::NotFound` if nothing matches
    async fn find_one(&self, spec: &Specification<E>) -> Result<E>;

    async fn count(&self, spec: Option<&Specification<E>>) -> Result<usize>;
}
