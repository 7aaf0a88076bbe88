//! Domain layer - storage-facing ports
//!
//! # Port Traits
//!
//! - `AttributeConverter`: domain attribute <-> stored column value
//! - `EntityRepository`: specification-driven entity access
//!
//! # Examples
//!
//! ```rust,ignore
//! use typebridge_storage::domain::EntityRepository;
//!
//! async fn cheap_items(repo: &impl EntityRepository<Item>) -> Result<Vec<Item>> {
//!     let spec = builder
//!         .build_value_specification::<Item, _>("price", Some(1850), Comparator::Lt)?;
//!     repo.find_all(spec.as_ref()).await
//! }
//! ```

pub mod converter;
pub mod repository;

pub use converter::AttributeConverter;
pub use repository::EntityRepository;
