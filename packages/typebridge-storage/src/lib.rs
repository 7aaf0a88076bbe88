//! Typebridge Storage - collaborator-facing ports for persistence
//!
//! ## Ports
//!
//! - `AttributeConverter`: the only way an enum column is written or read;
//!   [`RegistryConverter`] implements it over an `IdentifierRegistry`
//! - `EntityRepository`: async, specification-driven entity access;
//!   [`InMemoryRepository`] is the reference adapter (`memory` feature)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use typebridge_storage::{EntityRepository, InMemoryRepository};
//!
//! let repo = InMemoryRepository::with_rows(items);
//! let spec = builder.build_specification::<Item, _, _>("category", Some([2, 3]), Comparator::Eq)?;
//! let matching = repo.find_all(spec.as_ref()).await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{AttributeConverter, EntityRepository};
#[cfg(feature = "memory")]
pub use infrastructure::InMemoryRepository;
pub use infrastructure::RegistryConverter;
