//! Identifier Registry Feature
//!
//! Bridges a closed domain value set (usually a fieldless enum) and the
//! identifiers it is stored or transmitted as.
//!
//! # Usage
//! ```ignore
//! use typebridge_core::features::identifier_registry::IdentifierRegistry;
//!
//! static BY_CODE: Lazy<IdentifierRegistry<Category, i32>> =
//!     Lazy::new(|| IdentifierRegistry::new(Category::values(), Category::code).unwrap());
//!
//! let code = BY_CODE.id_of(&Category::Oratorio);          // 2
//! let category = BY_CODE.to_enum_fail_safe(Some(&code));  // lenient read path
//! ```

pub mod domain;
pub mod error;

pub use domain::{Choice, Enumerated, IdentifierRegistry};
pub use error::RegistryError;
