//! Object transformation between domain types and their external shapes
//!
//! ```
//! use typebridge_core::ObjectTransformer;
//!
//! struct Item { name: String, price: i64 }
//! #[derive(Default)]
//! struct ItemDto { name: String, price: i64 }
//!
//! let to_dto = ObjectTransformer::with_default(|item: &Item, dto: &mut ItemDto| {
//!     dto.name = item.name.clone();
//!     dto.price = item.price;
//! });
//!
//! let dto = to_dto.transform(Some(&Item { name: "goody".into(), price: 34 })).unwrap();
//! assert_eq!(dto.price, 34);
//! ```

pub mod error;
pub mod transformer;

pub use error::TransformError;
pub use transformer::{CopyFn, Factory, ObjectTransformer, OrderFn};
