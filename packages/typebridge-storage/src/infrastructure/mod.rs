//! Infrastructure layer - adapters for the storage ports

pub mod registry_converter;

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::InMemoryRepository;
pub use registry_converter::RegistryConverter;
