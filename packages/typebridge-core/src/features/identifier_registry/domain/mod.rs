// Domain: identifier registry and the value types it hands out

pub mod choice;
pub mod enumerated;
pub mod registry;

pub use choice::Choice;
pub use enumerated::Enumerated;
pub use registry::IdentifierRegistry;
