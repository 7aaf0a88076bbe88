//! Common test utilities for typebridge-core
//!
//! Shared fixtures (the `Category` enum and its registries, `Item`,
//! `ItemDto`) and builders for integration tests.

#![allow(dead_code, unused_imports)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
