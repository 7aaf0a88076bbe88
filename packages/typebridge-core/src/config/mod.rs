//! Configuration
//!
//! Components are configured through constructor arguments. The YAML file
//! only carries predicate builder defaults and diagnostics settings.

pub mod error;
pub mod typebridge_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use typebridge_config::{
    DiagnosticsConfig, QueryConfig, TypebridgeConfig, CONFIG_ENV, CURRENT_VERSION,
    MAX_DISJUNCTS_LIMIT, SUPPORTED_VERSIONS,
};
pub use validation::{Validatable, ValidatableCollection};
