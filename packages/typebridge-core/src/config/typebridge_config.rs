//! Root configuration (v1 YAML schema)
//!
//! ```yaml
//! version: 1
//! query:
//!   default_comparator: eq
//!   max_disjuncts: 1000
//! diagnostics:
//!   enabled: true
//!   level: debug
//! ```

use super::error::{ConfigError, ConfigResult};
use super::validation::{check_range, check_version, Validatable};
use crate::features::query_engine::application::DEFAULT_MAX_DISJUNCTS;
use crate::features::query_engine::domain::Comparator;
use crate::features::query_engine::infrastructure::DiagnosticLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "TYPEBRIDGE_CONFIG";

pub const CURRENT_VERSION: u32 = 1;
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Upper bound for `query.max_disjuncts`
pub const MAX_DISJUNCTS_LIMIT: usize = 65535;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypebridgeConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct QueryConfig {
    /// Comparator used by `build_default_predicate`
    pub default_comparator: Comparator,
    /// Largest OR list a specification may hold
    pub max_disjuncts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DiagnosticsConfig {
    pub enabled: bool,
    pub level: DiagnosticLevel,
}

impl Default for TypebridgeConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            query: QueryConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_comparator: Comparator::Eq,
            max_disjuncts: DEFAULT_MAX_DISJUNCTS,
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DiagnosticLevel::Debug,
        }
    }
}

impl TypebridgeConfig {
    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        if raw.get("version").is_none() {
            return Err(ConfigError::MissingVersion);
        }

        let config: TypebridgeConfig = serde_yaml::from_value(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `TYPEBRIDGE_CONFIG`, defaults when unset
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_yaml(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Validatable for TypebridgeConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_version(self.version, SUPPORTED_VERSIONS)?;
        self.query.validate()?;
        self.diagnostics.validate()
    }

    fn config_name(&self) -> &'static str {
        "TypebridgeConfig"
    }
}

impl Validatable for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "query.max_disjuncts",
            self.max_disjuncts,
            1,
            MAX_DISJUNCTS_LIMIT,
            "A specification needs room for at least one value",
        )
    }

    fn config_name(&self) -> &'static str {
        "QueryConfig"
    }
}

impl Validatable for DiagnosticsConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "DiagnosticsConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TypebridgeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.query.default_comparator, Comparator::Eq);
        assert_eq!(config.query.max_disjuncts, 1000);
        assert!(config.diagnostics.enabled);
    }

    #[test]
    fn test_parse_symbols_and_keywords() {
        let config = TypebridgeConfig::from_yaml_str(
            r#"
version: 1
query:
  default_comparator: "<="
diagnostics:
  level: trace
"#,
        )
        .unwrap();
        assert_eq!(config.query.default_comparator, Comparator::Le);
        assert_eq!(config.query.max_disjuncts, 1000);
        assert_eq!(config.diagnostics.level, DiagnosticLevel::Trace);
    }

    #[test]
    fn test_missing_version() {
        let err = TypebridgeConfig::from_yaml_str("query:\n  max_disjuncts: 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_unsupported_version() {
        let err = TypebridgeConfig::from_yaml_str("version: 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion { found: 2, .. }));
    }

    #[test]
    fn test_out_of_range() {
        let err = TypebridgeConfig::from_yaml_str("version: 1\nquery:\n  max_disjuncts: 0\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TypebridgeConfig::from_yaml_str("version: 1\nquery:\n  max_values: 3\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = TypebridgeConfig::default();
        config.query.default_comparator = Comparator::Gt;
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("default_comparator: gt"));
        assert_eq!(TypebridgeConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
