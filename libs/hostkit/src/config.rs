//! Application configuration and typed per-module sections.
//!
//! Layering (later wins):
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. environment variables prefixed with `CALCMOCK__`, nested with `__`
//!    (`CALCMOCK__MODULES__CALCULATION__CONFIG__DEFAULT_RESULT=7`)
//!
//! Module sections live under `modules.<name>.config` and are decoded either leniently
//! ([`module_config_or_default`]) or strictly ([`module_config_required`]).

use std::collections::HashMap;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "CALCMOCK__";

/// Configuration error for typed config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[source] Box<figment::Error>),
    #[error("module '{module}' not found")]
    ModuleNotFound { module: String },
    #[error("module '{module}' config must be an object")]
    InvalidModuleStructure { module: String },
    #[error("missing 'config' section in module '{module}'")]
    MissingConfigSection { module: String },
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Load(Box::new(e))
    }
}

/// Logging section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    /// Raw module sections: `modules.<name> = { config: {...} }`.
    pub modules: HashMap<String, serde_json::Value>,
}

impl AppConfig {
    /// Load defaults, then `path` (if any), then the environment.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if the file cannot be read or a value has the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()?)
    }

    /// Load defaults overlaid with an inline YAML document (environment is not consulted).
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if the document is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::string(yaml))
            .extract()?)
    }
}

/// Provider of module-specific configuration (raw JSON sections only).
pub trait ConfigProvider: Send + Sync {
    /// Returns raw JSON section for the module, if any.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

impl ConfigProvider for AppConfig {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.modules.get(module_name)
    }
}

/// Lenient loader: a missing module, a non-object module value or a missing `config`
/// section all yield `T::default()`.
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let Some(config_section) = provider
        .get_module_config(module_name)
        .and_then(serde_json::Value::as_object)
        .and_then(|obj| obj.get("config"))
    else {
        return Ok(T::default());
    };

    decode(module_name, config_section)
}

/// Strict loader: the module and its `config` section must be present and valid.
///
/// # Errors
/// Returns `ConfigError` if the module is not found, has invalid structure, or config is invalid.
pub fn module_config_required<T: DeserializeOwned>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let module_raw =
        provider
            .get_module_config(module_name)
            .ok_or_else(|| ConfigError::ModuleNotFound {
                module: module_name.to_owned(),
            })?;

    let obj = module_raw
        .as_object()
        .ok_or_else(|| ConfigError::InvalidModuleStructure {
            module: module_name.to_owned(),
        })?;

    let config_section = obj
        .get("config")
        .ok_or_else(|| ConfigError::MissingConfigSection {
            module: module_name.to_owned(),
        })?;

    decode(module_name, config_section)
}

fn decode<T: DeserializeOwned>(
    module_name: &str,
    section: &serde_json::Value,
) -> Result<T, ConfigError> {
    T::deserialize(section).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize, Default)]
    struct TestConfig {
        #[serde(default)]
        timeout_ms: u64,
        #[serde(default)]
        enabled: bool,
    }

    fn provider() -> AppConfig {
        let mut modules = HashMap::new();
        modules.insert(
            "test_module".to_owned(),
            json!({ "config": { "timeout_ms": 5000, "enabled": true } }),
        );
        modules.insert("no_config_module".to_owned(), json!({ "other": 1 }));
        modules.insert("invalid_module".to_owned(), json!("not an object"));
        modules.insert(
            "bad_config_module".to_owned(),
            json!({ "config": { "timeout_ms": "soon" } }),
        );
        AppConfig {
            modules,
            ..AppConfig::default()
        }
    }

    // ========== lenient loading ==========

    #[test]
    fn test_lenient_success() {
        let cfg: TestConfig = module_config_or_default(&provider(), "test_module").unwrap();
        assert_eq!(
            cfg,
            TestConfig {
                timeout_ms: 5000,
                enabled: true
            }
        );
    }

    #[test]
    fn test_lenient_falls_back_to_default() {
        let p = provider();
        for name in ["missing", "no_config_module", "invalid_module"] {
            let cfg: TestConfig = module_config_or_default(&p, name).unwrap();
            assert_eq!(cfg, TestConfig::default(), "module {name}");
        }
    }

    #[test]
    fn test_lenient_rejects_invalid_section() {
        let err = module_config_or_default::<TestConfig>(&provider(), "bad_config_module")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { module, .. } if module == "bad_config_module"));
    }

    // ========== strict loading ==========

    #[test]
    fn test_strict_errors() {
        let p = provider();
        assert!(matches!(
            module_config_required::<TestConfig>(&p, "missing"),
            Err(ConfigError::ModuleNotFound { .. })
        ));
        assert!(matches!(
            module_config_required::<TestConfig>(&p, "invalid_module"),
            Err(ConfigError::InvalidModuleStructure { .. })
        ));
        assert!(matches!(
            module_config_required::<TestConfig>(&p, "no_config_module"),
            Err(ConfigError::MissingConfigSection { .. })
        ));
    }

    #[test]
    fn test_strict_success() {
        let cfg: TestConfig = module_config_required(&provider(), "test_module").unwrap();
        assert!(cfg.enabled);
    }

    // ========== document loading ==========

    #[test]
    fn test_yaml_document() {
        let cfg = AppConfig::from_yaml_str(
            r"
logging:
  level: debug
modules:
  calculation:
    config:
      default_result: 7
",
        )
        .unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert!(!cfg.logging.json);
        assert_eq!(
            cfg.modules["calculation"]["config"]["default_result"],
            json!(7)
        );
    }

    #[test]
    fn test_defaults_without_sources() {
        let cfg = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.modules.is_empty());
    }
}
