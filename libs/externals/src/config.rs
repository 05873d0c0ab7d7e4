//! Configuration for the `externals` module.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ExternalsConfig {
    pub http: HttpConfig,
    pub fs: FsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HttpConfig {
    /// Applies separately to the response head and to the body.
    pub timeout_ms: u64,
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FsConfig {
    /// Relative paths are resolved against this directory when set.
    pub base_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let cfg = ExternalsConfig::default();
        assert_eq!(cfg.http.timeout_ms, 10_000);
        assert_eq!(cfg.http.max_body_bytes, 10 * 1024 * 1024);
        assert!(cfg.fs.base_dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let cfg: ExternalsConfig =
            serde_json::from_value(json!({ "http": { "timeout_ms": 250 } })).unwrap();
        assert_eq!(cfg.http.timeout_ms, 250);
        assert_eq!(cfg.http.max_body_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let res: Result<ExternalsConfig, _> =
            serde_json::from_value(json!({ "http": { "retries": 3 } }));
        assert!(res.is_err());
    }
}
