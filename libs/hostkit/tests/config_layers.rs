//! File and environment layering of `AppConfig::load`.

use std::io::Write;

use hostkit::config::{AppConfig, module_config_required};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct CalcSection {
    default_result: i64,
}

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn file_values_are_loaded() {
    let file = yaml_file(
        "logging:\n  level: debug\n  json: true\nmodules:\n  calculation:\n    config:\n      default_result: 11\n",
    );

    temp_env::with_vars_unset(["CALCMOCK__LOGGING__LEVEL", "CALCMOCK__LOGGING__JSON"], || {
        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.logging.json);

        let section: CalcSection = module_config_required(&cfg, "calculation").unwrap();
        assert_eq!(section, CalcSection { default_result: 11 });
    });
}

#[test]
fn environment_overrides_file() {
    let file = yaml_file("logging:\n  level: debug\n");

    temp_env::with_vars(
        [
            ("CALCMOCK__LOGGING__LEVEL", Some("warn")),
            (
                "CALCMOCK__MODULES__CALCULATION__CONFIG__DEFAULT_RESULT",
                Some("7"),
            ),
        ],
        || {
            let cfg = AppConfig::load(Some(file.path())).unwrap();
            assert_eq!(cfg.logging.level, "warn");

            let section: CalcSection = module_config_required(&cfg, "calculation").unwrap();
            assert_eq!(section.default_result, 7);
        },
    );
}

#[test]
fn no_file_gives_defaults() {
    temp_env::with_vars_unset(["CALCMOCK__LOGGING__LEVEL", "CALCMOCK__LOGGING__JSON"], || {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.logging.json);
    });
}

#[test]
fn malformed_file_is_a_load_error() {
    let file = yaml_file("logging: [unclosed\n");
    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, hostkit::ConfigError::Load(_)));
}
