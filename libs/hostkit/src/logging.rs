//! Process-wide `tracing` subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `cfg.level`; an unparsable level falls back to `info`.
/// Returns `false` when a global subscriber was already installed, in which case the
/// existing one is left untouched.
pub fn init_logging(cfg: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if cfg.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    match installed {
        Ok(()) => {
            tracing::debug!(level = %cfg.level, json = cfg.json, "logging initialised");
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_a_no_op() {
        let cfg = LoggingConfig {
            level: "not a directive [".to_owned(),
            json: true,
        };
        let _first = init_logging(&cfg);
        assert!(!init_logging(&LoggingConfig::default()));
    }
}
