//! Host kit
//!
//! The small runtime every calcmock crate wires through:
//! - [`client_hub`] - type-keyed registry of shared clients with reversible substitution
//! - [`config`] - layered application config and typed module sections
//! - [`context`] / [`contracts`] - the `Module` trait and its init context
//! - [`runner`] - ordered init phase
//! - [`logging`] - global `tracing` subscriber

pub mod client_hub;
pub mod config;
pub mod context;
pub mod contracts;
pub mod logging;
pub mod runner;

pub use client_hub::{ClientHub, ClientHubError};
pub use config::{AppConfig, ConfigError, ConfigProvider};
pub use context::ModuleCtx;
pub use contracts::Module;
pub use runner::{RunnerError, init_modules};
