//! External collaborators
//!
//! Contracts for the two collaborators the calculation workspace talks to, their real
//! implementations and, behind the `testing` feature, spy-backed doubles:
//! - [`HttpGet`] - `get(url) -> {status, data}`, real impl [`HyperHttpClient`]
//! - [`FileReader`] - `read_file(path) -> contents`, real impl [`TokioFileReader`]
//!
//! Real clients are registered in the [`hostkit::ClientHub`] by [`ExternalsModule`] (or
//! [`wire_externals`]); tests swap them with `ClientHub::substitute`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::{ExternalsModule, MODULE_NAME};

// === CONTRACTS AND TYPES ===
pub mod config;
mod error;
mod fs;
mod http;
pub use config::{ExternalsConfig, FsConfig, HttpConfig};
pub use error::ExternalError;
pub use fs::{FileReader, TokioFileReader};
pub use self::http::{HttpGet, HttpResponse, HyperHttpClient};

// === WIRING ===
mod wiring;
pub use wiring::wire_externals;

// === TEST DOUBLES ===
#[cfg(any(test, feature = "testing"))]
pub mod testing;
