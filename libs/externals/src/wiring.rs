//! Registers the real collaborators in a [`ClientHub`].

use std::sync::Arc;

use hostkit::ClientHub;

use crate::config::ExternalsConfig;
use crate::fs::{FileReader, TokioFileReader};
use crate::http::{HttpGet, HyperHttpClient};

/// Register [`HyperHttpClient`] as `dyn HttpGet` and [`TokioFileReader`] as `dyn FileReader`.
///
/// ```ignore
/// wire_externals(&hub, &ExternalsConfig::default());
/// let http = hub.get::<dyn HttpGet>()?;
/// ```
pub fn wire_externals(hub: &ClientHub, cfg: &ExternalsConfig) {
    hub.register::<dyn HttpGet>(Arc::new(HyperHttpClient::new(&cfg.http)));
    hub.register::<dyn FileReader>(Arc::new(TokioFileReader::new(&cfg.fs)));
    tracing::info!(
        timeout_ms = cfg.http.timeout_ms,
        base_dir = ?cfg.fs.base_dir,
        "external clients wired"
    );
}
