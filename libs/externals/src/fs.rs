//! Filesystem `read_file(path) -> contents` collaborator.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::config::FsConfig;
use crate::error::ExternalError;

#[async_trait]
pub trait FileReader: Send + Sync {
    /// Read the whole file as UTF-8 text.
    async fn read_file(&self, path: &Path) -> Result<String, ExternalError>;
}

/// Reads files with `tokio::fs`, resolving relative paths against an optional base directory.
#[derive(Debug, Clone, Default)]
pub struct TokioFileReader {
    base_dir: Option<PathBuf>,
}

impl TokioFileReader {
    #[must_use]
    pub fn new(cfg: &FsConfig) -> Self {
        Self {
            base_dir: cfg.base_dir.clone(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl FileReader for TokioFileReader {
    async fn read_file(&self, path: &Path) -> Result<String, ExternalError> {
        let resolved = self.resolve(path);
        let contents = tokio::fs::read_to_string(&resolved)
            .await
            .map_err(|e| ExternalError::io(&resolved, &e))?;
        debug!(path = %resolved.display(), bytes = contents.len(), "file read");
        Ok(contents)
    }
}
