//! Spy-backed doubles for [`HttpGet`] and [`FileReader`].
//!
//! Both record every call and fail with [`ExternalError::NotConfigured`] until an outcome is
//! configured, so a test never reaches the network or the disk by accident.
//!
//! ```ignore
//! let http = Arc::new(StubHttpClient::new());
//! http.resolves("test");
//! hub.substitute::<dyn HttpGet>(http.clone())?;
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use spykit::Spy;

use crate::error::ExternalError;
use crate::fs::FileReader;
use crate::http::{HttpGet, HttpResponse};

type HttpOutcome = Result<HttpResponse, ExternalError>;

#[derive(Default)]
pub struct StubHttpClient {
    spy: Spy<String, HttpOutcome>,
}

impl StubHttpClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call resolves to `200` with `data`.
    pub fn resolves(&self, data: impl Into<Bytes>) -> &Self {
        self.spy.returns(Ok(HttpResponse::ok(data)));
        self
    }

    pub fn resolves_once(&self, data: impl Into<Bytes>) -> &Self {
        self.spy.returns_once(Ok(HttpResponse::ok(data)));
        self
    }

    /// Every call resolves to `response`.
    pub fn responds(&self, response: HttpResponse) -> &Self {
        self.spy.returns(Ok(response));
        self
    }

    pub fn rejects(&self, err: ExternalError) -> &Self {
        self.spy.returns(Err(err));
        self
    }

    pub fn rejects_once(&self, err: ExternalError) -> &Self {
        self.spy.returns_once(Err(err));
        self
    }

    /// The underlying spy, for custom implementations and call inspection.
    #[must_use]
    pub fn spy(&self) -> &Spy<String, HttpOutcome> {
        &self.spy
    }
}

#[async_trait]
impl HttpGet for StubHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, ExternalError> {
        self.spy
            .invoke(url.to_owned(), |url| async move {
                Err(ExternalError::NotConfigured(format!("GET {url}")))
            })
            .await
    }
}

type FileOutcome = Result<String, ExternalError>;

#[derive(Default)]
pub struct StubFileReader {
    spy: Spy<PathBuf, FileOutcome>,
}

impl StubFileReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolves(&self, contents: impl Into<String>) -> &Self {
        self.spy.returns(Ok(contents.into()));
        self
    }

    pub fn resolves_once(&self, contents: impl Into<String>) -> &Self {
        self.spy.returns_once(Ok(contents.into()));
        self
    }

    pub fn rejects(&self, err: ExternalError) -> &Self {
        self.spy.returns(Err(err));
        self
    }

    #[must_use]
    pub fn spy(&self) -> &Spy<PathBuf, FileOutcome> {
        &self.spy
    }
}

#[async_trait]
impl FileReader for StubFileReader {
    async fn read_file(&self, path: &Path) -> Result<String, ExternalError> {
        self.spy
            .invoke(path.to_path_buf(), |path| async move {
                Err(ExternalError::NotConfigured(format!(
                    "read_file {}",
                    path.display()
                )))
            })
            .await
    }
}
