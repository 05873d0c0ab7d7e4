//! HTTP `get(url) -> {status, data}` collaborator.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::Uri;
use http_body_util::{BodyExt, Empty, LengthLimitError, Limited};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::HttpConfig;
use crate::error::ExternalError;

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub data: Bytes,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, data: impl Into<Bytes>) -> Self {
        Self {
            status,
            data: data.into(),
        }
    }

    /// `200 OK` carrying `data`.
    #[must_use]
    pub fn ok(data: impl Into<Bytes>) -> Self {
        Self::new(200, data)
    }

    /// Body as UTF-8 text.
    ///
    /// # Errors
    /// `ExternalError::Decode` if the body is not valid UTF-8.
    pub fn text(&self) -> Result<String, ExternalError> {
        String::from_utf8(self.data.to_vec()).map_err(|e| ExternalError::Decode(e.to_string()))
    }

    /// Body decoded as JSON.
    ///
    /// # Errors
    /// `ExternalError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ExternalError> {
        serde_json::from_slice(&self.data).map_err(|e| ExternalError::Decode(e.to_string()))
    }
}

/// HTTP GET contract.
#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Fetch `url`. Non-2xx statuses are reported as `ExternalError::HttpStatus`.
    async fn get(&self, url: &str) -> Result<HttpResponse, ExternalError>;
}

/// Plain HTTP/1 client on hyper with a per-phase timeout and a body size limit.
#[derive(Clone)]
pub struct HyperHttpClient {
    inner: Client<HttpConnector, Empty<Bytes>>,
    timeout: Duration,
    max_body_bytes: usize,
}

impl HyperHttpClient {
    #[must_use]
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            inner: Client::builder(TokioExecutor::new()).build_http(),
            timeout: Duration::from_millis(cfg.timeout_ms),
            max_body_bytes: cfg.max_body_bytes,
        }
    }

    fn parse_uri(url: &str) -> Result<Uri, ExternalError> {
        let invalid = |reason: String| ExternalError::InvalidUrl {
            url: url.to_owned(),
            reason,
        };
        let uri = url.parse::<Uri>().map_err(|e| invalid(e.to_string()))?;
        match uri.scheme_str() {
            Some("http") => {}
            Some(other) => return Err(invalid(format!("unsupported scheme '{other}'"))),
            None => return Err(invalid("missing scheme".to_owned())),
        }
        if uri.authority().is_none() {
            return Err(invalid("missing host".to_owned()));
        }
        Ok(uri)
    }
}

#[async_trait]
impl HttpGet for HyperHttpClient {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse, ExternalError> {
        let uri = Self::parse_uri(url)?;

        let response = tokio::time::timeout(self.timeout, self.inner.get(uri))
            .await
            .map_err(|_| ExternalError::Timeout(self.timeout))?
            .map_err(|e| ExternalError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "non-success status");
            return Err(ExternalError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = Limited::new(response.into_body(), self.max_body_bytes);
        let collected = tokio::time::timeout(self.timeout, body.collect())
            .await
            .map_err(|_| ExternalError::Timeout(self.timeout))?
            .map_err(|e| {
                if e.downcast_ref::<LengthLimitError>().is_some() {
                    ExternalError::BodyTooLarge {
                        limit: self.max_body_bytes,
                    }
                } else {
                    ExternalError::Transport(e.to_string())
                }
            })?;

        let data = collected.to_bytes();
        debug!(status = status.as_u16(), bytes = data.len(), "GET completed");
        Ok(HttpResponse {
            status: status.as_u16(),
            data,
        })
    }
}
