//! `reqwest`-backed [`HttpClient`].

use http::header::{HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue};
use http::method::InvalidMethod;
use thiserror::Error;

use crate::client::{DavRequest, DavResponse, HttpClient};

/// Errors raised by [`ReqwestClient`].
#[derive(Error, Debug)]
pub enum ReqwestClientError {
    #[error("Invalid method: {0}")]
    InvalidMethod(#[from] InvalidMethod),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Sends requests through a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// ## Summary
    /// Creates a client identifying itself with the crate's user agent.
    ///
    /// ## Errors
    /// Returns an error if the underlying client cannot be built (TLS backend setup).
    pub fn new() -> Result<Self, ReqwestClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("davkit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    type Error = ReqwestClientError;

    #[tracing::instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: DavRequest) -> Result<DavResponse, Self::Error> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())?;
        let mut builder = self.client.request(method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status = %status, body_len = body.len(), "Received response");

        Ok(DavResponse {
            status,
            headers,
            body,
        })
    }
}
