//! The HTTP client seam and the request/response values that cross it.

use std::future::Future;
use std::time::Duration;

use davkit_rfc::rfc::dav::core::DavMethod;
use http::StatusCode;

/// A fully built request, ready to be sent as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavRequest {
    pub method: DavMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// `None` means the request carries no body at all.
    pub body: Option<Vec<u8>>,
    /// Applied by the client; the builder never enforces it.
    pub timeout: Option<Duration>,
}

impl DavRequest {
    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Counts the headers with the given name (case-insensitive).
    #[must_use]
    pub fn count_header(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .count()
    }
}

/// A response as returned by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl DavResponse {
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Gets the `ETag` header value.
    #[must_use]
    pub fn get_etag(&self) -> Option<&str> {
        self.get_header("ETag")
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Sends built requests.
///
/// Implementations own the transport, including any timeout handling. The
/// request helpers never retry and hand the response back as received.
pub trait HttpClient: Send + Sync {
    /// Transport-level failure, propagated to callers unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    fn send(
        &self,
        request: DavRequest,
    ) -> impl Future<Output = Result<DavResponse, Self::Error>> + Send;
}
