//! Request descriptors and the build-and-dispatch entry points.

use std::time::Duration;

use davkit_core::config::{AuthMethod, Settings, load_config};
use davkit_core::constants::{AUTHORIZATION_HEADER, DESTINATION_HEADER, FORWARDED_FOR_HEADER};
use davkit_core::error::CoreResult;
use davkit_rfc::rfc::dav::core::{DavMethod, Depth};

use crate::auth::authorization_value;
use crate::client::{DavRequest, DavResponse, HttpClient};
use crate::dav_path::{DEFAULT_DAV_VERSION, DEFAULT_PATH_ROOT, get_dav_path};
use crate::error::{DavError, DavResult};
use crate::url::{encode_reserved, resolve_dav_url};

/// Headers whose values are themselves URLs and get `?`/`#` encoded.
const URL_HEADERS: &[&str] = &[DESTINATION_HEADER];

/// Request descriptor.
///
/// Collects everything needed to reach one resource and turns it into a
/// [`DavRequest`] with [`DavRequestBuilder::build`].
#[derive(Debug, Clone)]
pub struct DavRequestBuilder {
    base_url: String,
    method: DavMethod,
    path: String,
    user: Option<String>,
    password: Option<String>,
    auth: AuthMethod,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    dav_version: u8,
    path_root: Option<String>,
    source_ip: Option<String>,
    timeout: Option<Duration>,
}

impl DavRequestBuilder {
    /// Creates a new request for `path` below the DAV endpoint of `base_url`.
    #[must_use]
    pub fn new(base_url: &str, method: DavMethod, path: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            method,
            path: path.to_string(),
            user: None,
            password: None,
            auth: AuthMethod::default(),
            headers: Vec::new(),
            body: None,
            dav_version: DEFAULT_DAV_VERSION,
            path_root: DEFAULT_PATH_ROOT.map(str::to_string),
            source_ip: None,
            timeout: None,
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(base_url: &str, path: &str) -> Self {
        Self::new(base_url, DavMethod::Get, path)
    }

    /// Creates a new PUT request.
    #[must_use]
    pub fn put(base_url: &str, path: &str) -> Self {
        Self::new(base_url, DavMethod::Put, path)
    }

    /// Creates a new DELETE request.
    #[must_use]
    pub fn delete(base_url: &str, path: &str) -> Self {
        Self::new(base_url, DavMethod::Delete, path)
    }

    /// Creates a new PROPFIND request.
    #[must_use]
    pub fn propfind(base_url: &str, path: &str) -> Self {
        Self::new(base_url, DavMethod::Propfind, path)
    }

    /// Creates a new MKCOL request.
    #[must_use]
    pub fn mkcol(base_url: &str, path: &str) -> Self {
        Self::new(base_url, DavMethod::Mkcol, path)
    }

    /// Creates a new COPY request.
    #[must_use]
    pub fn copy(base_url: &str, path: &str) -> Self {
        Self::new(base_url, DavMethod::Copy, path)
    }

    /// Creates a new MOVE request.
    #[must_use]
    pub fn r#move(base_url: &str, path: &str) -> Self {
        Self::new(base_url, DavMethod::Move, path)
    }

    /// Sets basic auth credentials.
    #[must_use]
    pub fn credentials(mut self, user: &str, password: &str) -> Self {
        self.user = Some(user.to_string());
        self.password = Some(password.to_string());
        self.auth = AuthMethod::Basic;
        self
    }

    /// Sets bearer auth; the token travels in the password slot.
    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.password = Some(token.to_string());
        self.auth = AuthMethod::Bearer;
        self
    }

    /// Sets the user whose file tree version 2 paths resolve to.
    #[must_use]
    pub fn user(mut self, user: Option<&str>) -> Self {
        self.user = user.map(str::to_string);
        self
    }

    #[must_use]
    pub fn password(mut self, password: Option<&str>) -> Self {
        self.password = password.map(str::to_string);
        self
    }

    #[must_use]
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.auth = auth;
        self
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds every header of `headers`.
    #[must_use]
    pub fn headers(self, headers: &[(&str, &str)]) -> Self {
        headers
            .iter()
            .fold(self, |builder, (name, value)| builder.header(name, value))
    }

    /// Sets the Depth header.
    #[must_use]
    pub fn depth(self, depth: Depth) -> Self {
        self.header(Depth::HEADER, depth.as_str())
    }

    /// Sets the Destination header for COPY/MOVE.
    #[must_use]
    pub fn destination(self, dest: &str) -> Self {
        self.header(DESTINATION_HEADER, dest)
    }

    /// Sets the Overwrite header for COPY/MOVE.
    #[must_use]
    pub fn overwrite(self, value: bool) -> Self {
        self.header("Overwrite", if value { "T" } else { "F" })
    }

    /// Sets the Content-Type header.
    #[must_use]
    pub fn content_type(self, content_type: &str) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets an XML request body.
    #[must_use]
    pub fn xml_body(self, xml: &str) -> Self {
        self.content_type("application/xml; charset=utf-8")
            .body(xml.as_bytes().to_vec())
    }

    /// Selects the DAV endpoint version (1 or 2).
    #[must_use]
    pub fn dav_version(mut self, version: u8) -> Self {
        self.dav_version = version;
        self
    }

    /// Selects the path root below the version 2 endpoint.
    #[must_use]
    pub fn path_root(mut self, root: Option<&str>) -> Self {
        self.path_root = root.map(str::to_string);
        self
    }

    /// Forwards the original client address as `X-Forwarded-For`.
    #[must_use]
    pub fn source_ip(mut self, ip: &str) -> Self {
        self.source_ip = Some(ip.to_string());
        self
    }

    /// Timeout handed to the client with the request.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// ## Summary
    /// Resolves the final URL and header set.
    ///
    /// Caller headers are kept as given, except that URL-carrying headers
    /// (`Destination`) get `?` and `#` encoded and a caller `Authorization`
    /// header is replaced by the computed one.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidArgument` when the DAV version is unknown.
    pub fn build(self) -> CoreResult<DavRequest> {
        let dav_path = get_dav_path(
            self.user.as_deref(),
            self.dav_version,
            self.path_root.as_deref(),
        )?;
        let url = resolve_dav_url(&self.base_url, &dav_path, &self.path);

        if self.method.has_destination()
            && !self
                .headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(DESTINATION_HEADER))
        {
            tracing::warn!(method = %self.method, "Request has no Destination header");
        }

        let mut headers = Vec::with_capacity(self.headers.len() + 2);
        for (name, value) in self.headers {
            if name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                tracing::warn!("Replacing caller-supplied Authorization header");
                continue;
            }
            let value = if URL_HEADERS.iter().any(|h| name.eq_ignore_ascii_case(h)) {
                encode_reserved(&value)
            } else {
                value
            };
            headers.push((name, value));
        }

        headers.push((
            AUTHORIZATION_HEADER.to_string(),
            authorization_value(self.auth, self.user.as_deref(), self.password.as_deref()),
        ));
        if let Some(ip) = self.source_ip {
            headers.push((FORWARDED_FOR_HEADER.to_string(), ip));
        }

        tracing::debug!(method = %self.method, url = %url, "Built DAV request");

        Ok(DavRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
            timeout: self.timeout,
        })
    }

    /// ## Summary
    /// Builds the request and dispatches it through `client`.
    ///
    /// ## Errors
    /// Returns `DavError::CoreError` before any network call when the DAV
    /// version is unknown, and `DavError::Transport` with the client's own
    /// error when sending fails.
    pub async fn send<C: HttpClient>(self, client: &C) -> DavResult<DavResponse, C::Error> {
        let request = self.build()?;
        client.send(request).await.map_err(DavError::Transport)
    }
}

/// Server, credentials and endpoint defaults shared by a series of requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavTarget {
    pub base_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub auth: AuthMethod,
    pub dav_version: u8,
    pub path_root: Option<String>,
    pub timeout: Option<Duration>,
}

impl DavTarget {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            base_url: settings.server.base_url.clone(),
            user: settings.auth.user.clone(),
            password: settings.auth.password.clone(),
            auth: settings.auth.method,
            dav_version: settings.dav.version,
            path_root: settings.dav.path_root.clone(),
            timeout: settings.server.timeout(),
        }
    }

    /// ## Summary
    /// Loads the target from `.env`, `config.toml` and the environment.
    ///
    /// ## Errors
    /// Returns an error if the configuration cannot be loaded.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::from_settings(&load_config()?))
    }

    /// Starts a request against this target with its defaults applied.
    #[must_use]
    pub fn request(&self, method: DavMethod, path: &str) -> DavRequestBuilder {
        let builder = DavRequestBuilder::new(&self.base_url, method, path)
            .user(self.user.as_deref())
            .password(self.password.as_deref())
            .auth(self.auth)
            .dav_version(self.dav_version)
            .path_root(self.path_root.as_deref());
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }
}

/// ## Summary
/// Builds a DAV request from its parts and sends it through `client`.
///
/// The URL is `base_url` + DAV path for (`dav_version`, `path_root`, `user`)
/// + `path`, all slash-sanitized. The client's response is returned as is.
///
/// ## Errors
/// Returns `DavError::CoreError` when `dav_version` is unknown (nothing is
/// sent), and `DavError::Transport` when the client fails.
#[expect(clippy::too_many_arguments)]
#[tracing::instrument(skip(user, password, headers, body, client))]
pub async fn make_dav_request<C: HttpClient>(
    base_url: &str,
    user: Option<&str>,
    password: Option<&str>,
    method: DavMethod,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<Vec<u8>>,
    dav_version: u8,
    path_root: Option<&str>,
    auth: AuthMethod,
    client: &C,
) -> DavResult<DavResponse, C::Error> {
    let mut builder = DavRequestBuilder::new(base_url, method, path)
        .user(user)
        .password(password)
        .auth(auth)
        .headers(headers)
        .dav_version(dav_version)
        .path_root(path_root);
    if let Some(body) = body {
        builder = builder.body(body);
    }
    builder.send(client).await
}
