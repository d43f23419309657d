//! DELETE helper.

use davkit_core::config::AuthMethod;

use crate::client::{DavResponse, HttpClient};
use crate::dav_path::DEFAULT_PATH_ROOT;
use crate::error::DavResult;
use crate::request::DavRequestBuilder;

/// ## Summary
/// Sends a DELETE for `path` with basic auth and no body.
///
/// `headers` are passed through as given. `source_ip`, when set, is sent as
/// `X-Forwarded-For`.
///
/// ## Errors
/// Returns `DavError::CoreError` when `dav_version` is unknown (nothing is
/// sent), and `DavError::Transport` when the client fails. Non-2xx
/// responses are returned as `Ok`.
#[expect(clippy::too_many_arguments)]
#[tracing::instrument(skip(password, headers, client))]
pub async fn delete<C: HttpClient>(
    base_url: &str,
    user: &str,
    password: &str,
    path: &str,
    headers: &[(&str, &str)],
    dav_version: u8,
    source_ip: Option<&str>,
    client: &C,
) -> DavResult<DavResponse, C::Error> {
    let mut builder = DavRequestBuilder::delete(base_url, path)
        .user(Some(user))
        .password(Some(password))
        .auth(AuthMethod::Basic)
        .headers(headers)
        .dav_version(dav_version)
        .path_root(DEFAULT_PATH_ROOT);
    if let Some(ip) = source_ip {
        builder = builder.source_ip(ip);
    }
    builder.send(client).await
}
