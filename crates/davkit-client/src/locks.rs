//! Lock discovery for a single resource.

use davkit_rfc::rfc::dav::build::lock_discovery_propfind;
use davkit_rfc::rfc::dav::core::{ActiveLock, DavMethod, Depth};
use davkit_rfc::rfc::dav::parse::parse_lock_discovery;

use crate::client::HttpClient;
use crate::error::{DavError, DavResult};
use crate::request::DavTarget;

/// ## Summary
/// Fetches the active locks of `path` with a Depth 0 PROPFIND on
/// `DAV:lockdiscovery`.
///
/// ## Errors
/// Returns `DavError::UnexpectedStatus` when the server does not answer with
/// a success status, `DavError::ParseError` when the body is not a readable
/// multistatus, and the usual build and transport errors.
#[tracing::instrument(skip(target, client), fields(base_url = %target.base_url))]
pub async fn get_active_locks<C: HttpClient>(
    target: &DavTarget,
    path: &str,
    client: &C,
) -> DavResult<Vec<ActiveLock>, C::Error> {
    let response = target
        .request(DavMethod::Propfind, path)
        .depth(Depth::Zero)
        .xml_body(&lock_discovery_propfind())
        .send(client)
        .await?;

    if !response.status.is_success() {
        tracing::warn!(status = %response.status, "Lock discovery failed");
        return Err(DavError::UnexpectedStatus(response.status));
    }

    let locks = parse_lock_discovery(&response.body)?;
    tracing::debug!(count = locks.len(), "Discovered active locks");
    Ok(locks)
}
