//! Tests for lock discovery and lock list rendering.

use std::time::Duration;

use davkit_test::client::view::lock_list::{EMPTY_LOCKS_LABEL, can_display, render_lock_list};
use davkit_test::client::{DavError, DavTarget, get_active_locks};
use davkit_test::common::config::AuthMethod;
use http::StatusCode;

use super::helpers::*;

fn target(dav_version: u8) -> DavTarget {
    DavTarget {
        base_url: BASE_URL.to_string(),
        user: Some("admin".to_string()),
        password: Some("secret".to_string()),
        auth: AuthMethod::Basic,
        dav_version,
        path_root: Some("files".to_string()),
        timeout: Some(Duration::from_secs(30)),
    }
}

/// ## Summary
/// Test that lock discovery sends a Depth 0 PROPFIND and parses the locks.
#[test_log::test(tokio::test)]
async fn discovers_active_locks() {
    let client = MockClient::new().respond_with(lock_discovery_response(&[
        ("admin", "/remote.php/webdav/folder", "opaquelocktoken:aaa"),
        ("bob", "/remote.php/webdav/folder/sub", "opaquelocktoken:bbb"),
    ]));

    let locks = get_active_locks(&target(1), "folder", &client)
        .await
        .expect("locks should be discovered");

    assert_eq!(locks.len(), 2);
    assert_eq!(locks[0].owner, "admin");
    assert_eq!(locks[0].locktoken, "opaquelocktoken:aaa");
    assert_eq!(locks[1].lockroot, "/remote.php/webdav/folder/sub");

    let request = client
        .last_request()
        .assert_method(DavMethod::Propfind)
        .assert_url("http://own.cloud/core/remote.php/webdav/folder")
        .assert_header("Depth", "0")
        .assert_header("Authorization", &basic_auth("admin", "secret"))
        .assert_body_contains("lockdiscovery");
    assert_eq!(request.0.timeout, Some(Duration::from_secs(30)));

    assert!(can_display(Some(locks.as_slice())));
    assert_eq!(
        render_lock_list(&locks, "/remote.php/webdav"),
        vec![
            "admin has locked this resource via /folder",
            "bob has locked this resource via /folder/sub",
        ]
    );
}

/// ## Summary
/// Test that a resource without locks renders the empty label.
#[test_log::test(tokio::test)]
async fn unlocked_resource_renders_empty_label() {
    let client = MockClient::new().respond_with(lock_discovery_response(&[]));

    let locks = get_active_locks(&target(2), "file.txt", &client)
        .await
        .expect("empty lockdiscovery is valid");

    assert!(locks.is_empty());
    assert!(!can_display(Some(locks.as_slice())));
    assert_eq!(
        render_lock_list(&locks, "/remote.php/dav/files/admin"),
        vec![EMPTY_LOCKS_LABEL]
    );
    let _ = client
        .last_request()
        .assert_url("http://own.cloud/core/remote.php/dav/files/admin/file.txt");
}

/// ## Summary
/// Test that a failed PROPFIND surfaces its status.
#[test_log::test(tokio::test)]
async fn failed_discovery_reports_status() {
    let client = MockClient::new().respond_with(DavResponse::new(StatusCode::FORBIDDEN));

    let err = get_active_locks(&target(1), "secret", &client)
        .await
        .expect_err("403 is not a lock list");

    assert!(matches!(err, DavError::UnexpectedStatus(StatusCode::FORBIDDEN)));
}

/// ## Summary
/// Test that a malformed body is a parse error.
#[test_log::test(tokio::test)]
async fn malformed_body_is_a_parse_error() {
    let client = MockClient::new().respond_with(
        DavResponse::new(StatusCode::MULTI_STATUS).with_body("<d:multistatus xmlns:d=\"DAV:\"><d:response></d:multistatus>"),
    );

    let err = get_active_locks(&target(1), "folder", &client)
        .await
        .expect_err("mismatched tags");

    assert!(matches!(err, DavError::ParseError(_)));
}
