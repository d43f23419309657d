#![allow(clippy::unused_async)]
//! Tests for `make_dav_request` and the request builder.
//!
//! Verifies URL resolution per DAV version, reserved character encoding,
//! authorization and header passthrough, and error propagation.

use std::time::Duration;

use davkit_test::client::auth::AuthMethod;
use davkit_test::client::{DavError, DavRequestBuilder, make_dav_request};
use davkit_test::common::error::CoreError;
use davkit_test::rfc::rfc::dav::core::Depth;
use http::StatusCode;

use super::helpers::*;

// ============================================================================
// URL resolution
// ============================================================================

/// ## Summary
/// Test that version 1 resolves below the legacy endpoint with slashes collapsed.
#[test_log::test(tokio::test)]
async fn sanitizes_url_for_older_dav_path() {
    let client = MockClient::new();

    make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Get,
        "folder///file.txt",
        &[],
        None,
        1,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_method(DavMethod::Get)
        .assert_url("http://own.cloud/core/remote.php/webdav/folder/file.txt");
}

/// ## Summary
/// Test that version 2 resolves below the user's file tree.
#[test_log::test(tokio::test)]
async fn sanitizes_url_for_newer_dav_path() {
    let client = MockClient::new();

    make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Get,
        "folder///file.txt",
        &[],
        None,
        2,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_url("http://own.cloud/core/remote.php/dav/files/user1/folder/file.txt");
}

/// ## Summary
/// Test that a non-files root on version 2 targets the bare DAV endpoint.
#[test_log::test(tokio::test)]
async fn newer_dav_path_without_files_root() {
    let client = MockClient::new();

    make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Report,
        "systemtags-relations/files/12",
        &[],
        None,
        2,
        None,
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_method(DavMethod::Report)
        .assert_url("http://own.cloud/core/remote.php/dav/systemtags-relations/files/12");
}

/// ## Summary
/// Test that `?` and `#` are encoded in the path and in `Destination` only.
#[test_log::test(tokio::test)]
async fn encodes_reserved_characters_in_path_and_destination() {
    let client = MockClient::new();

    make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Move,
        "folder/file?q=hello#newfile",
        &[
            ("Destination", "http://own.cloud/core/remote.php/dav/files/user1/new?x#y"),
            ("X-Request-Id", "abc?def#ghi"),
        ],
        None,
        2,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_method(DavMethod::Move)
        .assert_url(
            "http://own.cloud/core/remote.php/dav/files/user1/folder/file%3Fq=hello%23newfile",
        )
        .assert_header(
            "Destination",
            "http://own.cloud/core/remote.php/dav/files/user1/new%3Fx%23y",
        )
        .assert_header("X-Request-Id", "abc?def#ghi");
}

// ============================================================================
// Authorization and headers
// ============================================================================

/// ## Summary
/// Test that bearer auth sends the password as token.
#[test_log::test(tokio::test)]
async fn bearer_auth_uses_password_as_token() {
    let client = MockClient::new();

    make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Get,
        "file.txt",
        &[],
        None,
        1,
        Some("files"),
        AuthMethod::Bearer,
        &client,
    )
    .await
    .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_header("Authorization", "Bearer pass");
}

/// ## Summary
/// Test that default auth is basic over `user:password`.
#[test_log::test(tokio::test)]
async fn basic_auth_by_default() {
    let client = MockClient::new();

    DavRequestBuilder::get(BASE_URL, "file.txt")
        .user(Some("user1"))
        .password(Some("pass"))
        .send(&client)
        .await
        .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_header("Authorization", "Basic dXNlcjE6cGFzcw==")
        .assert_header("Authorization", &basic_auth("user1", "pass"));
}

/// ## Summary
/// Test that a caller `Authorization` header never duplicates the computed one.
#[test_log::test(tokio::test)]
async fn caller_authorization_header_is_replaced() {
    let client = MockClient::new();

    make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Get,
        "file.txt",
        &[("authorization", "Bearer stale")],
        None,
        1,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_header("Authorization", "Basic dXNlcjE6cGFzcw==");
}

/// ## Summary
/// Test that caller headers and body reach the client as given.
#[test_log::test(tokio::test)]
async fn headers_and_body_pass_through() {
    let client = MockClient::new();

    make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Put,
        "notes/todo.txt",
        &[("Content-Type", "text/plain"), ("OC-Checksum", "SHA1:abc")],
        Some(b"buy milk".to_vec()),
        2,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect("request should be sent");

    let _ = client
        .last_request()
        .assert_method(DavMethod::Put)
        .assert_header("Content-Type", "text/plain")
        .assert_header("OC-Checksum", "SHA1:abc")
        .assert_body_contains("buy milk");
}

/// ## Summary
/// Test that builder extras reach the client.
#[test_log::test(tokio::test)]
async fn builder_forwards_source_ip_depth_and_timeout() {
    let client = MockClient::new();

    DavRequestBuilder::propfind(BASE_URL, "folder")
        .credentials("user1", "pass")
        .depth(Depth::One)
        .source_ip("192.168.1.20")
        .timeout(Duration::from_secs(3))
        .xml_body("<d:propfind xmlns:d=\"DAV:\"><d:allprop/></d:propfind>")
        .send(&client)
        .await
        .expect("request should be sent");

    let request = client
        .last_request()
        .assert_method(DavMethod::Propfind)
        .assert_header("Depth", "1")
        .assert_header("X-Forwarded-For", "192.168.1.20")
        .assert_body_contains("allprop");
    assert_eq!(request.0.timeout, Some(Duration::from_secs(3)));
}

// ============================================================================
// Responses and errors
// ============================================================================

/// ## Summary
/// Test that non-2xx responses come back as ordinary responses.
#[test_log::test(tokio::test)]
async fn error_status_is_returned_unchanged() {
    let client = MockClient::new().respond_with(
        DavResponse::new(StatusCode::NOT_FOUND)
            .with_header("Content-Type", "application/xml")
            .with_body("<d:error xmlns:d=\"DAV:\"/>"),
    );

    let response = make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Get,
        "missing.txt",
        &[],
        None,
        1,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect("non-2xx is not an error");

    let _ = TestResponse(response)
        .assert_status(StatusCode::NOT_FOUND)
        .assert_header("Content-Type", "application/xml")
        .assert_body("<d:error xmlns:d=\"DAV:\"/>");
}

/// ## Summary
/// Test that an unknown DAV version fails before anything is sent.
#[test_log::test(tokio::test)]
async fn unknown_dav_version_sends_nothing() {
    let client = MockClient::new();

    let err = make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Get,
        "file.txt",
        &[],
        None,
        3,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect_err("version 3 is unknown");

    assert!(matches!(
        err,
        DavError::CoreError(CoreError::InvalidArgument(ref message)) if message.contains('3')
    ));
    assert_eq!(client.request_count(), 0);
}

/// ## Summary
/// Test that the client's own error is propagated unchanged.
#[test_log::test(tokio::test)]
async fn transport_error_is_propagated() {
    let client = FailingClient::new("own.cloud:80");

    let err = make_dav_request(
        BASE_URL,
        Some("user1"),
        Some("pass"),
        DavMethod::Get,
        "file.txt",
        &[],
        None,
        1,
        Some("files"),
        AuthMethod::Basic,
        &client,
    )
    .await
    .expect_err("transport fails");

    match err {
        DavError::Transport(inner) => {
            assert_eq!(inner, MockTransportError("own.cloud:80".to_string()));
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

/// ## Summary
/// Test that one client serves sequential and concurrent requests.
#[test_log::test(tokio::test)]
async fn client_is_reused_across_requests() {
    let client = MockClient::new()
        .respond_with(DavResponse::new(StatusCode::CREATED))
        .respond_with(DavResponse::new(StatusCode::NO_CONTENT));

    let first = DavRequestBuilder::mkcol(BASE_URL, "a")
        .credentials("user1", "pass")
        .send(&client)
        .await
        .expect("first request");
    let second = DavRequestBuilder::delete(BASE_URL, "a")
        .credentials("user1", "pass")
        .send(&client)
        .await
        .expect("second request");
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::NO_CONTENT);

    let concurrent = futures::future::join_all((0..4).map(|i| {
        DavRequestBuilder::get(BASE_URL, &format!("file-{i}.txt"))
            .credentials("user1", "pass")
            .send(&client)
    }))
    .await;
    assert!(concurrent.iter().all(Result::is_ok));

    let urls: Vec<String> = client.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls.len(), 6);
    assert_eq!(urls[0], "http://own.cloud/core/remote.php/webdav/a");
    for i in 0..4 {
        assert!(urls.contains(&format!(
            "http://own.cloud/core/remote.php/webdav/file-{i}.txt"
        )));
    }
}
