//! `WebDAV` request building and dispatch.
//!
//! Resolves resource paths against the server's DAV endpoints, assembles the
//! authorization and caller headers, and hands the finished request to an
//! injected [`client::HttpClient`]. Responses are returned untouched.

pub mod auth;
pub mod client;
pub mod dav_path;
pub mod delete;
pub mod error;
pub mod locks;
pub mod request;
pub mod reqwest_client;
pub mod url;
pub mod view;

pub use client::{DavRequest, DavResponse, HttpClient};
pub use dav_path::{DavPathVersion, get_dav_path};
pub use delete::delete;
pub use error::{DavError, DavResult};
pub use locks::get_active_locks;
pub use request::{DavRequestBuilder, DavTarget, make_dav_request};
pub use reqwest_client::{ReqwestClient, ReqwestClientError};
pub use url::sanitize_url;
