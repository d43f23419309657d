//! `WebDAV` (RFC 4918) types, request bodies and response parsing.

pub mod build;
pub mod core;
pub mod parse;
