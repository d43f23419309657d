//! `WebDAV` protocol vocabulary used by the davkit request helpers.

pub mod rfc;
