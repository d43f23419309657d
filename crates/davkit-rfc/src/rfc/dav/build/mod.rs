//! `WebDAV` XML request bodies.

pub mod propfind;

pub use propfind::{lock_discovery_propfind, propfind_props};
