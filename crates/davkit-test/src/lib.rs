//! davkit - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `davkit_test::` paths.

pub use davkit_client as client;
pub use davkit_core as common;
pub use davkit_rfc as rfc;
