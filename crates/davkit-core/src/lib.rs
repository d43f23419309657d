//! Shared building blocks for the davkit crates: errors, configuration and
//! the DAV path constants.

pub mod config;
pub mod constants;
pub mod error;
