//! `WebDAV` XML response parsing.
//!
//! Parsers here read multistatus bodies returned by the server using
//! `quick-xml`. Namespace prefixes are ignored; elements are matched on
//! their local name.

mod error;
pub mod lockdiscovery;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lockdiscovery::parse_lock_discovery;
