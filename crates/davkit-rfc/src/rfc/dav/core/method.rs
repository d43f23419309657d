//! HTTP and `WebDAV` request methods.

use std::fmt;

/// Request method understood by the DAV endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DavMethod {
    Get,
    Head,
    Put,
    Post,
    Delete,
    Options,
    Mkcol,
    Propfind,
    Proppatch,
    Copy,
    Move,
    Lock,
    Unlock,
    Report,
}

impl DavMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Mkcol => "MKCOL",
            Self::Propfind => "PROPFIND",
            Self::Proppatch => "PROPPATCH",
            Self::Copy => "COPY",
            Self::Move => "MOVE",
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
            Self::Report => "REPORT",
        }
    }

    /// Whether the method carries a `Destination` header (RFC 4918 §10.3).
    #[must_use]
    pub const fn has_destination(self) -> bool {
        matches!(self, Self::Copy | Self::Move)
    }
}

impl fmt::Display for DavMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
