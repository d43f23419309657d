use thiserror::Error;

/// Errors raised while building or dispatching a DAV request.
///
/// `E` is the injected client's own error type; it is passed through
/// untouched in [`DavError::Transport`].
#[derive(Error, Debug)]
pub enum DavError<E: std::error::Error + 'static> {
    #[error(transparent)]
    CoreError(#[from] davkit_core::error::CoreError),

    #[error("Transport error: {0}")]
    Transport(#[source] E),

    #[error(transparent)]
    ParseError(#[from] davkit_rfc::rfc::dav::parse::ParseError),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(http::StatusCode),
}

pub type DavResult<T, E> = std::result::Result<T, DavError<E>>;
