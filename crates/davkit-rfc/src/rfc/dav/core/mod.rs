//! Core `WebDAV` types.

mod depth;
mod lock;
mod method;

pub use depth::Depth;
pub use lock::{ActiveLock, LockScope};
pub use method::DavMethod;
