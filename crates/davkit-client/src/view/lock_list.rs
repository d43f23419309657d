//! Lock list shown for a resource.

use davkit_rfc::rfc::dav::core::ActiveLock;
use percent_encoding::percent_decode_str;

use crate::url::sanitize_url;

/// Shown in place of the list when the resource has no locks.
pub const EMPTY_LOCKS_LABEL: &str = "Resource is not locked";

/// One rendered lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEntry {
    /// Position of the lock in the discovered list.
    pub index: usize,
    pub display_text: String,
    pub locktoken: String,
    pub lockroot: String,
}

/// Strips a full URL down to its path.
fn url_path(href: &str) -> &str {
    match href.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |idx| &rest[idx..]),
        None => href,
    }
}

/// ## Summary
/// Returns `href` relative to `root`, starting with `/`.
///
/// Both values may be full URLs or absolute paths. The result is
/// percent-decoded. Returns `None` when `href` is not inside `root`.
///
/// ## Example
/// ```ignore
/// relative_path("/remote.php/webdav", "/remote.php/webdav/my%20folder") // => Some("/my folder")
/// ```
#[must_use]
pub fn relative_path(root: &str, href: &str) -> Option<String> {
    let root = sanitize_url(url_path(root), Some(false));
    let href = sanitize_url(url_path(href), Some(false));

    let rest = href.strip_prefix(root.as_str())?;
    let rest = match rest {
        "" => "/",
        _ if rest.starts_with('/') => rest,
        // `/webdav-old` is not inside `/webdav`
        _ => return None,
    };
    Some(percent_decode_str(rest).decode_utf8_lossy().into_owned())
}

/// ## Summary
/// Builds the display entries for `locks`, in discovery order.
///
/// The lock root is shown relative to `root`, or as received when it lies
/// outside of it.
#[must_use]
pub fn format_locks(locks: &[ActiveLock], root: &str) -> Vec<LockEntry> {
    locks
        .iter()
        .enumerate()
        .map(|(index, lock)| {
            let path = relative_path(root, &lock.lockroot).unwrap_or_else(|| lock.lockroot.clone());
            LockEntry {
                index,
                display_text: format!("{} has locked this resource via {path}", lock.owner),
                locktoken: lock.locktoken.clone(),
                lockroot: lock.lockroot.clone(),
            }
        })
        .collect()
}

/// Whether the lock list is worth showing for a resource.
#[must_use]
pub fn can_display(locks: Option<&[ActiveLock]>) -> bool {
    locks.is_some_and(|locks| !locks.is_empty())
}

/// ## Summary
/// Renders the lock list as display lines.
///
/// An empty list renders as the single [`EMPTY_LOCKS_LABEL`] line.
#[must_use]
pub fn render_lock_list(locks: &[ActiveLock], root: &str) -> Vec<String> {
    if locks.is_empty() {
        return vec![EMPTY_LOCKS_LABEL.to_string()];
    }
    format_locks(locks, root)
        .into_iter()
        .map(|entry| entry.display_text)
        .collect()
}
