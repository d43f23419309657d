//! URL sanitization and DAV URL assembly.

/// Characters that must not reach the server as URL syntax when they appear
/// inside a resource path or a URL-carrying header value.
const RESERVED: [(char, &str); 2] = [('?', "%3F"), ('#', "%23")];

const SCHEME_SEPARATOR: &str = "://";

/// ## Summary
/// Collapses repeated slashes in the path portion of `url` and applies the
/// trailing-slash rule.
///
/// The `//` of a leading `scheme://` is kept, and the query string (from the
/// first `?`) is not touched by slash collapsing. A `://` that does not follow
/// a valid scheme is ordinary path text. `trailing_slash` of `Some(true)`
/// makes the result end with exactly one `/`; `Some(false)` and `None` strip
/// every trailing `/`.
///
/// The trailing-slash rule applies to the end of the whole string, so it also
/// edits the end of a query string: `http://h/a?x=/` becomes `http://h/a?x=`.
///
/// ## Example
/// ```ignore
/// sanitize_url("http://own.cloud//index.php//url/", None) // => "http://own.cloud/index.php/url"
/// sanitize_url("http://own.cloud", Some(true))            // => "http://own.cloud/"
/// ```
#[must_use]
pub fn sanitize_url(url: &str, trailing_slash: Option<bool>) -> String {
    let (path, query) = url.find('?').map_or((url, ""), |idx| url.split_at(idx));

    let (scheme, rest) = path
        .find(SCHEME_SEPARATOR)
        .filter(|&idx| is_scheme(&path[..idx]))
        .map_or(("", path), |idx| path.split_at(idx + SCHEME_SEPARATOR.len()));

    let mut sanitized = String::with_capacity(url.len() + 1);
    sanitized.push_str(scheme);
    // A slash right after the scheme separator would extend its run
    let mut previous_slash = !scheme.is_empty();
    for c in rest.chars() {
        if c == '/' && previous_slash {
            continue;
        }
        previous_slash = c == '/';
        sanitized.push(c);
    }
    sanitized.push_str(query);

    let trimmed_len = sanitized.trim_end_matches('/').len();
    sanitized.truncate(trimmed_len);
    if trailing_slash.unwrap_or(false) {
        sanitized.push('/');
    }
    sanitized
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` (RFC 3986 §3.1).
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// ## Summary
/// Percent-encodes `?` and `#` so they are sent as literal characters.
///
/// No other character is touched.
#[must_use]
pub fn encode_reserved(value: &str) -> String {
    RESERVED
        .iter()
        .fold(value.to_string(), |acc, (c, encoded)| acc.replace(*c, encoded))
}

/// ## Summary
/// Joins a base server URL, a DAV path and a resource path into the final
/// request URL.
///
/// The resource path is stripped of leading and trailing slashes, has its
/// reserved characters encoded and its slashes collapsed.
///
/// ## Example
/// ```ignore
/// resolve_dav_url("http://own.cloud///core", "remote.php/webdav/", "folder///file.txt")
/// // => "http://own.cloud/core/remote.php/webdav/folder/file.txt"
/// ```
#[must_use]
pub fn resolve_dav_url(base_url: &str, dav_path: &str, path: &str) -> String {
    // Rooted so a leading `name://` in the path is never read as a scheme
    let rooted = sanitize_url(&format!("/{}", encode_reserved(path)), Some(false));
    let path = rooted.trim_start_matches('/');

    let mut url = sanitize_url(
        &format!("{base_url}/{dav_path}"),
        Some(dav_path.ends_with('/')),
    );
    if !path.is_empty() {
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(path);
    }
    url
}
