//! PROPFIND request bodies.

/// Builds a PROPFIND body selecting the given `DAV:` properties.
///
/// ## Example
/// ```ignore
/// propfind_props(&["getetag"])
/// // => <?xml version="1.0" encoding="utf-8"?><d:propfind xmlns:d="DAV:"><d:prop><d:getetag/></d:prop></d:propfind>
/// ```
#[must_use]
pub fn propfind_props(props: &[&str]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="utf-8"?><d:propfind xmlns:d="DAV:"><d:prop>"#);
    for prop in props {
        xml.push_str("<d:");
        xml.push_str(prop);
        xml.push_str("/>");
    }
    xml.push_str("</d:prop></d:propfind>");
    xml
}

/// PROPFIND body requesting only `DAV:lockdiscovery`.
#[must_use]
pub fn lock_discovery_propfind() -> String {
    propfind_props(&["lockdiscovery"])
}
