//! `Authorization` header values.

use base64::{Engine as _, engine::general_purpose::STANDARD};

pub use davkit_core::config::AuthMethod;

/// ## Summary
/// Builds the `Authorization` header value for a request.
///
/// Bearer auth sends `password` as the token and ignores `user`. Basic auth
/// encodes `user:password`, treating a missing part as empty.
#[must_use]
pub fn authorization_value(method: AuthMethod, user: Option<&str>, password: Option<&str>) -> String {
    let password = password.unwrap_or_default();
    match method {
        AuthMethod::Bearer => format!("Bearer {password}"),
        AuthMethod::Basic => {
            let credentials = format!("{}:{password}", user.unwrap_or_default());
            format!("Basic {}", STANDARD.encode(credentials))
        }
    }
}
