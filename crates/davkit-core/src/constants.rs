/// Path components shared by every DAV endpoint of the server.
pub const REMOTE_COMPONENT: &str = "remote.php";

/// Legacy (version 1) DAV endpoint.
pub const LEGACY_DAV_COMPONENT: &str = "webdav";
pub const LEGACY_DAV_PATH: &str =
    const_str::concat!(REMOTE_COMPONENT, "/", LEGACY_DAV_COMPONENT, "/");

/// Current (version 2) DAV endpoint.
pub const DAV_COMPONENT: &str = "dav";
pub const DAV_PATH: &str = const_str::concat!(REMOTE_COMPONENT, "/", DAV_COMPONENT);

/// Path root under the version 2 endpoint that holds per-user file trees.
pub const FILES_PATH_ROOT: &str = "files";
pub const DAV_FILES_PREFIX: &str = const_str::concat!(DAV_PATH, "/", FILES_PATH_ROOT, "/");

/// Header names the request builder treats specially.
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const DESTINATION_HEADER: &str = "Destination";
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";
