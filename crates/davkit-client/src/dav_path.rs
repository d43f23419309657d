//! DAV endpoint selection by protocol version.

use davkit_core::constants::{DAV_FILES_PREFIX, DAV_PATH, FILES_PATH_ROOT, LEGACY_DAV_PATH};
use davkit_core::error::{CoreError, CoreResult};

/// Version used when the caller does not pick one.
pub const DEFAULT_DAV_VERSION: u8 = 1;

/// Path root used when the caller does not pick one.
pub const DEFAULT_PATH_ROOT: Option<&str> = Some(FILES_PATH_ROOT);

/// DAV endpoint generation exposed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DavPathVersion {
    /// `remote.php/webdav/`, rooted at the authenticated user's files.
    #[default]
    Legacy,
    /// `remote.php/dav`, with per-user trees under `files/<user>/`.
    Current,
}

impl DavPathVersion {
    /// ## Summary
    /// Returns the endpoint path for this version, relative to the server root.
    #[must_use]
    pub fn path(self, user: Option<&str>, path_root: Option<&str>) -> String {
        match self {
            Self::Legacy => LEGACY_DAV_PATH.to_string(),
            Self::Current if path_root == Some(FILES_PATH_ROOT) => {
                format!("{DAV_FILES_PREFIX}{}/", user.unwrap_or_default())
            }
            Self::Current => DAV_PATH.to_string(),
        }
    }
}

impl TryFrom<u8> for DavPathVersion {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Legacy),
            2 => Ok(Self::Current),
            other => Err(CoreError::InvalidArgument(format!(
                "DAV path version {other} is unknown"
            ))),
        }
    }
}

/// ## Summary
/// Resolves the DAV endpoint path for `version`.
///
/// Version 1 always yields `remote.php/webdav/`. Version 2 yields
/// `remote.php/dav/files/<user>/` when `path_root` is `files`, and
/// `remote.php/dav` otherwise.
///
/// ## Errors
/// Returns `CoreError::InvalidArgument` naming the version when it is neither 1 nor 2.
pub fn get_dav_path(user: Option<&str>, version: u8, path_root: Option<&str>) -> CoreResult<String> {
    Ok(DavPathVersion::try_from(version)?.path(user, path_root))
}
