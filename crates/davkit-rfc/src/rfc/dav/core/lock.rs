//! Active lock description (RFC 4918 §14.1).

/// Lock scope of an active lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockScope {
    Exclusive,
    Shared,
}

/// One `DAV:activelock` entry of a resource's `DAV:lockdiscovery` property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLock {
    /// Principal holding the lock, as reported in `DAV:owner`.
    pub owner: String,
    /// Href of the resource the lock was taken on.
    pub lockroot: String,
    /// Lock token href (`opaquelocktoken:...`).
    pub locktoken: String,
    pub scope: Option<LockScope>,
    pub depth: Option<super::Depth>,
    /// Raw `DAV:timeout` value, e.g. `Second-3600`.
    pub timeout: Option<String>,
}

impl ActiveLock {
    #[must_use]
    pub fn new(owner: &str, lockroot: &str, locktoken: &str) -> Self {
        Self {
            owner: owner.to_string(),
            lockroot: lockroot.to_string(),
            locktoken: locktoken.to_string(),
            ..Self::default()
        }
    }
}
