//! Presentation helpers for DAV resource state.

pub mod lock_list;

pub use lock_list::{LockEntry, can_display, format_locks, relative_path, render_lock_list};
