//! Internal utilities.

/// Returns `true` if the effective user is root.
#[must_use]
pub fn is_root() -> bool {
    // SAFETY: `geteuid` has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}
