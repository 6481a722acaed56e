//! Path confinement.
//!
//! Script and artifact references are relative to a configured root. A
//! reference that is absolute or climbs with `..` does not live under that
//! root and is never resolved.

use std::path::{Component, Path, PathBuf};

/// Whether `relative` stays inside whatever directory it is joined onto.
///
/// # Examples
///
/// ```
/// use protogate_core::util::paths::is_confined;
///
/// assert!(is_confined("tools/render.py"));
/// assert!(is_confined("./a/./b.py"));
/// assert!(!is_confined("/bin/sh"));
/// assert!(!is_confined("../outside.py"));
/// assert!(!is_confined("tools/../../escape.py"));
/// ```
pub fn is_confined(relative: impl AsRef<Path>) -> bool {
    let relative = relative.as_ref();
    !relative.as_os_str().is_empty()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Join `relative` onto `root`, or `None` if it would leave `root`.
pub fn resolve_under(root: &Path, relative: impl AsRef<Path>) -> Option<PathBuf> {
    let relative = relative.as_ref();
    if is_confined(relative) {
        Some(root.join(relative))
    } else {
        None
    }
}
