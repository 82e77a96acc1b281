//! core::resolve
//!
//! Path arithmetic shared by the registry and the workspace.
//!
//! # Rules
//!
//! - Segments are concatenated under the base; empty segments are skipped.
//!   A leading separator or drive prefix on a segment is dropped, so a name
//!   never escapes its base through an absolute segment.
//! - Root rebinding is the exception: [`join_rebinding`] lets an absolute
//!   segment restart the path, so `set_root("/opt")` moves the root there.
//! - Only the root is normalized: rebinding folds `.` and `..` lexically so
//!   the stored root is always absolute and free of dot components.
//! - Non-root values are joined onto the root at query time and are never
//!   normalized further.

use std::path::{Component, Path, PathBuf};

use super::types::{validate_segments, PathName};
use super::workspace::{Workspace, WorkspaceError};

impl<C> Workspace<C> {
    /// Resolve `segments` under the path registered as `name`.
    ///
    /// Equivalent to joining each segment onto [`Workspace::get_path`].
    /// Pure; nothing is created on disk.
    ///
    /// # Errors
    ///
    /// - `WorkspaceError::Validation` for a malformed name or segment
    /// - `WorkspaceError::NotFound` if `name` is not registered
    pub fn resolve<S: AsRef<str>>(&self, name: &str, segments: &[S]) -> Result<PathBuf, WorkspaceError> {
        let name = PathName::new(name)?;
        validate_segments(segments)?;
        let base = self.lookup(&name)?;
        let resolved = join_onto(base, segments);
        tracing::trace!(name = %name, path = %resolved.display(), "resolved path");
        Ok(resolved)
    }
}

/// Join segments into a single relative fragment.
///
/// # Example
///
/// ```
/// use dirmap::core::resolve::join_segments;
/// use std::path::PathBuf;
///
/// assert_eq!(join_segments(&["var", "log"]), PathBuf::from("var/log"));
/// assert_eq!(join_segments(&["", "cache"]), PathBuf::from("cache"));
/// assert_eq!(join_segments(&["/srv", "data"]), PathBuf::from("srv/data"));
/// assert_eq!(join_segments::<&str>(&[]), PathBuf::new());
/// ```
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> PathBuf {
    join_onto(PathBuf::new(), segments)
}

/// Join segments onto an existing base path.
///
/// Every segment stays under `base`: root and prefix components are
/// dropped, everything else is appended as-is.
///
/// ```
/// use dirmap::core::resolve::join_onto;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     join_onto(PathBuf::from("/w"), &["/etc", "passwd"]),
///     PathBuf::from("/w/etc/passwd")
/// );
/// ```
pub fn join_onto<S: AsRef<str>>(mut base: PathBuf, segments: &[S]) -> PathBuf {
    for segment in segments {
        let segment: &str = segment.as_ref();
        for component in Path::new(segment).components() {
            match component {
                Component::RootDir | Component::Prefix(_) => {}
                other => base.push(other.as_os_str()),
            }
        }
    }
    base
}

/// Drop root and prefix components, leaving a path relative to any base.
pub fn strip_anchor(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect()
}

/// Join segments into the fragment a root rebind starts from.
///
/// Unlike [`join_segments`], an absolute segment replaces everything before
/// it.
pub fn join_rebinding<S: AsRef<str>>(segments: &[S]) -> PathBuf {
    let mut fragment = PathBuf::new();
    for segment in segments {
        let segment: &str = segment.as_ref();
        if !segment.is_empty() {
            fragment.push(segment);
        }
    }
    fragment
}

/// Compute the new root from the previous root and a fragment.
///
/// The fragment is joined onto `old_root` and the result is normalized.
/// An absolute fragment replaces the old root entirely.
///
/// # Example
///
/// ```
/// use dirmap::core::resolve::rebase_root;
/// use std::path::{Path, PathBuf};
///
/// let root = Path::new("/srv/app");
/// assert_eq!(rebase_root(root, Path::new("data")), PathBuf::from("/srv/app/data"));
/// assert_eq!(rebase_root(root, Path::new("../other")), PathBuf::from("/srv/other"));
/// assert_eq!(rebase_root(root, Path::new("/opt")), PathBuf::from("/opt"));
/// ```
pub fn rebase_root(old_root: &Path, fragment: &Path) -> PathBuf {
    normalize_lexically(&old_root.join(fragment))
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the filesystem root stays at the root. Leading `..` components of
/// a relative path are kept, since there is nothing to fold them into.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NO_SEGMENTS;
    use crate::fs::RecordingDirCreator;

    fn workspace(root: &str) -> Workspace<RecordingDirCreator> {
        Workspace::with_creator(root, RecordingDirCreator::new()).unwrap()
    }

    #[test]
    fn resolve_joins_onto_registered_path() {
        let mut ws = workspace("/w");
        ws.set_path("resolve", &["resolve"]).unwrap();
        assert_eq!(
            ws.resolve("resolve", &["a", "s", "d", "f", "g"]).unwrap(),
            PathBuf::from("/w/resolve/a/s/d/f/g")
        );
    }

    #[test]
    fn resolve_without_segments_is_get_path() {
        let mut ws = workspace("/w");
        ws.set_path("logs", &["var", "log"]).unwrap();
        assert_eq!(
            ws.resolve("logs", NO_SEGMENTS).unwrap(),
            ws.get_path("logs").unwrap()
        );
    }

    #[test]
    fn resolve_follows_root_rebinding() {
        let mut ws = workspace("/w");
        ws.set_path("logs", &["var", "log"]).unwrap();
        ws.set_root("nested").unwrap();
        assert_eq!(
            ws.resolve("logs", &["app.log"]).unwrap(),
            PathBuf::from("/w/nested/var/log/app.log")
        );
    }

    #[test]
    fn resolve_unknown_name() {
        let ws = workspace("/w");
        let err = ws.resolve("nope", &["a"]).unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound { name } if name == "nope"));
    }

    #[test]
    fn resolve_reports_bad_segment_before_lookup() {
        let ws = workspace("/w");
        // Validation wins even though the name is also unknown.
        let err = ws.resolve("nope", &["a", "b", "\0"]).unwrap_err();
        assert!(matches!(err, WorkspaceError::Validation(_)), "{err:?}");
    }

    #[test]
    fn join_skips_empty_segments() {
        assert_eq!(
            join_segments(&["", "a", "", "b", ""]),
            PathBuf::from("a/b")
        );
    }

    #[test]
    fn join_onto_base() {
        assert_eq!(
            join_onto(PathBuf::from("/w"), &["var", "log"]),
            PathBuf::from("/w/var/log")
        );
    }

    #[test]
    fn join_keeps_parent_components() {
        // Only the root is normalized; fragments are joined as-is.
        assert_eq!(
            join_onto(PathBuf::from("/w"), &["a", "..", "b"]),
            PathBuf::from("/w/a/../b")
        );
    }

    #[test]
    fn absolute_segment_stays_under_base() {
        assert_eq!(
            join_onto(PathBuf::from("/w"), &["a", "/abs", "b"]),
            PathBuf::from("/w/a/abs/b")
        );
    }

    #[test]
    fn strip_anchor_makes_relative() {
        assert_eq!(strip_anchor(Path::new("/abs/b")), PathBuf::from("abs/b"));
        assert_eq!(strip_anchor(Path::new("rel")), PathBuf::from("rel"));
        assert_eq!(strip_anchor(Path::new("/")), PathBuf::new());
    }

    #[test]
    fn rebinding_join_restarts_at_absolute_segment() {
        assert_eq!(
            join_rebinding(&["a", "/abs", "", "b"]),
            PathBuf::from("/abs/b")
        );
    }

    #[test]
    fn resolve_keeps_absolute_segments_under_name() {
        let mut ws = workspace("/w");
        ws.set_path("logs", &["var", "log"]).unwrap();
        assert_eq!(
            ws.resolve("logs", &["/etc", "passwd"]).unwrap(),
            PathBuf::from("/w/var/log/etc/passwd")
        );
    }

    #[test]
    fn absolute_fragment_follows_root_rebinding() {
        let mut ws = workspace("/w");
        ws.set_path("x", &["/abs", "b"]).unwrap();
        assert_eq!(ws.get_path("x").unwrap(), PathBuf::from("/w/abs/b"));

        ws.set_root("/other").unwrap();
        assert_eq!(ws.root(), Path::new("/other"));
        assert_eq!(ws.get_path("x").unwrap(), PathBuf::from("/other/abs/b"));
    }

    #[test]
    fn normalize_folds_dots() {
        assert_eq!(
            normalize_lexically(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
    }

    #[test]
    fn normalize_stops_at_filesystem_root() {
        assert_eq!(
            normalize_lexically(Path::new("/a/../../..")),
            PathBuf::from("/")
        );
    }

    #[test]
    fn normalize_keeps_leading_parent_of_relative_path() {
        assert_eq!(
            normalize_lexically(Path::new("../a/../b")),
            PathBuf::from("../b")
        );
    }

    #[test]
    fn rebase_relative_fragment_chains() {
        let first = rebase_root(Path::new("/a"), Path::new("b"));
        let second = rebase_root(&first, Path::new("c"));
        assert_eq!(second, PathBuf::from("/a/b/c"));
    }

    #[test]
    fn rebase_empty_fragment_keeps_root() {
        assert_eq!(
            rebase_root(Path::new("/a/b"), Path::new("")),
            PathBuf::from("/a/b")
        );
    }
}
