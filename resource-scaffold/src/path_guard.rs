//! Output path containment
//!
//! Every computed output path is checked against the base directory it must
//! stay inside before anything is written. Both paths are canonicalized
//! textually, so the check does not depend on what exists on disk.

use std::fmt;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// Which logical output path is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathLabel {
    /// Controller sub-folder
    ControllerFolder,
    /// Controller class file
    ControllerFile,
    /// UI page or view folder
    UiFolder,
    /// A single UI page or view file
    UiPage,
    /// Model class file
    ModelFile,
    /// Migration file
    MigrationFile,
}

impl fmt::Display for PathLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ControllerFolder => "Controller folder",
            Self::ControllerFile => "Controller file",
            Self::UiFolder => "UI folder",
            Self::UiPage => "UI page",
            Self::ModelFile => "Model file",
            Self::MigrationFile => "Migration file",
        })
    }
}

/// Canonicalize a path without touching the filesystem
///
/// Separators become `/`, empty and `.` segments are dropped and `..` removes
/// the previous segment. A `..` with nothing left to remove is ignored, so
/// `/../etc` canonicalizes to `/etc`. A leading `/` is kept.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::path_guard::canonicalize;
/// assert_eq!(canonicalize("/app/./Http//Controllers/../Models"), "/app/Http/Models");
/// assert_eq!(canonicalize("C:\\app\\Models"), "C:/app/Models");
/// assert_eq!(canonicalize("/../../etc"), "/etc");
/// ```
#[must_use]
pub fn canonicalize(path: impl AsRef<Path>) -> String {
    let path = path.as_ref().to_string_lossy().replace('\\', "/");
    let is_absolute = path.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if is_absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Whether `candidate` is `base` itself or nested under it
#[must_use]
pub fn is_within(candidate: impl AsRef<Path>, base: impl AsRef<Path>) -> bool {
    let base = canonicalize(base);
    let base = base.trim_end_matches('/');
    let candidate = canonicalize(candidate);

    candidate == base
        || candidate
            .strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Require `candidate` to stay inside `base`
///
/// # Errors
///
/// Returns [`ScaffoldError::PathEscapesBase`] naming `label` when the
/// canonicalized candidate is neither the base nor nested under it.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::path_guard::{ensure_within, PathLabel};
/// let base = "/app/Http/Controllers";
/// assert!(ensure_within("/app/Http/Controllers/Admin/User.php", base, PathLabel::ControllerFile).is_ok());
/// assert!(ensure_within(base, base, PathLabel::ControllerFolder).is_ok());
/// assert!(ensure_within("/app/Http/Controllers/../../etc/passwd", base, PathLabel::ControllerFile).is_err());
/// ```
pub fn ensure_within(
    candidate: impl AsRef<Path>,
    base: impl AsRef<Path>,
    label: PathLabel,
) -> Result<()> {
    let candidate = candidate.as_ref();
    let base = base.as_ref();

    if is_within(candidate, base) {
        tracing::debug!(%label, candidate = %candidate.display(), "path within base");
        Ok(())
    } else {
        tracing::debug!(
            %label,
            candidate = %candidate.display(),
            base = %base.display(),
            "path escapes base"
        );
        Err(ScaffoldError::PathEscapesBase { label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/app/Http/Controllers";

    #[test]
    fn test_canonicalize_relative() {
        assert_eq!(canonicalize("a/b/../c"), "a/c");
        assert_eq!(canonicalize("./a/./b/"), "a/b");
        assert_eq!(canonicalize("../../a"), "a");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_canonicalize_absolute_clamps_at_root() {
        assert_eq!(canonicalize("/"), "/");
        assert_eq!(canonicalize("/.."), "/");
        assert_eq!(canonicalize("/a/../../b"), "/b");
    }

    #[test]
    fn test_nested_candidate_accepted() {
        assert!(is_within("/app/Http/Controllers/Admin/User.php", BASE));
        assert!(is_within("/app/Http/Controllers/Admin/../User.php", BASE));
    }

    #[test]
    fn test_base_itself_accepted() {
        assert!(is_within(BASE, BASE));
        assert!(is_within("/app/Http/Controllers/", BASE));
        assert!(is_within(BASE, "/app/Http/Controllers/"));
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(!is_within("/app/Http/Controllers/../../etc/passwd", BASE));
        assert!(!is_within("/app/Http/Controllers/..", BASE));
        assert!(!is_within("/etc/passwd", BASE));
    }

    #[test]
    fn test_sibling_prefix_rejected() {
        assert!(!is_within("/app/Http/ControllersEvil/User.php", BASE));
    }

    #[test]
    fn test_backslash_separators() {
        assert!(is_within("\\app\\Http\\Controllers\\Admin", BASE));
        assert!(!is_within("\\app\\Http\\Controllers\\..\\..\\x", BASE));
    }

    #[test]
    fn test_ensure_within_reports_label() {
        let err = ensure_within("/tmp/outside", BASE, PathLabel::UiFolder).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::PathEscapesBase {
                label: PathLabel::UiFolder
            }
        ));
        assert_eq!(err.to_string(), "UI folder resolves outside the allowed base path.");
    }
}
