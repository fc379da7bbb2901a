//! Ordered path segment sequences
//!
//! Folder answers are kept as a list of validated segments and only joined
//! into a concrete string where one is required: a namespace, an import
//! path, a view name or a filesystem path.

use std::fmt;
use std::path::{Path, PathBuf};

/// An ordered, immutable sequence of validated path segments
///
/// Instances are produced by [`crate::names`] only; an empty path means "no
/// sub-folder".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SegmentPath {
    segments: Vec<String>,
}

impl SegmentPath {
    pub(crate) const fn from_validated(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The empty path
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Whether the path has no segments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments, in order
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, if any
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Slash-joined form, e.g. `Admin/Users`
    #[must_use]
    pub fn as_slash_path(&self) -> String {
        self.segments.join("/")
    }

    /// Dot-joined form, e.g. `Admin.Users`
    #[must_use]
    pub fn as_dotted_path(&self) -> String {
        self.segments.join(".")
    }

    /// Backslash-joined PHP namespace form, e.g. `Admin\Users`
    #[must_use]
    pub fn as_namespace(&self) -> String {
        self.segments.join("\\")
    }

    /// Append every segment to `base`
    ///
    /// # Examples
    ///
    /// ```
    /// # use resource_scaffold::names::normalize_folder_path;
    /// # use std::path::{Path, PathBuf};
    /// let folder = normalize_folder_path("admin/users").unwrap();
    /// assert_eq!(
    ///     folder.join_onto(Path::new("/app/Http/Controllers")),
    ///     PathBuf::from("/app/Http/Controllers/Admin/Users"),
    /// );
    /// ```
    #[must_use]
    pub fn join_onto(&self, base: &Path) -> PathBuf {
        self.segments
            .iter()
            .fold(base.to_path_buf(), |path, segment| path.join(segment))
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_slash_path())
    }
}
