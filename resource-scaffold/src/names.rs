//! Name normalization for scaffold answers
//!
//! Turns free-text answers into identifiers that are safe to embed in
//! generated PHP and front-end sources and in output paths.
//!
//! Controller folders and UI folders are deliberately treated differently:
//! an illegal character in a controller folder is dropped, while the same
//! character in a UI folder is an error. UI folder segments end up verbatim
//! in generated import paths, so the folder that gets created and the path
//! baked into the pages must match exactly.

use std::fmt;

use inflector::Inflector;

use crate::error::{Result, ScaffoldError};
use crate::segments::SegmentPath;

/// Table name used when normalization strips every character
pub const FALLBACK_TABLE_NAME: &str = "items";

const CONTROLLER_SUFFIX: &str = "Controller";

/// A table identifier restricted to `[a-z0-9_]`, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Borrow the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized controller name: namespace segments plus class name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerName {
    namespace: SegmentPath,
    class_name: String,
}

impl ControllerName {
    /// Namespace segments typed before the class name (`Admin/User` → `Admin`)
    #[must_use]
    pub const fn namespace(&self) -> &SegmentPath {
        &self.namespace
    }

    /// The class name, always ending in `Controller`
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// StudlyCase a word list
///
/// Words are separated by `-`, `_` or whitespace. The first character of each
/// word is upper-cased and the rest is kept as typed, so acronyms survive.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::studly;
/// assert_eq!(studly("blog_post"), "BlogPost");
/// assert_eq!(studly("admin-area"), "AdminArea");
/// assert_eq!(studly("APIController"), "APIController");
/// ```
#[must_use]
pub fn studly(input: &str) -> String {
    input
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}

/// Normalize a table name
///
/// Lower-cases, turns spaces and hyphens into underscores and strips anything
/// outside `[a-z0-9_]`. Falls back to [`FALLBACK_TABLE_NAME`] when nothing is
/// left.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::normalize_table_name;
/// assert_eq!(normalize_table_name("Blog Posts").as_str(), "blog_posts");
/// assert_eq!(normalize_table_name("???").as_str(), "items");
/// ```
#[must_use]
pub fn normalize_table_name(raw: &str) -> NormalizedName {
    let cleaned: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    if cleaned.is_empty() {
        NormalizedName(FALLBACK_TABLE_NAME.to_string())
    } else {
        NormalizedName(cleaned)
    }
}

/// Default model name for a table: singular, StudlyCase
///
/// Only the last word of the table is singularized. Singularization is a
/// suffix heuristic (`s`, `es`, `ies` and friends) plus a short irregular
/// list, and can be wrong for other irregular plurals. That is acceptable
/// here because the user is always offered the chance to override the
/// default.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::{default_model_name, normalize_table_name};
/// assert_eq!(default_model_name(&normalize_table_name("users")), "User");
/// assert_eq!(default_model_name(&normalize_table_name("blog_posts")), "BlogPost");
/// assert_eq!(default_model_name(&normalize_table_name("order_statuses")), "OrderStatus");
/// assert_eq!(default_model_name(&normalize_table_name("sales_people")), "SalesPerson");
/// ```
#[must_use]
pub fn default_model_name(table: &NormalizedName) -> String {
    let mut words: Vec<&str> = table.as_str().split('_').filter(|w| !w.is_empty()).collect();
    let Some(last) = words.pop() else {
        return studly(table.as_str());
    };
    let last = singularize(last);
    words.push(&last);
    studly(&words.join("_"))
}

/// Irregular `(singular, plural)` pairs Inflector gets wrong
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("mouse", "mice"),
    ("criterion", "criteria"),
];

/// Words with no distinct plural
const UNCOUNTABLE: &[&str] = &["data", "media", "metadata", "equipment", "staff"];

/// Singularize one lower-case word
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::singularize;
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("people"), "person");
/// assert_eq!(singularize("data"), "data");
/// ```
#[must_use]
pub fn singularize(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(s, p)| *p == word || *s == word) {
        return (*singular).to_string();
    }
    word.to_singular()
}

/// Pluralize one lower-case word
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::pluralize;
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// assert_eq!(pluralize("people"), "people");
/// ```
#[must_use]
pub fn pluralize(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, p)| *s == word || *p == word) {
        return (*plural).to_string();
    }
    word.to_plural()
}

/// Model name typed by the user, StudlyCased; blank input keeps the default
#[must_use]
pub fn model_name_override(raw: &str, table: &NormalizedName) -> String {
    let model = studly(raw.trim());
    if model.is_empty() {
        default_model_name(table)
    } else {
        model
    }
}

/// Normalize a controller name
///
/// Appends `Controller` unless the input already ends with it (case
/// insensitive), then splits on `/` or `\`. The last segment is the class
/// name, the rest is the namespace.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::normalize_controller_name;
/// let name = normalize_controller_name("Admin/user");
/// assert_eq!(name.namespace().segments(), ["Admin"]);
/// assert_eq!(name.class_name(), "UserController");
/// ```
#[must_use]
pub fn normalize_controller_name(raw: &str) -> ControllerName {
    let mut controller = raw.trim().to_string();
    if !controller
        .to_lowercase()
        .ends_with(&CONTROLLER_SUFFIX.to_lowercase())
    {
        controller.push_str(CONTROLLER_SUFFIX);
    }

    let mut segments: Vec<String> = controller
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(studly)
        .filter(|segment| !segment.is_empty())
        .collect();

    // The suffix is always appended to the last segment, so there is one.
    let class_name = segments
        .pop()
        .unwrap_or_else(|| CONTROLLER_SUFFIX.to_string());

    tracing::debug!(raw, class_name = %class_name, namespace = ?segments, "normalized controller name");

    ControllerName {
        namespace: SegmentPath::from_validated(segments),
        class_name,
    }
}

/// Normalize the controller sub-folder
///
/// `.` and `..` segments are rejected. Characters outside `[A-Za-z0-9_-]` are
/// silently dropped, `-` becomes `_`, segments left empty are skipped and the
/// rest are StudlyCased. Blank input means no sub-folder.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidPath`] if any segment is `.` or `..`.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::normalize_folder_path;
/// assert_eq!(normalize_folder_path("admin//user-area").unwrap().as_slash_path(), "Admin/UserArea");
/// assert!(normalize_folder_path("../etc").is_err());
/// ```
pub fn normalize_folder_path(raw: &str) -> Result<SegmentPath> {
    let mut normalized = Vec::new();

    for segment in split_segments(raw) {
        if is_traversal(segment) {
            return Err(ScaffoldError::InvalidPath(
                "Controller folder cannot contain \".\" or \"..\" segments.".to_string(),
            ));
        }

        let clean: String = segment
            .chars()
            .filter(|c| is_folder_char(*c))
            .map(|c| if c == '-' { '_' } else { c })
            .collect();

        let clean = studly(&clean);
        if clean.is_empty() {
            continue;
        }

        normalized.push(clean);
    }

    Ok(SegmentPath::from_validated(normalized))
}

/// Normalize the UI (page or view) folder
///
/// Case is preserved. `.` and `..` segments are rejected and every segment
/// must consist of `[A-Za-z0-9_-]` only; nothing is stripped.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidPath`] for traversal segments or illegal
/// characters.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::normalize_ui_path;
/// assert_eq!(normalize_ui_path("/Admin//blog-posts/").unwrap().as_slash_path(), "Admin/blog-posts");
/// assert!(normalize_ui_path("bad name!").is_err());
/// ```
pub fn normalize_ui_path(raw: &str) -> Result<SegmentPath> {
    let mut normalized = Vec::new();

    for segment in split_segments(raw) {
        if is_traversal(segment) {
            return Err(ScaffoldError::InvalidPath(
                "UI folder cannot contain \".\" or \"..\" segments.".to_string(),
            ));
        }

        if !segment.chars().all(is_folder_char) {
            return Err(ScaffoldError::InvalidPath(
                "UI folder may only contain letters, numbers, \"_\", \"-\", and \"/\" separators."
                    .to_string(),
            ));
        }

        normalized.push(segment.to_string());
    }

    Ok(SegmentPath::from_validated(normalized))
}

/// Split on `/` or `\`, dropping empty pieces (which also collapses repeats
/// and trims leading and trailing separators)
fn split_segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.trim()
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
}

fn is_traversal(segment: &str) -> bool {
    segment == "." || segment == ".."
}

const fn is_folder_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
