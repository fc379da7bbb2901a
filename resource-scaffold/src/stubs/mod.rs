//! Stub lookup and rendering
//!
//! A stub is resolved from the first published directory that holds a file
//! with its name, falling back to the copy bundled with the scaffolder.
//! Rendering is literal placeholder substitution: no conditionals, no loops.

pub mod bundled;

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

pub use bundled::{bundled, BUNDLED_STUBS};

/// Where a resolved stub comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// A file in one of the published stub directories
    Published {
        /// The stub file
        path: PathBuf,
        /// Position of its directory in the precedence list
        dir_index: usize,
    },
    /// The default shipped with the scaffolder
    Bundled(&'static str),
}

/// A stub name together with the source that won the lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStub {
    /// Logical stub name, e.g. `model.stub`
    pub name: String,
    /// Winning source
    pub source: StubSource,
}

impl ResolvedStub {
    /// Read the stub text
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::StubNotFound`] if a published stub has
    /// disappeared since it was resolved, or [`ScaffoldError::Io`] if it
    /// cannot be read.
    pub fn load(&self) -> Result<Cow<'static, str>> {
        match &self.source {
            StubSource::Bundled(content) => Ok(Cow::Borrowed(content)),
            StubSource::Published { path, .. } => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| match source.kind() {
                    std::io::ErrorKind::NotFound => ScaffoldError::StubNotFound {
                        name: self.name.clone(),
                        path: Some(path.clone()),
                    },
                    _ => ScaffoldError::Io {
                        path: path.clone(),
                        source,
                    },
                }),
        }
    }
}

impl fmt::Display for ResolvedStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            StubSource::Published { path, .. } => write!(f, "{}", path.display()),
            StubSource::Bundled(_) => write!(f, "bundled:{}", self.name),
        }
    }
}

/// Resolves stub names against the published directories of a project
#[derive(Debug, Clone)]
pub struct StubLocator {
    directories: Vec<PathBuf>,
}

impl StubLocator {
    /// Create a locator
    ///
    /// Relative directories are taken relative to `project_root`; the order
    /// of `directories` is the lookup precedence.
    #[must_use]
    pub fn new(project_root: &Path, directories: &[PathBuf]) -> Self {
        Self {
            directories: directories
                .iter()
                .map(|dir| project_root.join(dir))
                .collect(),
        }
    }

    /// Published directories in precedence order
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Resolve a stub: first existing published file, else the bundled copy
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::StubNotFound`] if no published file exists
    /// and no stub of that name is bundled.
    pub fn resolve(&self, name: &str) -> Result<ResolvedStub> {
        for (dir_index, dir) in self.directories.iter().enumerate() {
            let path = dir.join(name);
            if path.is_file() {
                tracing::debug!(stub = name, path = %path.display(), "resolved published stub");
                return Ok(ResolvedStub {
                    name: name.to_string(),
                    source: StubSource::Published { path, dir_index },
                });
            }
        }

        bundled(name)
            .map(|content| {
                tracing::debug!(stub = name, "resolved bundled stub");
                ResolvedStub {
                    name: name.to_string(),
                    source: StubSource::Bundled(content),
                }
            })
            .ok_or_else(|| ScaffoldError::StubNotFound {
                name: name.to_string(),
                path: None,
            })
    }
}

/// Literal `{{ key }}` substitution over a serialized variable bundle
pub struct StubRenderer;

impl StubRenderer {
    /// Render a resolved stub
    ///
    /// # Errors
    ///
    /// Returns an error if a published stub cannot be loaded; see
    /// [`ResolvedStub::load`].
    pub fn render(stub: &ResolvedStub, vars: &impl Serialize) -> Result<String> {
        let content = stub.load()?;
        Ok(Self::render_str(&content, vars))
    }

    /// Replace `{{ key }}` and `{{key}}` for every top-level key of `vars`
    ///
    /// Other double-brace expressions are kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// # use resource_scaffold::stubs::StubRenderer;
    /// let vars = serde_json::json!({ "model": "Post" });
    /// let out = StubRenderer::render_str("{{ model }} / {{model}} / {{ post.title }}", &vars);
    /// assert_eq!(out, "Post / Post / {{ post.title }}");
    /// ```
    #[must_use]
    pub fn render_str(template: &str, vars: &impl Serialize) -> String {
        let Ok(serde_json::Value::Object(map)) = serde_json::to_value(vars) else {
            return template.to_string();
        };

        map.iter().fold(template.to_string(), |content, (key, value)| {
            let replacement = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            content
                .replace(&format!("{{{{ {key} }}}}"), &replacement)
                .replace(&format!("{{{{{key}}}}}"), &replacement)
        })
    }
}
