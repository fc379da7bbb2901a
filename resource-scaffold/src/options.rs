//! Closed option types: UI stack and pages
//!
//! Raw option strings are parsed once, at the command-line boundary. Past
//! that point a stack or page is always one of the known variants.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScaffoldError};
use crate::names::studly;

/// Target UI technology
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Stack {
    /// Inertia with Vue single-file components (default)
    #[default]
    InertiaVue,
    /// Inertia with React components
    InertiaReact,
    /// Server-rendered Blade views
    Blade,
}

impl Stack {
    /// Every stack, in the order they are listed to users
    pub const ALL: [Self; 3] = [Self::InertiaVue, Self::InertiaReact, Self::Blade];

    /// Canonical option value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InertiaVue => "inertia-vue",
            Self::InertiaReact => "inertia-react",
            Self::Blade => "blade",
        }
    }

    /// Whether `--ts` has any effect for this stack
    #[must_use]
    pub const fn supports_typescript(self) -> bool {
        !matches!(self, Self::Blade)
    }

    /// Whether this is one of the Inertia stacks
    #[must_use]
    pub const fn is_inertia(self) -> bool {
        matches!(self, Self::InertiaVue | Self::InertiaReact)
    }

    /// Controller stub name for this stack
    #[must_use]
    pub const fn controller_stub(self, resource: bool) -> &'static str {
        match (self, resource) {
            (Self::Blade, true) => "controller.blade.resource.stub",
            (Self::Blade, false) => "controller.blade.stub",
            (_, true) => "controller.inertia.resource.stub",
            (_, false) => "controller.inertia.stub",
        }
    }

    /// Page stub name for this stack
    #[must_use]
    pub fn page_stub(self, page: Page, typescript: bool) -> String {
        let page = page.lower();
        match (self, typescript) {
            (Self::Blade, _) => format!("blade.{page}.stub"),
            (Self::InertiaReact, true) => format!("inertia.{page}.react.tsx.stub"),
            (Self::InertiaReact, false) => format!("inertia.{page}.react.jsx.stub"),
            (Self::InertiaVue, true) => format!("inertia.{page}.vue.ts.stub"),
            (Self::InertiaVue, false) => format!("inertia.{page}.vue.stub"),
        }
    }

    /// File name of a generated page
    #[must_use]
    pub fn page_file_name(self, page: Page, typescript: bool) -> String {
        match (self, typescript) {
            (Self::Blade, _) => format!("{}.blade.php", page.lower()),
            (Self::InertiaReact, true) => format!("{page}.tsx"),
            (Self::InertiaReact, false) => format!("{page}.jsx"),
            (Self::InertiaVue, _) => format!("{page}.vue"),
        }
    }

    /// Label shown in progress lines and the summary table
    #[must_use]
    pub fn page_type_label(self, page: Page) -> String {
        match self {
            Self::Blade => format!("Blade {page}"),
            Self::InertiaReact => format!("Inertia React {page}"),
            Self::InertiaVue => format!("Inertia Vue {page}"),
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = ScaffoldError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "inertia-vue" | "vue" | "inertia" => Ok(Self::InertiaVue),
            "inertia-react" | "react" => Ok(Self::InertiaReact),
            "blade" => Ok(Self::Blade),
            _ => Err(ScaffoldError::InvalidOption(format!(
                "Invalid stack \"{raw}\". Allowed stacks: {}.",
                Self::ALL.map(Self::as_str).join(", ")
            ))),
        }
    }
}

/// A UI page that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Listing page
    Index,
    /// Creation form
    Create,
    /// Edit form
    Edit,
    /// Detail page
    Show,
}

impl Page {
    /// Every page, in canonical order
    pub const ALL: [Self; 4] = [Self::Index, Self::Create, Self::Edit, Self::Show];

    /// Pages generated when `--pages` is not given
    pub const DEFAULT: [Self; 2] = [Self::Index, Self::Create];

    /// StudlyCase name, e.g. `Index`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::Create => "Create",
            Self::Edit => "Edit",
            Self::Show => "Show",
        }
    }

    /// Lower-case name, e.g. `index`
    #[must_use]
    pub const fn lower(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = ScaffoldError;

    fn from_str(raw: &str) -> Result<Self> {
        let name = studly(raw.trim());
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == name)
            .ok_or_else(|| {
                ScaffoldError::InvalidOption(format!(
                    "Invalid page \"{}\". Allowed pages: {}.",
                    raw.trim(),
                    Self::ALL.map(Self::as_str).join(", ")
                ))
            })
    }
}

/// Parse a comma-separated `--pages` value
///
/// Blank input selects [`Page::DEFAULT`]. Entries are StudlyCased before
/// matching, blank entries are skipped and duplicates keep their first
/// position.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidOption`] for an unknown page, or when the
/// value contains nothing but separators.
///
/// # Examples
///
/// ```
/// # use resource_scaffold::options::{parse_pages, Page};
/// assert_eq!(parse_pages("index, show,Index").unwrap(), vec![Page::Index, Page::Show]);
/// assert_eq!(parse_pages("").unwrap(), vec![Page::Index, Page::Create]);
/// assert!(parse_pages("Delete").is_err());
/// ```
pub fn parse_pages(raw: &str) -> Result<Vec<Page>> {
    if raw.trim().is_empty() {
        return Ok(Page::DEFAULT.to_vec());
    }

    let mut pages = Vec::new();
    for entry in raw.split(',') {
        if studly(entry.trim()).is_empty() {
            continue;
        }

        let page: Page = entry.parse()?;
        if !pages.contains(&page) {
            pages.push(page);
        }
    }

    if pages.is_empty() {
        return Err(ScaffoldError::InvalidOption(
            "No valid pages were provided for --pages.".to_string(),
        ));
    }

    Ok(pages)
}

/// Flags and enumerated options of one `generate` run
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Target UI stack
    pub stack: Stack,
    /// Pages to generate, in order
    pub pages: Vec<Page>,
    /// Generate TypeScript pages (Inertia stacks only)
    pub typescript: bool,
    /// Generate a full resource controller
    pub resource: bool,
    /// Overwrite existing files without asking
    pub force: bool,
    /// Report what would be written without writing
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Drop `typescript` for stacks that have no TypeScript pages
    ///
    /// Returns `true` if the flag was set and had to be ignored.
    pub fn reconcile_typescript(&mut self) -> bool {
        if self.typescript && !self.stack.supports_typescript() {
            tracing::warn!(stack = %self.stack, "ignoring --ts");
            self.typescript = false;
            return true;
        }
        false
    }

    /// Whether every page a resource controller links to is generated
    #[must_use]
    pub fn covers_resource_pages(&self) -> bool {
        self.pages.contains(&Page::Edit) && self.pages.contains(&Page::Show)
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            stack: Stack::default(),
            pages: Page::DEFAULT.to_vec(),
            typescript: false,
            resource: false,
            force: false,
            dry_run: false,
        }
    }
}
