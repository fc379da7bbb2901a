//! Naming variants and the template variable bundle
//!
//! Everything here is a pure function of already-normalized names: deriving
//! the same bundle twice yields the same values.

use inflector::Inflector;
use serde::Serialize;

use crate::names::{pluralize, ControllerName, NormalizedName};
use crate::options::Page;
use crate::segments::SegmentPath;

/// Naming variants of one StudlyCase base name
///
/// The base may contain `/`-separated segments (`Admin/BlogPost`); each
/// variant is computed per segment where that matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariants {
    /// Type and class identifiers, e.g. `BlogPost`
    pub studly: String,
    /// Variable identifiers, e.g. `blogPost`
    pub camel: String,
    /// Database identifiers, e.g. `blog_post`
    pub snake: String,
    /// Plural route segment, e.g. `blog-posts`
    pub kebab_plural: String,
    /// View namespace, e.g. `admin.blog_post`
    pub dotted_path: String,
    /// Component namespace, e.g. `Admin/BlogPost`
    pub slash_path: String,
}

impl CaseVariants {
    /// Derive every variant from a StudlyCase base
    ///
    /// # Examples
    ///
    /// ```
    /// # use resource_scaffold::vars::CaseVariants;
    /// let v = CaseVariants::derive("BlogPost");
    /// assert_eq!(v.camel, "blogPost");
    /// assert_eq!(v.snake, "blog_post");
    /// assert_eq!(v.kebab_plural, "blog-posts");
    /// assert_eq!(v.dotted_path, "blog_post");
    /// assert_eq!(v.slash_path, "BlogPost");
    ///
    /// let v = CaseVariants::derive("SalesPerson");
    /// assert_eq!(v.kebab_plural, "sales-people");
    /// ```
    #[must_use]
    pub fn derive(studly: &str) -> Self {
        let segments: Vec<&str> = studly.split('/').filter(|s| !s.is_empty()).collect();
        let leaf = segments.last().copied().unwrap_or_default();
        let snake = leaf.to_snake_case();

        Self {
            studly: leaf.to_string(),
            camel: lcfirst(leaf),
            kebab_plural: kebab_plural(&snake),
            snake,
            dotted_path: segments
                .iter()
                .map(|segment| segment.to_snake_case())
                .collect::<Vec<_>>()
                .join("."),
            slash_path: segments.join("/"),
        }
    }
}

/// Lower-case the first character only, so acronyms stay as typed
fn lcfirst(studly: &str) -> String {
    let mut chars = studly.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Kebab-case a snake name with only its last word pluralized
fn kebab_plural(snake: &str) -> String {
    let mut words: Vec<String> = snake
        .split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    if let Some(last) = words.last_mut() {
        *last = pluralize(last);
    }
    words.join("-")
}

/// Values substituted into stubs
///
/// Serialized field names are the placeholder keys used by the stubs
/// (`{{ modelVariable }}`, `{{ routeResource }}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVars {
    /// Table name
    pub table: String,
    /// Model class name
    pub model: String,
    /// Model namespace
    pub model_namespace: String,
    /// Model variable name
    pub model_variable: String,
    /// Fully-qualified controller namespace
    pub controller_namespace: String,
    /// Controller class name
    pub controller_class: String,
    /// Inertia component for the index page
    pub inertia_index_component: String,
    /// Inertia component for the create page
    pub inertia_create_component: String,
    /// Inertia component for the edit page
    pub inertia_edit_component: String,
    /// Inertia component for the show page
    pub inertia_show_component: String,
    /// Blade view for the index page
    pub blade_index_view: String,
    /// Blade view for the create page
    pub blade_create_view: String,
    /// Blade view for the edit page
    pub blade_edit_view: String,
    /// Blade view for the show page
    pub blade_show_view: String,
    /// `Route::resource` slug
    pub route_resource: String,
}

impl TemplateVars {
    /// Build the bundle from normalized names
    ///
    /// All four component and view names are always filled in, whichever
    /// pages are generated, so any stub can link to any page.
    #[must_use]
    pub fn new(
        table: &NormalizedName,
        model: &str,
        model_namespace: &str,
        controller: &ControllerName,
        controller_namespace: &str,
        ui_folder: &SegmentPath,
    ) -> Self {
        let model = CaseVariants::derive(model);

        Self {
            table: table.to_string(),
            model: model.studly,
            model_namespace: model_namespace.to_string(),
            model_variable: model.camel,
            controller_namespace: controller_namespace.to_string(),
            controller_class: controller.class_name().to_string(),
            inertia_index_component: component_name(ui_folder, Page::Index),
            inertia_create_component: component_name(ui_folder, Page::Create),
            inertia_edit_component: component_name(ui_folder, Page::Edit),
            inertia_show_component: component_name(ui_folder, Page::Show),
            blade_index_view: view_name(ui_folder, Page::Index),
            blade_create_view: view_name(ui_folder, Page::Create),
            blade_edit_view: view_name(ui_folder, Page::Edit),
            blade_show_view: view_name(ui_folder, Page::Show),
            route_resource: model.kebab_plural,
        }
    }
}

/// Inertia component name: `<ui/folder>/<Page>`
#[must_use]
pub fn component_name(ui_folder: &SegmentPath, page: Page) -> String {
    if ui_folder.is_empty() {
        page.to_string()
    } else {
        format!("{}/{page}", ui_folder.as_slash_path())
    }
}

/// Blade view name: `<ui.folder>.<page>`
#[must_use]
pub fn view_name(ui_folder: &SegmentPath, page: Page) -> String {
    if ui_folder.is_empty() {
        page.lower().to_string()
    } else {
        format!("{}.{}", ui_folder.as_dotted_path(), page.lower())
    }
}

/// Controller namespace: base namespace plus folder segments
///
/// # Examples
///
/// ```
/// # use resource_scaffold::names::normalize_folder_path;
/// # use resource_scaffold::vars::controller_namespace;
/// let folder = normalize_folder_path("admin/users").unwrap();
/// assert_eq!(
///     controller_namespace("App\\Http\\Controllers", &folder),
///     "App\\Http\\Controllers\\Admin\\Users"
/// );
/// ```
#[must_use]
pub fn controller_namespace(base: &str, folder: &SegmentPath) -> String {
    let base = base.trim_end_matches('\\');
    if folder.is_empty() {
        base.to_string()
    } else {
        format!("{base}\\{}", folder.as_namespace())
    }
}
