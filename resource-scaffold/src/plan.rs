//! Generation plan
//!
//! A plan is the complete list of files one `generate` run would produce,
//! with every output path already proven to stay inside its base directory.
//! Building a plan never touches the filesystem.

use chrono::NaiveDateTime;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::names::{ControllerName, NormalizedName};
use crate::options::{GenerateOptions, Page, Stack};
use crate::path_guard::{ensure_within, PathLabel};
use crate::segments::SegmentPath;
use crate::vars::{controller_namespace, TemplateVars};

/// Format of the migration file name prefix
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Absolute output directories of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root
    pub root: PathBuf,
    /// Controller base directory
    pub controllers: PathBuf,
    /// Model directory
    pub models: PathBuf,
    /// Migration directory
    pub migrations: PathBuf,
    /// Inertia page base directory
    pub pages: PathBuf,
    /// Blade view base directory
    pub views: PathBuf,
    /// Base controller namespace
    pub controller_namespace: String,
    /// Model namespace
    pub model_namespace: String,
}

impl ProjectLayout {
    /// Resolve the configured directories against `root`
    #[must_use]
    pub fn new(root: &Path, config: &ScaffoldConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            controllers: root.join(&config.paths.controllers),
            models: root.join(&config.paths.models),
            migrations: root.join(&config.paths.migrations),
            pages: root.join(&config.paths.pages),
            views: root.join(&config.paths.views),
            controller_namespace: config.namespaces.controllers.clone(),
            model_namespace: config.namespaces.models.clone(),
        }
    }

    /// Base directory for the pages of `stack`
    #[must_use]
    pub fn ui_base(&self, stack: Stack) -> &Path {
        if stack.is_inertia() {
            &self.pages
        } else {
            &self.views
        }
    }

    /// `path` relative to the project root, for display
    #[must_use]
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Resolved answers of one `generate` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Table name
    pub table: NormalizedName,
    /// Model class name
    pub model: String,
    /// Controller class name
    pub controller: ControllerName,
    /// Controller sub-folder
    pub controller_folder: SegmentPath,
    /// Page or view sub-folder
    pub ui_folder: SegmentPath,
    /// Flags and enumerated options
    pub options: GenerateOptions,
}

/// What a planned file is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Create-table migration
    Migration,
    /// Model class
    Model,
    /// Controller class
    Controller,
    /// UI page or view
    Page(Stack, Page),
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Migration => f.write_str("Migration"),
            Self::Model => f.write_str("Model"),
            Self::Controller => f.write_str("Controller"),
            Self::Page(stack, page) => f.write_str(&stack.page_type_label(*page)),
        }
    }
}

/// One file of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// What the file is
    pub kind: FileKind,
    /// Absolute output path, already validated
    pub path: PathBuf,
    /// Logical stub name
    pub stub: String,
    /// Leave an existing file alone unless forced, without asking
    pub skip_if_exists: bool,
}

/// Every file of one run plus the values substituted into them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    files: Vec<PlannedFile>,
    vars: TemplateVars,
    settings: Vec<(&'static str, String)>,
}

impl GenerationPlan {
    /// Compute and validate every output path of `request`
    ///
    /// Files are ordered migration, model, controller, then pages in request
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScaffoldError::PathEscapesBase`] if any computed
    /// path leaves its base directory.
    pub fn build(
        request: &ScaffoldRequest,
        layout: &ProjectLayout,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        let options = &request.options;
        let stack = options.stack;
        let table = request.table.as_str();

        let migration = layout.migrations.join(format!(
            "{}_create_{table}_table.php",
            timestamp.format(MIGRATION_TIMESTAMP_FORMAT)
        ));
        ensure_within(&migration, &layout.migrations, PathLabel::MigrationFile)?;

        let model = layout.models.join(format!("{}.php", request.model));
        ensure_within(&model, &layout.models, PathLabel::ModelFile)?;

        let controller_dir = request.controller_folder.join_onto(&layout.controllers);
        ensure_within(&controller_dir, &layout.controllers, PathLabel::ControllerFolder)?;
        let controller = controller_dir.join(format!("{}.php", request.controller.class_name()));
        ensure_within(&controller, &layout.controllers, PathLabel::ControllerFile)?;

        let ui_base = layout.ui_base(stack);
        let ui_dir = request.ui_folder.join_onto(ui_base);
        ensure_within(&ui_dir, ui_base, PathLabel::UiFolder)?;

        let mut files = vec![
            PlannedFile {
                kind: FileKind::Migration,
                path: migration,
                stub: "migration.create_table.stub".to_string(),
                skip_if_exists: false,
            },
            PlannedFile {
                kind: FileKind::Model,
                path: model,
                stub: "model.stub".to_string(),
                skip_if_exists: true,
            },
            PlannedFile {
                kind: FileKind::Controller,
                path: controller,
                stub: stack.controller_stub(options.resource).to_string(),
                skip_if_exists: false,
            },
        ];

        for &page in &options.pages {
            let path = ui_dir.join(stack.page_file_name(page, options.typescript));
            ensure_within(&path, &ui_dir, PathLabel::UiPage)?;
            files.push(PlannedFile {
                kind: FileKind::Page(stack, page),
                path,
                stub: stack.page_stub(page, options.typescript),
                skip_if_exists: false,
            });
        }

        let controller_ns =
            controller_namespace(&layout.controller_namespace, &request.controller_folder);
        let vars = TemplateVars::new(
            &request.table,
            &request.model,
            &layout.model_namespace,
            &request.controller,
            &controller_ns,
            &request.ui_folder,
        );

        tracing::debug!(
            files = files.len(),
            stack = %stack,
            controller = %controller_ns,
            "generation plan built"
        );

        Ok(Self {
            settings: settings(request, &controller_ns),
            files,
            vars,
        })
    }

    /// Planned files, in write order
    #[must_use]
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Values substituted into every stub
    #[must_use]
    pub const fn vars(&self) -> &TemplateVars {
        &self.vars
    }

    /// Label/value rows describing the run
    #[must_use]
    pub fn settings(&self) -> &[(&'static str, String)] {
        &self.settings
    }

    /// Route registration line for `routes/web.php`
    ///
    /// # Examples
    ///
    /// ```
    /// # use resource_scaffold::names::{normalize_controller_name, normalize_table_name};
    /// # use resource_scaffold::{GenerateOptions, GenerationPlan, ProjectLayout, ScaffoldConfig, ScaffoldRequest, SegmentPath};
    /// # use std::path::Path;
    /// let request = ScaffoldRequest {
    ///     table: normalize_table_name("posts"),
    ///     model: "Post".to_string(),
    ///     controller: normalize_controller_name("post"),
    ///     controller_folder: SegmentPath::empty(),
    ///     ui_folder: SegmentPath::empty(),
    ///     options: GenerateOptions::default(),
    /// };
    /// let layout = ProjectLayout::new(Path::new("/srv/app"), &ScaffoldConfig::default());
    /// let timestamp = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
    ///     .and_then(|d| d.and_hms_opt(3, 4, 5))
    ///     .unwrap();
    /// let plan = GenerationPlan::build(&request, &layout, timestamp).unwrap();
    /// assert_eq!(
    ///     plan.route_line(),
    ///     "Route::resource('posts', \\App\\Http\\Controllers\\PostController::class);"
    /// );
    /// ```
    #[must_use]
    pub fn route_line(&self) -> String {
        format!(
            "Route::resource('{}', \\{}\\{}::class);",
            self.vars.route_resource, self.vars.controller_namespace, self.vars.controller_class
        )
    }
}

fn settings(request: &ScaffoldRequest, controller_ns: &str) -> Vec<(&'static str, String)> {
    let options = &request.options;
    let yes_no = |flag: bool| if flag { "yes" } else { "no" }.to_string();

    vec![
        ("Table", request.table.to_string()),
        ("Model", request.model.clone()),
        (
            "Controller",
            format!("{controller_ns}\\{}", request.controller.class_name()),
        ),
        ("Stack", options.stack.to_string()),
        (
            "Controller methods",
            if options.resource {
                "resource"
            } else {
                "basic (index/create/store)"
            }
            .to_string(),
        ),
        (
            "Pages",
            options
                .pages
                .iter()
                .map(|page| page.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        (
            "TypeScript pages",
            if options.stack.supports_typescript() {
                yes_no(options.typescript)
            } else {
                "n/a".to_string()
            },
        ),
        ("Dry run", yes_no(options.dry_run)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::names::{
        default_model_name, normalize_controller_name, normalize_folder_path,
        normalize_table_name, normalize_ui_path,
    };
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .unwrap()
    }

    fn layout() -> ProjectLayout {
        ProjectLayout::new(Path::new("/srv/app"), &ScaffoldConfig::default())
    }

    fn request(table: &str, controller: &str, options: GenerateOptions) -> ScaffoldRequest {
        let table = normalize_table_name(table);
        ScaffoldRequest {
            model: default_model_name(&table),
            table,
            controller: normalize_controller_name(controller),
            controller_folder: SegmentPath::empty(),
            ui_folder: SegmentPath::empty(),
            options,
        }
    }

    #[test]
    fn test_blog_posts_scenario() {
        let options = GenerateOptions {
            pages: vec![Page::Index, Page::Show],
            ..GenerateOptions::default()
        };
        let plan = GenerationPlan::build(&request("Blog Posts", "post", options), &layout(), timestamp())
            .unwrap();

        let paths: Vec<_> = plan.files().iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/srv/app/database/migrations/2024_03_09_140507_create_blog_posts_table.php"),
                PathBuf::from("/srv/app/app/Models/BlogPost.php"),
                PathBuf::from("/srv/app/app/Http/Controllers/PostController.php"),
                PathBuf::from("/srv/app/resources/js/Pages/Index.vue"),
                PathBuf::from("/srv/app/resources/js/Pages/Show.vue"),
            ]
        );

        let vars = plan.vars();
        assert_eq!(vars.table, "blog_posts");
        assert_eq!(vars.model, "BlogPost");
        assert_eq!(vars.controller_class, "PostController");
        assert_eq!(vars.route_resource, "blog-posts");
        assert_eq!(vars.inertia_index_component, "Index");
        assert_eq!(vars.inertia_show_component, "Show");

        assert!(!plan
            .files()
            .iter()
            .any(|f| matches!(f.kind, FileKind::Page(_, Page::Create | Page::Edit))));
    }

    #[test]
    fn test_only_model_is_skip_if_exists() {
        let plan = GenerationPlan::build(
            &request("users", "user", GenerateOptions::default()),
            &layout(),
            timestamp(),
        )
        .unwrap();

        let skipped: Vec<_> = plan
            .files()
            .iter()
            .filter(|f| f.skip_if_exists)
            .map(|f| f.kind)
            .collect();
        assert_eq!(skipped, vec![FileKind::Model]);
    }

    #[test]
    fn test_folders_and_namespace() {
        let mut req = request("users", "user", GenerateOptions {
            stack: Stack::InertiaReact,
            typescript: true,
            resource: true,
            pages: vec![Page::Edit],
            ..GenerateOptions::default()
        });
        req.controller_folder = normalize_folder_path("admin/users").unwrap();
        req.ui_folder = normalize_ui_path("Admin/users").unwrap();

        let plan = GenerationPlan::build(&req, &layout(), timestamp()).unwrap();
        let files = plan.files();

        assert_eq!(
            files[2].path,
            PathBuf::from("/srv/app/app/Http/Controllers/Admin/Users/UserController.php")
        );
        assert_eq!(files[2].stub, "controller.inertia.resource.stub");
        assert_eq!(
            files[3].path,
            PathBuf::from("/srv/app/resources/js/Pages/Admin/users/Edit.tsx")
        );
        assert_eq!(files[3].stub, "inertia.edit.react.tsx.stub");
        assert_eq!(files[3].kind.to_string(), "Inertia React Edit");

        assert_eq!(
            plan.vars().controller_namespace,
            "App\\Http\\Controllers\\Admin\\Users"
        );
        assert_eq!(plan.vars().inertia_edit_component, "Admin/users/Edit");
        assert_eq!(
            plan.route_line(),
            "Route::resource('users', \\App\\Http\\Controllers\\Admin\\Users\\UserController::class);"
        );
    }

    #[test]
    fn test_blade_pages_go_under_views() {
        let mut req = request("posts", "post", GenerateOptions {
            stack: Stack::Blade,
            pages: vec![Page::Index, Page::Create],
            ..GenerateOptions::default()
        });
        req.ui_folder = normalize_ui_path("posts").unwrap();

        let plan = GenerationPlan::build(&req, &layout(), timestamp()).unwrap();
        let pages: Vec<_> = plan.files()[3..].iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            pages,
            vec![
                PathBuf::from("/srv/app/resources/views/posts/index.blade.php"),
                PathBuf::from("/srv/app/resources/views/posts/create.blade.php"),
            ]
        );
        assert_eq!(plan.files()[2].stub, "controller.blade.stub");
        assert_eq!(plan.vars().blade_create_view, "posts.create");
    }

    #[test]
    fn test_model_escaping_base_is_rejected() {
        let mut req = request("users", "user", GenerateOptions::default());
        req.model = "../../../etc/Passwd".to_string();

        let err = GenerationPlan::build(&req, &layout(), timestamp()).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::PathEscapesBase {
                label: PathLabel::ModelFile
            }
        ));
    }

    #[test]
    fn test_settings_rows() {
        let plan = GenerationPlan::build(
            &request("users", "user", GenerateOptions {
                stack: Stack::Blade,
                dry_run: true,
                ..GenerateOptions::default()
            }),
            &layout(),
            timestamp(),
        )
        .unwrap();

        let settings: Vec<(&str, &str)> = plan
            .settings()
            .iter()
            .map(|(label, value)| (*label, value.as_str()))
            .collect();
        assert_eq!(
            settings,
            vec![
                ("Table", "users"),
                ("Model", "User"),
                ("Controller", "App\\Http\\Controllers\\UserController"),
                ("Stack", "blade"),
                ("Controller methods", "basic (index/create/store)"),
                ("Pages", "Index, Create"),
                ("TypeScript pages", "n/a"),
                ("Dry run", "yes"),
            ]
        );
    }

    #[test]
    fn test_relative_display_path() {
        let layout = layout();
        assert_eq!(
            layout.relative(Path::new("/srv/app/app/Models/User.php")),
            Path::new("app/Models/User.php")
        );
        assert_eq!(layout.relative(Path::new("/elsewhere")), Path::new("/elsewhere"));
    }
}
