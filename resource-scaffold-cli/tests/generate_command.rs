//! Integration tests for the generate command

use chrono::{NaiveDate, NaiveDateTime};
use resource_scaffold_cli_lib::{GenerateArgs, ScriptedPrompter, WriteStatus};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
}

fn statuses(report: &resource_scaffold_cli_lib::GenerateReport) -> Vec<WriteStatus> {
    report.outcomes.iter().map(|o| o.status).collect()
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("{relative} should exist: {e}"))
}

/// Test the blog posts scenario end to end with flags only
#[test]
fn test_generate_blog_posts_with_flags() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let args = GenerateArgs {
        table: Some("Blog Posts".to_string()),
        controller: Some("post".to_string()),
        controller_folder: Some(String::new()),
        ui_folder: Some(String::new()),
        pages: Some("Index,Show".to_string()),
        no_interaction: true,
        ..GenerateArgs::default()
    };

    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let report = args.run(root, &mut prompter, timestamp()).unwrap();

    assert_eq!(
        prompter.questions(),
        ["Do you want default model name for 'blog_posts'? (BlogPost)"]
    );
    assert_eq!(statuses(&report), vec![WriteStatus::Created; 5]);

    let migration = read(
        root,
        "database/migrations/2024_05_01_093000_create_blog_posts_table.php",
    );
    assert!(migration.contains("Schema::create('blog_posts'"));

    let model = read(root, "app/Models/BlogPost.php");
    assert!(model.contains("class BlogPost extends Model"));
    assert!(model.contains("namespace App\\Models;"));

    let controller = read(root, "app/Http/Controllers/PostController.php");
    assert!(controller.contains("namespace App\\Http\\Controllers;"));
    assert!(controller.contains("class PostController extends Controller"));

    let index = read(root, "resources/js/Pages/Index.vue");
    assert!(index.contains("<Head title=\"BlogPost\" />"));
    assert!(index.contains("route('blog-posts.create')"));
    assert!(index.contains("{{ record.name }}"));
    assert!(root.join("resources/js/Pages/Show.vue").exists());
    assert!(!root.join("resources/js/Pages/Create.vue").exists());
    assert!(!root.join("resources/js/Pages/Edit.vue").exists());

    assert_eq!(report.plan.vars().route_resource, "blog-posts");
}

/// Test the full interactive question sequence
#[test]
fn test_generate_interactive_answers() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let args = GenerateArgs {
        stack: Some("react".to_string()),
        ts: true,
        resource: true,
        pages: Some("index,create,edit,show".to_string()),
        ..GenerateArgs::default()
    };

    let mut prompter = ScriptedPrompter::new([
        "categories",
        "n",
        "product category",
        "",
        "admin/catalog",
        "",
    ]);
    let report = args.run(root, &mut prompter, timestamp()).unwrap();

    assert_eq!(
        prompter.questions(),
        [
            "Give me name for database table",
            "Do you want default model name for 'categories'? (Category)",
            "Give me model name",
            "Give me name of Controller",
            "Controller folder (optional). Example: Admin/Users (leave empty for none)",
            "Give me name for your inertia folder under resources/js/Pages",
        ]
    );

    let controller = read(
        root,
        "app/Http/Controllers/Admin/Catalog/ProductCategoryController.php",
    );
    assert!(controller.contains("namespace App\\Http\\Controllers\\Admin\\Catalog;"));
    assert!(controller.contains("use App\\Models\\ProductCategory;"));
    assert!(controller.contains("Inertia::render('Admin/Catalog/Edit'"));

    for page in ["Index", "Create", "Edit", "Show"] {
        assert!(
            root.join(format!("resources/js/Pages/Admin/Catalog/{page}.tsx"))
                .exists(),
            "{page}.tsx should exist"
        );
    }

    assert!(root.join("app/Models/ProductCategory.php").exists());
    assert_eq!(
        report.plan.route_line(),
        "Route::resource('product-categories', \\App\\Http\\Controllers\\Admin\\Catalog\\ProductCategoryController::class);"
    );
}

/// Test that a namespace typed into the controller name does not pick the folder
#[test]
fn test_controller_namespace_is_not_folder_default() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let args = GenerateArgs {
        table: Some("users".to_string()),
        controller: Some("Admin/user".to_string()),
        stack: Some("blade".to_string()),
        ts: true,
        pages: Some("Index".to_string()),
        no_interaction: true,
        ..GenerateArgs::default()
    };

    let report = args
        .run(root, &mut resource_scaffold_cli_lib::NonInteractive, timestamp())
        .unwrap();

    assert!(root.join("app/Http/Controllers/UserController.php").exists());
    assert!(!root.join("app/Http/Controllers/Admin").exists());
    assert!(root.join("resources/views/User/index.blade.php").exists());
    assert_eq!(report.plan.vars().blade_index_view, "User.index");
    assert_eq!(
        report.plan.vars().controller_namespace,
        "App\\Http\\Controllers"
    );

    let settings = report.plan.settings();
    assert!(settings.contains(&("TypeScript pages", "n/a".to_string())));
}

/// Test compound model names keep every word in the route slug
#[test]
fn test_compound_names_keep_leading_words() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let args = GenerateArgs {
        table: Some("sales_people".to_string()),
        no_interaction: true,
        ..GenerateArgs::default()
    };

    let report = args
        .run(root, &mut resource_scaffold_cli_lib::NonInteractive, timestamp())
        .unwrap();

    assert!(root.join("app/Models/SalesPerson.php").exists());
    assert!(root.join("app/Http/Controllers/SalesPersonController.php").exists());
    assert_eq!(report.plan.vars().route_resource, "sales-people");
    assert_eq!(
        report.plan.route_line(),
        "Route::resource('sales-people', \\App\\Http\\Controllers\\SalesPersonController::class);"
    );
}

/// Test dry runs write nothing
#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("app/Models")).unwrap();
    fs::write(root.join("app/Models/User.php"), "existing").unwrap();

    let args = GenerateArgs {
        table: Some("users".to_string()),
        dry_run: true,
        no_interaction: true,
        ..GenerateArgs::default()
    };

    let report = args
        .run(root, &mut resource_scaffold_cli_lib::NonInteractive, timestamp())
        .unwrap();

    assert_eq!(
        statuses(&report),
        vec![
            WriteStatus::WouldWrite,
            WriteStatus::Skipped,
            WriteStatus::WouldWrite,
            WriteStatus::WouldWrite,
            WriteStatus::WouldWrite,
        ]
    );
    assert!(!root.join("database").exists());
    assert!(!root.join("resources").exists());
    assert_eq!(read(root, "app/Models/User.php"), "existing");
}

/// Test overwrite confirmation and the model skip rule
#[test]
fn test_existing_files_are_confirmed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let args = GenerateArgs {
        table: Some("users".to_string()),
        model: Some("User".to_string()),
        controller: Some("User".to_string()),
        controller_folder: Some(String::new()),
        ui_folder: Some("Users".to_string()),
        ..GenerateArgs::default()
    };

    args.run(root, &mut ScriptedPrompter::new(Vec::<String>::new()), timestamp())
        .unwrap();

    fs::write(root.join("app/Http/Controllers/UserController.php"), "mine").unwrap();
    fs::write(root.join("resources/js/Pages/Users/Index.vue"), "mine").unwrap();

    let later = NaiveDate::from_ymd_opt(2024, 5, 2)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();
    let mut prompter = ScriptedPrompter::new(["y", "n", "n"]);
    let report = args.run(root, &mut prompter, later).unwrap();

    assert_eq!(
        prompter.questions(),
        [
            "File exists. Overwrite? app/Http/Controllers/UserController.php",
            "File exists. Overwrite? resources/js/Pages/Users/Index.vue",
            "File exists. Overwrite? resources/js/Pages/Users/Create.vue",
        ]
    );
    assert_eq!(
        statuses(&report),
        vec![
            WriteStatus::Created,
            WriteStatus::Skipped,
            WriteStatus::Overwritten,
            WriteStatus::Skipped,
            WriteStatus::Skipped,
        ]
    );
    assert_ne!(read(root, "app/Http/Controllers/UserController.php"), "mine");
    assert_eq!(read(root, "resources/js/Pages/Users/Index.vue"), "mine");
}

/// Test published stubs take precedence over bundled ones
#[test]
fn test_published_stub_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let legacy = root.join("stubs/inertia-page-generator");
    fs::create_dir_all(&legacy).unwrap();
    fs::write(legacy.join("model.stub"), "<?php // {{ model }} for {{ table }}\n").unwrap();

    let args = GenerateArgs {
        table: Some("posts".to_string()),
        no_interaction: true,
        ..GenerateArgs::default()
    };
    args.run(root, &mut resource_scaffold_cli_lib::NonInteractive, timestamp())
        .unwrap();

    assert_eq!(read(root, "app/Models/Post.php"), "<?php // Post for posts\n");
}

/// Test invalid options and folders abort before anything is written
#[test]
fn test_invalid_input_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let bad_stack = GenerateArgs {
        stack: Some("svelte".to_string()),
        no_interaction: true,
        ..GenerateArgs::default()
    };
    let err = bad_stack
        .run(root, &mut resource_scaffold_cli_lib::NonInteractive, timestamp())
        .unwrap_err();
    assert!(err.to_string().contains("Allowed stacks"));

    let bad_pages = GenerateArgs {
        pages: Some("Index,Delete".to_string()),
        no_interaction: true,
        ..GenerateArgs::default()
    };
    assert!(bad_pages
        .run(root, &mut resource_scaffold_cli_lib::NonInteractive, timestamp())
        .is_err());

    let traversal = GenerateArgs {
        ui_folder: Some("../../public".to_string()),
        no_interaction: true,
        ..GenerateArgs::default()
    };
    let err = traversal
        .run(root, &mut resource_scaffold_cli_lib::NonInteractive, timestamp())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "UI folder cannot contain \".\" or \"..\" segments."
    );

    assert!(fs::read_dir(root).unwrap().next().is_none());
}
