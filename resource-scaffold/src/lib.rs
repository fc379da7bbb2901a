//! Core of the Laravel resource scaffolder
//!
//! Turns free-text answers (table name, controller name, folders) into a
//! consistent set of identifiers and output paths, and proves that every
//! output path stays inside the directory it belongs to before anything is
//! written.
//!
//! # Example
//!
//! ```rust
//! use resource_scaffold::names;
//! use resource_scaffold::path_guard::{self, PathLabel};
//!
//! let table = names::normalize_table_name("Blog Posts");
//! assert_eq!(table.as_str(), "blog_posts");
//! assert_eq!(names::default_model_name(&table), "BlogPost");
//!
//! let controller = names::normalize_controller_name("Admin/user");
//! assert_eq!(controller.class_name(), "UserController");
//!
//! assert!(path_guard::ensure_within(
//!     "/app/Http/Controllers/../../etc/passwd",
//!     "/app/Http/Controllers",
//!     PathLabel::ControllerFile,
//! )
//! .is_err());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod names;
pub mod observability;
pub mod options;
pub mod path_guard;
pub mod plan;
pub mod segments;
pub mod stubs;
pub mod vars;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use names::{ControllerName, NormalizedName};
pub use options::{GenerateOptions, Page, Stack};
pub use path_guard::PathLabel;
pub use plan::{GenerationPlan, PlannedFile, ProjectLayout, ScaffoldRequest};
pub use segments::SegmentPath;
pub use stubs::{StubLocator, StubRenderer};
pub use vars::{CaseVariants, TemplateVars};
