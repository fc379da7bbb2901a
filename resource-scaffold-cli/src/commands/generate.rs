//! `generate`: scaffold a migration, model, controller and UI pages
//!
//! # Example
//!
//! ```bash
//! resource-scaffold generate --table "Blog Posts" --controller post \
//!   --stack inertia-vue --pages Index,Show --no-interaction
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use console::{style, Emoji};
use resource_scaffold::names::{
    default_model_name, model_name_override, normalize_controller_name, normalize_folder_path,
    normalize_table_name, normalize_ui_path,
};
use resource_scaffold::options::parse_pages;
use resource_scaffold::{
    GenerateOptions, GenerationPlan, ProjectLayout, ScaffoldConfig, ScaffoldRequest, Stack,
    StubLocator,
};
use std::path::Path;

use crate::prompt::{NonInteractive, Prompter, TerminalPrompter};
use crate::writer::{print_summary, print_table, WriteOutcome, Writer};

static WARN: Emoji<'_, '_> = Emoji("⚠ ", "! ");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");

/// Options of the `generate` command
#[derive(Debug, Clone, Default, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateArgs {
    /// Overwrite existing files without asking
    #[arg(long)]
    pub force: bool,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generate TypeScript pages (Inertia stacks only)
    #[arg(long)]
    pub ts: bool,

    /// Generate a full resource controller (index, create, store, show, edit, update, destroy)
    #[arg(long)]
    pub resource: bool,

    /// Comma-separated pages: Index, Create, Edit, Show
    #[arg(long, value_name = "LIST")]
    pub pages: Option<String>,

    /// UI stack: inertia-vue (vue, inertia), inertia-react (react) or blade
    #[arg(long)]
    pub stack: Option<String>,

    /// Accept every default and keep existing files
    #[arg(long, short = 'n')]
    pub no_interaction: bool,

    /// Database table name
    #[arg(long)]
    pub table: Option<String>,

    /// Model class name
    #[arg(long)]
    pub model: Option<String>,

    /// Controller name, e.g. `Post` or `Admin/PostController`
    #[arg(long)]
    pub controller: Option<String>,

    /// Controller sub-folder, e.g. `Admin/Users`
    #[arg(long)]
    pub controller_folder: Option<String>,

    /// Page or view sub-folder
    #[arg(long)]
    pub ui_folder: Option<String>,
}

/// Everything a `generate` run produced
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// The validated plan
    pub plan: GenerationPlan,
    /// Per-file results, in plan order
    pub outcomes: Vec<WriteOutcome>,
}

impl GenerateArgs {
    /// Execute the generate command in `project_root`
    ///
    /// # Errors
    ///
    /// Returns an error if an option or answer is invalid, a computed path
    /// leaves its base directory, a stub is missing or a file cannot be
    /// written.
    pub fn execute(&self, project_root: &Path) -> Result<GenerateReport> {
        let timestamp = chrono::Local::now().naive_local();
        if self.no_interaction {
            self.run(project_root, &mut NonInteractive, timestamp)
        } else {
            self.run(project_root, &mut TerminalPrompter::new(), timestamp)
        }
    }

    /// Run with an explicit prompter and migration timestamp
    ///
    /// # Errors
    ///
    /// See [`GenerateArgs::execute`].
    pub fn run(
        &self,
        project_root: &Path,
        prompter: &mut dyn Prompter,
        timestamp: NaiveDateTime,
    ) -> Result<GenerateReport> {
        let config = ScaffoldConfig::load_for_project(project_root)?;
        let options = self.options(&config)?;
        let request = self.collect(&config, options, prompter)?;

        let layout = ProjectLayout::new(project_root, &config);
        let plan = GenerationPlan::build(&request, &layout, timestamp)?;

        println!(
            "\n{}{}",
            ROCKET,
            style("Scaffolding resource").cyan().bold()
        );
        let settings: Vec<[String; 2]> = plan
            .settings()
            .iter()
            .map(|(label, value)| [(*label).to_string(), value.clone()])
            .collect();
        print_table(&["Setting", "Value"], &settings);
        println!();

        let locator = StubLocator::new(project_root, &config.stubs.published);
        let writer = Writer::new(
            &locator,
            &layout,
            request.options.force,
            request.options.dry_run,
        );
        let outcomes = writer
            .write_all(&plan, prompter)
            .context("Failed to generate scaffold files")?;

        print_summary(&outcomes);
        print_next_steps(&plan, &request.options);

        Ok(GenerateReport { plan, outcomes })
    }

    /// Parse the enumerated options, falling back to configured defaults
    fn options(&self, config: &ScaffoldConfig) -> Result<GenerateOptions> {
        let stack: Stack = self
            .stack
            .as_deref()
            .unwrap_or(config.defaults.stack.as_str())
            .parse()?;
        let pages = parse_pages(self.pages.as_deref().unwrap_or(config.defaults.pages.as_str()))?;

        let mut options = GenerateOptions {
            stack,
            pages,
            typescript: self.ts,
            resource: self.resource,
            force: self.force,
            dry_run: self.dry_run,
        };

        if options.reconcile_typescript() {
            println!(
                "{}{}",
                WARN,
                style(format!(
                    "Ignoring --ts because stack \"{stack}\" does not use TypeScript page files."
                ))
                .yellow()
            );
        }

        Ok(options)
    }

    /// Resolve every name, asking for whatever was not given as a flag
    fn collect(
        &self,
        config: &ScaffoldConfig,
        options: GenerateOptions,
        prompter: &mut dyn Prompter,
    ) -> Result<ScaffoldRequest> {
        let raw_table = match &self.table {
            Some(table) => table.clone(),
            None => prompter.ask("Give me name for database table", "users")?,
        };
        let table = normalize_table_name(&raw_table);

        let default_model = default_model_name(&table);
        let model = match &self.model {
            Some(model) => model_name_override(model, &table),
            None => {
                let question =
                    format!("Do you want default model name for '{table}'? ({default_model})");
                if prompter.confirm(&question, true)? {
                    default_model
                } else {
                    let raw = prompter.ask("Give me model name", &default_model)?;
                    model_name_override(&raw, &table)
                }
            }
        };

        let raw_controller = match &self.controller {
            Some(controller) => controller.clone(),
            None => prompter.ask("Give me name of Controller", &format!("{model}Controller"))?,
        };
        let controller = normalize_controller_name(&raw_controller);
        if !controller.namespace().is_empty() {
            tracing::debug!(
                namespace = %controller.namespace(),
                "controller name namespace ignored, the controller folder decides placement"
            );
        }

        let raw_folder = match &self.controller_folder {
            Some(folder) => folder.clone(),
            None => prompter.ask(
                "Controller folder (optional). Example: Admin/Users (leave empty for none)",
                "",
            )?,
        };
        let controller_folder = normalize_folder_path(&raw_folder)?;

        let raw_ui = match &self.ui_folder {
            Some(folder) => folder.clone(),
            None => {
                let default_ui = if controller_folder.is_empty() {
                    model.clone()
                } else {
                    controller_folder.as_slash_path()
                };
                let question = if options.stack.is_inertia() {
                    format!(
                        "Give me name for your inertia folder under {}",
                        config.paths.pages.display()
                    )
                } else {
                    format!(
                        "Give me name for your view folder under {}",
                        config.paths.views.display()
                    )
                };
                prompter.ask(&question, &default_ui)?
            }
        };
        let ui_folder = normalize_ui_path(&raw_ui)?;

        tracing::debug!(
            table = %table,
            model = %model,
            controller = %controller.class_name(),
            controller_folder = %controller_folder,
            ui_folder = %ui_folder,
            "answers resolved"
        );

        Ok(ScaffoldRequest {
            table,
            model,
            controller,
            controller_folder,
            ui_folder,
            options,
        })
    }
}

fn print_next_steps(plan: &GenerationPlan, options: &GenerateOptions) {
    println!("\n{}", style("Next steps:").cyan().bold());
    println!(
        "  1. Add the route to routes/web.php: {}",
        style(plan.route_line()).yellow()
    );
    if !options.dry_run {
        println!("  2. Run the migration: {}", style("php artisan migrate").yellow());
    }

    if options.resource && !options.covers_resource_pages() {
        println!(
            "\n{}{}",
            WARN,
            style(
                "Resource controller includes edit/show methods. Add --pages=Index,Create,Edit,Show when needed."
            )
            .yellow()
        );
    }
}
