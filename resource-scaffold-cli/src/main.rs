//! resource-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use resource_scaffold::observability;
use resource_scaffold_cli_lib::{GenerateArgs, StubsCommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "resource-scaffold")]
#[command(version)]
#[command(about = "Scaffold a Laravel migration, model, controller and UI pages", long_about = None)]
struct Cli {
    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Laravel project root (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a migration, model, controller and pages for one resource
    #[command(visible_aliases = ["new-page", "inertia:scaffold", "resource:scaffold"])]
    Generate(GenerateArgs),
    /// Manage customizable stubs
    Stubs {
        #[command(subcommand)]
        command: StubsCommand,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style(format!("{e:#}")).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = match cli.project {
        Some(dir) => std::path::absolute(&dir)
            .with_context(|| format!("Failed to resolve project directory: {}", dir.display()))?,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match cli.command {
        Commands::Generate(args) => {
            args.execute(&project_root)?;
        }
        Commands::Stubs { command } => {
            command.execute(&project_root)?;
        }
    }

    Ok(())
}
