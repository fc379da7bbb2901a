//! Stub management commands
//!
//! - `publish` - Copy the bundled stubs into the project for customization
//! - `list` - Show which source each stub is loaded from
//! - `diff` - Show changes between a published stub and the bundled default

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use console::{style, Emoji};
use resource_scaffold::config::StubSettings;
use resource_scaffold::stubs::{bundled, StubSource, BUNDLED_STUBS};
use resource_scaffold::{ScaffoldConfig, StubLocator};
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static SKIP: Emoji<'_, '_> = Emoji("- ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "");

/// Directory that `stubs publish` writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PublishTarget {
    /// `stubs/laravel-resource-scaffold`
    #[default]
    LaravelResourceScaffold,
    /// `stubs/inertia-scaffold`
    InertiaScaffold,
    /// `stubs/inertia-page-generator`
    InertiaPageGenerator,
}

impl PublishTarget {
    /// Project-relative directory
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::LaravelResourceScaffold => StubSettings::PUBLISH_DIR,
            Self::InertiaScaffold => StubSettings::LEGACY_DIRS[0],
            Self::InertiaPageGenerator => StubSettings::LEGACY_DIRS[1],
        }
    }
}

/// Stub management subcommands
#[derive(Debug, Subcommand)]
pub enum StubsCommand {
    /// Copy the bundled stubs into the project
    Publish {
        /// Directory to publish into
        #[arg(long, value_enum, default_value_t)]
        target: PublishTarget,
        /// Replace stubs that were already published
        #[arg(long)]
        force: bool,
    },
    /// List every stub and the source it resolves to
    List,
    /// Show the diff between a published stub and the bundled default
    Diff {
        /// Stub name (e.g. model.stub)
        name: String,
    },
}

/// Files touched by `stubs publish`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Stubs written
    pub written: Vec<PathBuf>,
    /// Stubs left alone because they already existed
    pub skipped: Vec<PathBuf>,
}

impl StubsCommand {
    /// Execute the stubs command
    ///
    /// # Errors
    ///
    /// Returns error if configuration cannot be loaded or a stub operation fails.
    pub fn execute(&self, project_root: &Path) -> Result<()> {
        match self {
            Self::Publish { target, force } => {
                publish(project_root, *target, *force).map(|_| ())
            }
            Self::List => list(project_root),
            Self::Diff { name } => diff(project_root, name).map(|_| ()),
        }
    }
}

/// Write every bundled stub into `<project_root>/<target>`
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written.
pub fn publish(project_root: &Path, target: PublishTarget, force: bool) -> Result<PublishReport> {
    let dir = project_root.join(target.dir());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    println!("Publishing stubs to {}", style(target.dir()).cyan());
    println!();

    let mut report = PublishReport::default();
    for (name, content) in BUNDLED_STUBS {
        let path = dir.join(name);
        if path.exists() && !force {
            println!("  {SKIP}{} {}", style(name).dim(), style("(exists)").dim());
            report.skipped.push(path);
            continue;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write stub: {}", path.display()))?;
        println!("  {CHECK}{}", style(name).green());
        report.written.push(path);
    }

    println!();
    println!(
        "{CHECK}Published {} stubs, skipped {}",
        report.written.len(),
        report.skipped.len()
    );
    if !report.skipped.is_empty() {
        println!("Use {} to replace existing stubs.", style("--force").yellow());
    }

    Ok(report)
}

/// Print every stub name with the source it resolves to
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn list(project_root: &Path) -> Result<()> {
    let config = ScaffoldConfig::load_for_project(project_root)?;
    let locator = StubLocator::new(project_root, &config.stubs.published);

    println!("{FILE}Stubs");
    println!();
    for dir in locator.directories() {
        println!("  Published: {}", style(dir.display()).cyan());
    }
    println!();

    let mut customized = 0;
    for (name, _) in BUNDLED_STUBS {
        let stub = locator.resolve(name)?;
        match &stub.source {
            StubSource::Published { path, .. } => {
                customized += 1;
                println!(
                    "  {CUSTOM}{} {}",
                    style(name).yellow(),
                    style(path.display()).dim()
                );
            }
            StubSource::Bundled(_) => println!("  {DEFAULT}{}", style(name).dim()),
        }
    }

    println!();
    println!(
        "  {} published, {} bundled",
        style(customized).yellow(),
        style(BUNDLED_STUBS.len() - customized).dim()
    );

    Ok(())
}

/// Print the diff between the resolved stub and the bundled default
///
/// Returns the diff text, or `None` when the stub is not published.
///
/// # Errors
///
/// Returns an error if `name` is not a known stub or a file cannot be read.
pub fn diff(project_root: &Path, name: &str) -> Result<Option<String>> {
    let config = ScaffoldConfig::load_for_project(project_root)?;
    let locator = StubLocator::new(project_root, &config.stubs.published);

    let default_content =
        bundled(name).with_context(|| format!("No bundled stub named '{name}'"))?;
    let stub = locator.resolve(name)?;

    let StubSource::Published { path, .. } = &stub.source else {
        println!("Stub '{name}' is not published (using bundled default)");
        return Ok(None);
    };

    let custom_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stub: {}", path.display()))?;

    println!("{FILE}{}", style(path.display()).bold());
    println!();

    let mut text = String::new();
    let diff = TextDiff::from_lines(default_content, &custom_content);
    for change in diff.iter_all_changes() {
        let (sign, line) = match change.tag() {
            ChangeTag::Delete => ("-", style(format!("-{change}")).red()),
            ChangeTag::Insert => ("+", style(format!("+{change}")).green()),
            ChangeTag::Equal => (" ", style(format!(" {change}"))),
        };
        print!("{line}");
        text.push_str(sign);
        text.push_str(&change.to_string());
    }
    println!();

    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_targets() {
        assert_eq!(
            PublishTarget::default().dir(),
            "stubs/laravel-resource-scaffold"
        );
        assert_eq!(PublishTarget::InertiaScaffold.dir(), "stubs/inertia-scaffold");
        assert_eq!(
            PublishTarget::InertiaPageGenerator.dir(),
            "stubs/inertia-page-generator"
        );
    }

    #[test]
    fn test_publish_skips_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();

        let first = publish(dir.path(), PublishTarget::default(), false).unwrap();
        assert_eq!(first.written.len(), BUNDLED_STUBS.len());

        let model = dir.path().join("stubs/laravel-resource-scaffold/model.stub");
        fs::write(&model, "custom").unwrap();

        let second = publish(dir.path(), PublishTarget::default(), false).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(fs::read_to_string(&model).unwrap(), "custom");

        let forced = publish(dir.path(), PublishTarget::default(), true).unwrap();
        assert_eq!(forced.written.len(), BUNDLED_STUBS.len());
        assert_ne!(fs::read_to_string(&model).unwrap(), "custom");
    }

    #[test]
    fn test_diff_reports_changes() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(diff(dir.path(), "model.stub").unwrap(), None);

        let published = dir.path().join("stubs/inertia-scaffold");
        fs::create_dir_all(&published).unwrap();
        let custom = format!(
            "{}// customized\n",
            bundled("model.stub").unwrap()
        );
        fs::write(published.join("model.stub"), custom).unwrap();

        let text = diff(dir.path(), "model.stub").unwrap().unwrap();
        assert!(text.contains("+// customized"));
        assert!(!text.lines().any(|l| l.starts_with('-')));
    }

    #[test]
    fn test_diff_unknown_stub() {
        let dir = tempfile::tempdir().unwrap();
        assert!(diff(dir.path(), "missing.stub").is_err());
    }
}
