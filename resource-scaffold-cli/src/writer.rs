//! Writes a generation plan to disk
//!
//! Existing files are a decision point, not an error: each one is skipped,
//! reported (dry run) or overwritten after confirmation.

use anyhow::{Context, Result};
use console::style;
use resource_scaffold::plan::{FileKind, GenerationPlan, PlannedFile, ProjectLayout};
use resource_scaffold::{StubLocator, StubRenderer};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::prompt::Prompter;

/// What happened to one planned file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// Left untouched
    Skipped,
    /// Would be created (dry run)
    WouldWrite,
    /// Would replace an existing file (dry run)
    WouldOverwrite,
    /// Existing file replaced
    Overwritten,
    /// New file written
    Created,
}

impl WriteStatus {
    /// Status label used in progress lines and the summary
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::WouldWrite => "would-write",
            Self::WouldOverwrite => "would-overwrite",
            Self::Overwritten => "overwritten",
            Self::Created => "created",
        }
    }

    fn styled(self) -> console::StyledObject<&'static str> {
        let label = style(self.as_str());
        match self {
            Self::Skipped => label.yellow(),
            Self::WouldWrite | Self::WouldOverwrite => label.cyan(),
            Self::Overwritten => label.magenta(),
            Self::Created => label.green(),
        }
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result for one planned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Final status
    pub status: WriteStatus,
    /// What the file is
    pub kind: FileKind,
    /// Path relative to the project root
    pub path: PathBuf,
}

/// How to treat one file before any prompt is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Final status known without asking
    Settled(WriteStatus),
    /// Ask whether to overwrite
    AskOverwrite,
}

/// Decide what to do with a planned file
#[must_use]
#[allow(clippy::fn_params_excessive_bools)]
pub const fn decide(exists: bool, skip_if_exists: bool, force: bool, dry_run: bool) -> Decision {
    if exists && skip_if_exists && !force {
        return Decision::Settled(WriteStatus::Skipped);
    }
    if dry_run {
        return Decision::Settled(if exists {
            WriteStatus::WouldOverwrite
        } else {
            WriteStatus::WouldWrite
        });
    }
    if exists && !force {
        return Decision::AskOverwrite;
    }
    Decision::Settled(if exists {
        WriteStatus::Overwritten
    } else {
        WriteStatus::Created
    })
}

/// Renders stubs and writes planned files
pub struct Writer<'a> {
    locator: &'a StubLocator,
    layout: &'a ProjectLayout,
    force: bool,
    dry_run: bool,
}

impl<'a> Writer<'a> {
    /// Create a writer
    #[must_use]
    pub const fn new(
        locator: &'a StubLocator,
        layout: &'a ProjectLayout,
        force: bool,
        dry_run: bool,
    ) -> Self {
        Self {
            locator,
            layout,
            force,
            dry_run,
        }
    }

    /// Write every file of `plan`, in order, printing one line per file
    ///
    /// # Errors
    ///
    /// Returns an error if a stub is missing or a file cannot be written.
    pub fn write_all(
        &self,
        plan: &GenerationPlan,
        prompter: &mut dyn Prompter,
    ) -> Result<Vec<WriteOutcome>> {
        let mut outcomes = Vec::with_capacity(plan.files().len());

        for file in plan.files() {
            let outcome = self.write_one(plan, file, prompter)?;
            println!(
                "  {} {} {}",
                outcome.status.styled(),
                style(outcome.kind).bold(),
                style(outcome.path.display()).dim()
            );
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    fn write_one(
        &self,
        plan: &GenerationPlan,
        file: &PlannedFile,
        prompter: &mut dyn Prompter,
    ) -> Result<WriteOutcome> {
        let stub = self.locator.resolve(&file.stub)?;
        let relative = self.layout.relative(&file.path).to_path_buf();
        let exists = file.path.exists();

        let status = match decide(exists, file.skip_if_exists, self.force, self.dry_run) {
            Decision::Settled(status) => status,
            Decision::AskOverwrite => {
                let question = format!("File exists. Overwrite? {}", relative.display());
                if prompter.confirm(&question, false)? {
                    WriteStatus::Overwritten
                } else {
                    WriteStatus::Skipped
                }
            }
        };

        if matches!(status, WriteStatus::Created | WriteStatus::Overwritten) {
            let content = StubRenderer::render(&stub, plan.vars())?;

            if let Some(parent) = file.path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            fs::write(&file.path, content)
                .with_context(|| format!("Failed to write file: {}", file.path.display()))?;

            tracing::debug!(path = %file.path.display(), stub = %stub, %status, "file written");
        }

        Ok(WriteOutcome {
            status,
            kind: file.kind,
            path: relative,
        })
    }
}

/// Print the `Generation summary` table
pub fn print_summary(outcomes: &[WriteOutcome]) {
    let rows: Vec<[String; 3]> = outcomes
        .iter()
        .map(|o| {
            [
                o.status.to_string(),
                o.kind.to_string(),
                o.path.display().to_string(),
            ]
        })
        .collect();

    println!("\n{}", style("Generation summary").cyan().bold());
    print_table(&["Status", "Type", "Path"], &rows);
}

/// Print a plain left-aligned table
pub fn print_table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) {
    let mut widths: [usize; N] = std::array::from_fn(|i| headers[i].len());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!(
        "  {}",
        style(line(headers.iter().map(ToString::to_string).collect())).bold()
    );
    println!(
        "  {}",
        style(widths.map(|w| "-".repeat(w)).join("  ")).dim()
    );
    for row in rows {
        println!("  {}", line(row.to_vec()));
    }
}
