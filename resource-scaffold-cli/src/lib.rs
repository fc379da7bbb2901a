//! resource-scaffold CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod prompt;
pub mod writer;

pub use commands::{GenerateArgs, GenerateReport, StubsCommand};
pub use prompt::{NonInteractive, Prompter, ScriptedPrompter, TerminalPrompter};
pub use writer::{WriteOutcome, WriteStatus, Writer};
