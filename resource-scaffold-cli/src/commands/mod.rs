//! CLI command implementations

pub mod generate;
pub mod stubs;

pub use generate::{GenerateArgs, GenerateReport};
pub use stubs::{PublishTarget, StubsCommand};
