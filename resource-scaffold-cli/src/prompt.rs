//! Interactive questions
//!
//! Commands never talk to the terminal directly; they ask a [`Prompter`].
//! That keeps `--no-interaction` and tests on the same code path as a real
//! session.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::collections::VecDeque;

/// Source of answers to free-text and yes/no questions
pub trait Prompter {
    /// Ask for a line of text; an empty answer means `default`
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn ask(&mut self, question: &str, default: &str) -> Result<String>;

    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Prompts on the terminal through `dialoguer`
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter with the colorful theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(question)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact()?)
    }
}

/// Accepts every default without asking
///
/// Overwrite confirmations default to "no", so existing files are kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractive;

impl Prompter for NonInteractive {
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        tracing::debug!(question, default, "accepting default answer");
        Ok(default.to_string())
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!(question, default, "accepting default confirmation");
        Ok(default)
    }
}

/// Replays a fixed list of answers and records every question
///
/// An empty or missing answer selects the default. Confirmations accept
/// `y`/`yes` and `n`/`no`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that answers in order
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Every question asked so far
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    fn next_answer(&mut self, question: &str) -> Option<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .filter(|answer| !answer.trim().is_empty())
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        Ok(self
            .next_answer(question)
            .unwrap_or_else(|| default.to_string()))
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        match self.next_answer(question) {
            None => Ok(default),
            Some(answer) => match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                other => anyhow::bail!("Unrecognized confirmation answer: {other}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_takes_defaults() {
        let mut prompter = NonInteractive;
        assert_eq!(prompter.ask("Table?", "users").unwrap(), "users");
        assert!(prompter.confirm("Default model?", true).unwrap());
        assert!(!prompter.confirm("Overwrite?", false).unwrap());
    }

    #[test]
    fn test_scripted_answers_in_order() {
        let mut prompter = ScriptedPrompter::new(["posts", "", "n"]);
        assert_eq!(prompter.ask("Table?", "users").unwrap(), "posts");
        assert_eq!(prompter.ask("Controller?", "PostController").unwrap(), "PostController");
        assert!(!prompter.confirm("Overwrite?", true).unwrap());
        assert!(prompter.confirm("Exhausted?", true).unwrap());
        assert_eq!(
            prompter.questions(),
            ["Table?", "Controller?", "Overwrite?", "Exhausted?"]
        );
    }

    #[test]
    fn test_scripted_rejects_unclear_confirmation() {
        let mut prompter = ScriptedPrompter::new(["maybe"]);
        assert!(prompter.confirm("Overwrite?", false).is_err());
    }
}
