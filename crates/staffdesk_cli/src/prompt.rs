//! Line-oriented user input.
//!
//! # Responsibility
//! - Abstract "ask one line" so the menu loop can run against a terminal or
//!   a script.
//! - Provide the trimmed/raw/confirm helpers used by every action.
//!
//! # Invariants
//! - `ask` answers are trimmed of surrounding whitespace; `ask_raw` answers
//!   are not.
//! - End of input surfaces as `PromptError::Closed`, never as an empty answer.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PromptResult<T> = Result<T, PromptError>;

/// Input-side failure.
#[derive(Debug)]
pub enum PromptError {
    /// Input stream ended (Ctrl-D) or was interrupted (Ctrl-C).
    Closed,
    Io(ReadlineError),
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "input closed"),
            Self::Io(err) => write!(f, "failed to read input: {err}"),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Closed => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ReadlineError> for PromptError {
    fn from(value: ReadlineError) -> Self {
        match value {
            ReadlineError::Eof | ReadlineError::Interrupted => Self::Closed,
            other => Self::Io(other),
        }
    }
}

/// Source of answers for interactive prompts.
pub trait Prompter {
    /// Shows `prompt` and returns the raw line the user entered.
    fn read_line(&mut self, prompt: &str) -> PromptResult<String>;

    /// Returns the answer exactly as typed.
    fn ask_raw(&mut self, message: &str) -> PromptResult<String> {
        self.read_line(&format!("? {message} "))
    }

    /// Returns the trimmed answer; may be empty.
    fn ask(&mut self, message: &str) -> PromptResult<String> {
        Ok(self.ask_raw(message)?.trim().to_string())
    }

    /// Yes/no question defaulting to `default` on a blank answer.
    fn confirm(&mut self, message: &str, default: bool) -> PromptResult<bool> {
        let suffix = if default { "(Y/n)" } else { "(y/N)" };
        let answer = self.ask(&format!("{message} {suffix}"))?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

/// Terminal prompter backed by `rustyline` with in-session history.
pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> PromptResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        Ok(line)
    }
}
