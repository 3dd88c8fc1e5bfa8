use crate::domain::command::Command;
use crate::utils::error::Result;
use serde::Serialize;

/// Outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub feedback: String,
    /// Set when the session should end after showing the feedback.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exiting(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// Anything that can carry out parsed commands, typically against a record store.
pub trait CommandExecutor {
    fn execute(&mut self, command: Command) -> Result<CommandResult>;
}
