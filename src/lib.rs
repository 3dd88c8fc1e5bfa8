pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{run_line, run_session, EchoExecutor, SessionSummary};
pub use config::{AppConfig, OutputFormat};
pub use core::dispatcher::dispatch;
pub use domain::command::Command;
pub use domain::model::Applicant;
pub use domain::ports::{CommandExecutor, CommandResult};
pub use utils::error::{AppError, ParseError, ParseErrorKind, ParseResult, Result};
