pub mod dispatcher;
pub mod field_parser;
pub mod parsers;
pub mod prefix;
pub mod tokenizer;

pub use crate::domain::command::Command;
pub use crate::domain::ports::{CommandExecutor, CommandResult};
pub use crate::utils::error::{ParseError, ParseResult};
pub use dispatcher::dispatch;
