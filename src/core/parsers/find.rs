use crate::core::parsers::{invalid_format, CommandParser};
use crate::domain::command::{Command, NameKeywords};
use crate::utils::error::ParseResult;

pub const USAGE: &str = "find: Finds applicants whose names contain any of the given keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob";

#[derive(Debug, Clone, Copy, Default)]
pub struct FindCommandParser;

impl CommandParser for FindCommandParser {
    fn keyword(&self) -> &'static str {
        "find"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn parse(&self, args: &str) -> ParseResult<Command> {
        let keywords = args.split_whitespace().map(str::to_string).collect();
        NameKeywords::new(keywords)
            .map(|keywords| Command::Find { keywords })
            .ok_or_else(|| invalid_format("Provide at least one keyword.", USAGE))
    }
}
