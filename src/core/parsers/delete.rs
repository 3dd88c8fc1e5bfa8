use crate::core::field_parser::parse_index;
use crate::core::parsers::{invalid_format, CommandParser};
use crate::domain::command::Command;
use crate::utils::error::ParseResult;

pub const USAGE: &str = "delete: Deletes the applicant at the given index in the displayed list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteCommandParser;

impl CommandParser for DeleteCommandParser {
    fn keyword(&self) -> &'static str {
        "delete"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn parse(&self, args: &str) -> ParseResult<Command> {
        if args.trim().is_empty() {
            return Err(invalid_format("Missing applicant index.", USAGE));
        }
        let index = parse_index(args)?;
        Ok(Command::Delete { index })
    }
}
