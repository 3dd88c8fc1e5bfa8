use crate::core::parsers::{invalid_format, CommandParser};
use crate::domain::command::{Command, SortKey, SortOrder};
use crate::utils::error::ParseResult;

pub const USAGE: &str = "sort: Sorts the displayed applicants.\n\
Parameters: name|grade|graduation [asc|desc]\n\
Example: sort grade desc";

#[derive(Debug, Clone, Copy, Default)]
pub struct SortCommandParser;

impl CommandParser for SortCommandParser {
    fn keyword(&self) -> &'static str {
        "sort"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn parse(&self, args: &str) -> ParseResult<Command> {
        let words: Vec<&str> = args.split_whitespace().collect();
        let (key, order) = match words.as_slice() {
            [key] => (*key, None),
            [key, order] => (*key, Some(*order)),
            [] => return Err(invalid_format("Missing sort key.", USAGE)),
            _ => return Err(invalid_format("Too many arguments.", USAGE)),
        };

        let key = SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| invalid_format(format!("Unknown sort key \"{}\".", key), USAGE))?;

        let order = match order.map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortOrder::Ascending,
            Some("desc") => SortOrder::Descending,
            Some(other) => {
                return Err(invalid_format(
                    format!("Unknown sort direction \"{}\".", other),
                    USAGE,
                ))
            }
        };

        Ok(Command::Sort { key, order })
    }
}
