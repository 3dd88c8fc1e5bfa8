use crate::core::parsers::add::AddCommandParser;
use crate::core::parsers::delete::DeleteCommandParser;
use crate::core::parsers::edit::EditCommandParser;
use crate::core::parsers::filter::FilterCommandParser;
use crate::core::parsers::find::FindCommandParser;
use crate::core::parsers::simple::{CLEAR, EXIT, HELP, LIST};
use crate::core::parsers::sort::SortCommandParser;
use crate::core::parsers::CommandParser;
use crate::domain::command::Command;
use crate::utils::error::{ParseError, ParseResult};

/// Every command the interpreter understands, in the order `help` lists them.
pub static COMMAND_PARSERS: [&dyn CommandParser; 10] = [
    &AddCommandParser,
    &EditCommandParser,
    &DeleteCommandParser,
    &FindCommandParser,
    &FilterCommandParser,
    &SortCommandParser,
    &LIST,
    &CLEAR,
    &HELP,
    &EXIT,
];

/// Parses one line of user input into a [`Command`].
///
/// The first whitespace-separated word selects the parser, which receives
/// the rest of the line untouched. Keywords are case-sensitive.
pub fn dispatch(line: &str) -> ParseResult<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (keyword, args) = split_keyword(line);
    let Some(parser) = parser_for(keyword) else {
        tracing::debug!("Unknown command keyword: {}", keyword);
        return Err(ParseError::UnknownCommand {
            keyword: keyword.to_string(),
        });
    };

    tracing::debug!("Dispatching '{}' to its parser", keyword);
    parser.parse(args)
}

pub fn parser_for(keyword: &str) -> Option<&'static dyn CommandParser> {
    COMMAND_PARSERS
        .iter()
        .copied()
        .find(|parser| parser.keyword() == keyword)
}

/// Usage text of every command, for `help`.
pub fn command_usages() -> Vec<&'static str> {
    COMMAND_PARSERS.iter().map(|parser| parser.usage()).collect()
}

/// Splits at the first whitespace; the remainder keeps its leading whitespace.
fn split_keyword(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(at) => line.split_at(at),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_keyword() {
        assert_eq!(split_keyword("add n/Alice"), ("add", " n/Alice"));
        assert_eq!(split_keyword("list"), ("list", ""));
        assert_eq!(split_keyword("delete\t2"), ("delete", "\t2"));
    }

    #[test]
    fn test_keywords_are_unique() {
        let keywords: HashSet<_> = COMMAND_PARSERS.iter().map(|p| p.keyword()).collect();
        assert_eq!(keywords.len(), COMMAND_PARSERS.len());
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert_eq!(
            dispatch("LIST"),
            Err(ParseError::UnknownCommand {
                keyword: "LIST".to_string()
            })
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(dispatch("   "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_usages_cover_every_command() {
        assert_eq!(command_usages().len(), COMMAND_PARSERS.len());
        assert!(command_usages().iter().all(|usage| !usage.is_empty()));
    }
}
