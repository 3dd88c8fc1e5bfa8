use crate::core::parsers::CommandParser;
use crate::domain::command::Command;
use crate::utils::error::ParseResult;

/// Parser for commands that take no arguments. Anything after the keyword is ignored.
#[derive(Debug)]
pub struct SimpleCommandParser {
    keyword: &'static str,
    usage: &'static str,
    command: Command,
}

pub static LIST: SimpleCommandParser = SimpleCommandParser {
    keyword: "list",
    usage: "list: Lists all applicants.\nExample: list",
    command: Command::List,
};

pub static CLEAR: SimpleCommandParser = SimpleCommandParser {
    keyword: "clear",
    usage: "clear: Removes every applicant.\nExample: clear",
    command: Command::Clear,
};

pub static HELP: SimpleCommandParser = SimpleCommandParser {
    keyword: "help",
    usage: "help: Shows the usage of every command.\nExample: help",
    command: Command::Help,
};

pub static EXIT: SimpleCommandParser = SimpleCommandParser {
    keyword: "exit",
    usage: "exit: Ends the session.\nExample: exit",
    command: Command::Exit,
};

impl CommandParser for SimpleCommandParser {
    fn keyword(&self) -> &'static str {
        self.keyword
    }

    fn usage(&self) -> &'static str {
        self.usage
    }

    fn parse(&self, args: &str) -> ParseResult<Command> {
        if !args.trim().is_empty() {
            tracing::debug!("Ignoring arguments to {}: {:?}", self.keyword, args.trim());
        }
        Ok(self.command.clone())
    }
}
