pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod find;
pub mod simple;
pub mod sort;

use crate::core::prefix::Prefix;
use crate::core::tokenizer::ArgumentMultimap;
use crate::domain::command::Command;
use crate::utils::error::{ParseError, ParseResult};

/// Turns the text after a command keyword into a [`Command`].
pub trait CommandParser: Send + Sync {
    /// Keyword the dispatcher routes on.
    fn keyword(&self) -> &'static str;

    /// Usage text echoed back in format errors and by `help`.
    fn usage(&self) -> &'static str;

    fn parse(&self, args: &str) -> ParseResult<Command>;
}

/// Fails with the first prefix of `mandatory` that was never supplied.
pub(crate) fn require_prefixes(
    args: &ArgumentMultimap,
    mandatory: &[Prefix],
    usage: &'static str,
) -> ParseResult<()> {
    match args.first_missing(mandatory) {
        Some(prefix) => Err(ParseError::MissingMandatoryField { prefix, usage }),
        None => Ok(()),
    }
}

pub(crate) fn require_no_preamble(args: &ArgumentMultimap, usage: &'static str) -> ParseResult<()> {
    if args.preamble().is_empty() {
        Ok(())
    } else {
        Err(ParseError::UnexpectedPreamble {
            preamble: args.preamble().to_string(),
            usage,
        })
    }
}

pub(crate) fn invalid_format(reason: impl Into<String>, usage: &'static str) -> ParseError {
    ParseError::InvalidCommandFormat {
        reason: reason.into(),
        usage,
    }
}
