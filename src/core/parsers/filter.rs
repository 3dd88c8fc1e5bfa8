use crate::core::field_parser::{parse_optional, parse_skills};
use crate::core::parsers::{invalid_format, require_no_preamble, CommandParser};
use crate::core::prefix::{Prefix, PREFIX_COURSE, PREFIX_INSTITUTION, PREFIX_SKILL, PREFIX_STATUS};
use crate::core::tokenizer::tokenize;
use crate::domain::command::{Command, FilterCriteria};
use crate::utils::error::ParseResult;

pub const USAGE: &str = "filter: Lists applicants matching every given criterion. \
Course and institution match ignoring case; every listed skill must be present.\n\
Parameters: [st/STATUS] [c/COURSE] [i/INSTITUTION] [s/SKILL]...\n\
Example: filter st/Interviewing s/Rust";

const FILTER_PREFIXES: [Prefix; 4] = [PREFIX_STATUS, PREFIX_COURSE, PREFIX_INSTITUTION, PREFIX_SKILL];

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterCommandParser;

impl CommandParser for FilterCommandParser {
    fn keyword(&self) -> &'static str {
        "filter"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn parse(&self, args: &str) -> ParseResult<Command> {
        let args = tokenize(args, &FILTER_PREFIXES);
        require_no_preamble(&args, USAGE)?;

        let criteria = FilterCriteria {
            status: parse_optional(&args, &PREFIX_STATUS)?,
            course: parse_optional(&args, &PREFIX_COURSE)?,
            institution: parse_optional(&args, &PREFIX_INSTITUTION)?,
            skills: parse_skills(args.all_values(&PREFIX_SKILL))?,
        };

        if criteria.is_empty() {
            return Err(invalid_format(
                "Provide at least one filter criterion.",
                USAGE,
            ));
        }
        Ok(Command::Filter { criteria })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::ApplicationStatus;
    use crate::utils::error::ParseErrorKind;

    #[test]
    fn test_filter_collects_all_criteria() {
        let Command::Filter { criteria } = FilterCommandParser
            .parse(" st/offered c/CS s/Rust s/Go s/Rust")
            .unwrap()
        else {
            panic!("expected filter");
        };
        assert_eq!(criteria.status, Some(ApplicationStatus::Offered));
        assert_eq!(criteria.course.unwrap().as_str(), "CS");
        assert!(criteria.institution.is_none());
        assert_eq!(criteria.skills.len(), 2);
    }

    #[test]
    fn test_filter_needs_a_criterion() {
        let err = FilterCommandParser.parse("").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidCommandFormat);
    }

    #[test]
    fn test_fields_outside_filter_vocabulary_land_in_preamble() {
        let err = FilterCommandParser.parse(" n/Alice st/Hired").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedPreamble);
    }
}
