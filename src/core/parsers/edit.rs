use crate::core::field_parser::{parse_index, parse_optional, parse_skills};
use crate::core::parsers::{invalid_format, CommandParser};
use crate::core::prefix::{
    APPLICANT_PREFIXES, PREFIX_COURSE, PREFIX_EMAIL, PREFIX_GRADE, PREFIX_GRADUATION_YEAR_MONTH,
    PREFIX_INSTITUTION, PREFIX_NAME, PREFIX_PHONE, PREFIX_SKILL, PREFIX_STATUS,
};
use crate::core::tokenizer::{tokenize, ArgumentMultimap};
use crate::domain::command::{Command, EditApplicantDescriptor};
use crate::domain::fields::Skill;
use crate::utils::error::ParseResult;
use std::collections::BTreeSet;

pub const USAGE: &str = "edit: Edits the applicant at the given index in the displayed list. \
Fields not mentioned keep their current value; a single empty s/ removes every skill.\n\
Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL] [g/GRADE] [i/INSTITUTION] [c/COURSE] [y/YYYY-MM] [st/STATUS] [s/SKILL]...\n\
Example: edit 1 p/91234567 st/Interviewing";

#[derive(Debug, Clone, Copy, Default)]
pub struct EditCommandParser;

impl CommandParser for EditCommandParser {
    fn keyword(&self) -> &'static str {
        "edit"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn parse(&self, args: &str) -> ParseResult<Command> {
        let args = tokenize(args, &APPLICANT_PREFIXES);
        if args.preamble().is_empty() {
            return Err(invalid_format("Missing applicant index.", USAGE));
        }
        let index = parse_index(args.preamble())?;

        let descriptor = EditApplicantDescriptor {
            name: parse_optional(&args, &PREFIX_NAME)?,
            phone: parse_optional(&args, &PREFIX_PHONE)?,
            email: parse_optional(&args, &PREFIX_EMAIL)?,
            grade: parse_optional(&args, &PREFIX_GRADE)?,
            institution: parse_optional(&args, &PREFIX_INSTITUTION)?,
            course: parse_optional(&args, &PREFIX_COURSE)?,
            graduation_year_month: parse_optional(&args, &PREFIX_GRADUATION_YEAR_MONTH)?,
            status: parse_optional(&args, &PREFIX_STATUS)?,
            skills: parse_skills_for_edit(&args)?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(invalid_format(
                "At least one field to edit must be provided.",
                USAGE,
            ));
        }

        tracing::debug!("Parsed edit for applicant {}", index);
        Ok(Command::Edit { index, descriptor })
    }
}

/// `None` when no skill prefix was given; an empty set for a lone empty `s/`.
fn parse_skills_for_edit(args: &ArgumentMultimap) -> ParseResult<Option<BTreeSet<Skill>>> {
    match args.all_values(&PREFIX_SKILL) {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse_skills(values).map(Some),
    }
}
