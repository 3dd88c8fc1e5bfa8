//! Raw text → typed field value conversions used by every command parser.

use crate::domain::command::Index;
use crate::domain::fields::{
    ApplicationStatus, Course, Email, FieldValue, Grade, GraduationYearMonth, Institution, Name,
    Phone, Skill,
};
use crate::core::prefix::Prefix;
use crate::core::tokenizer::ArgumentMultimap;
use crate::utils::error::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// Trims `raw` and converts it into `T`, reporting the field on failure.
pub fn parse_field<T: FieldValue>(raw: &str) -> ParseResult<T> {
    T::try_new(raw.trim())
}

pub fn parse_name(raw: &str) -> ParseResult<Name> {
    parse_field(raw)
}

pub fn parse_phone(raw: &str) -> ParseResult<Phone> {
    parse_field(raw)
}

pub fn parse_email(raw: &str) -> ParseResult<Email> {
    parse_field(raw)
}

pub fn parse_grade(raw: &str) -> ParseResult<Grade> {
    parse_field(raw)
}

pub fn parse_institution(raw: &str) -> ParseResult<Institution> {
    parse_field(raw)
}

pub fn parse_course(raw: &str) -> ParseResult<Course> {
    parse_field(raw)
}

pub fn parse_graduation_year_month(raw: &str) -> ParseResult<GraduationYearMonth> {
    parse_field(raw)
}

pub fn parse_status(raw: &str) -> ParseResult<ApplicationStatus> {
    parse_field(raw)
}

pub fn parse_skill(raw: &str) -> ParseResult<Skill> {
    parse_field(raw)
}

/// Converts every raw skill; repeated skills collapse into one.
pub fn parse_skills<I, S>(raws: I) -> ParseResult<BTreeSet<Skill>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter().map(|raw| parse_skill(raw.as_ref())).collect()
}

/// Parses a one-based list index. Leading signs and zero are rejected.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    let invalid = || ParseError::InvalidIndex {
        raw: trimmed.to_string(),
    };

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(invalid)
}

/// Converts the first value of a prefix that must be present.
///
/// Callers check presence beforehand; reaching the fallback means the
/// prefix list and the parser disagree.
pub fn parse_required<T: FieldValue>(
    args: &ArgumentMultimap,
    prefix: &Prefix,
    usage: &'static str,
) -> ParseResult<T> {
    let raw = args
        .value(prefix)
        .ok_or(ParseError::MissingMandatoryField {
            prefix: *prefix,
            usage,
        })?;
    parse_field(raw)
}

/// Converts the first value of an optional prefix, if it was supplied.
pub fn parse_optional<T: FieldValue>(
    args: &ArgumentMultimap,
    prefix: &Prefix,
) -> ParseResult<Option<T>> {
    args.value(prefix).map(parse_field).transpose()
}
