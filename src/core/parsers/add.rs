use crate::core::field_parser::{parse_required, parse_skills, parse_status};
use crate::core::parsers::{require_no_preamble, require_prefixes, CommandParser};
use crate::core::prefix::{
    Prefix, APPLICANT_PREFIXES, PREFIX_COURSE, PREFIX_EMAIL, PREFIX_GRADE,
    PREFIX_GRADUATION_YEAR_MONTH, PREFIX_INSTITUTION, PREFIX_NAME, PREFIX_PHONE, PREFIX_SKILL,
    PREFIX_STATUS,
};
use crate::core::tokenizer::tokenize;
use crate::domain::command::Command;
use crate::domain::model::Applicant;
use crate::utils::error::ParseResult;

pub const USAGE: &str = "add: Adds an applicant.\n\
Parameters: n/NAME p/PHONE e/EMAIL g/GRADE i/INSTITUTION c/COURSE y/YYYY-MM [st/STATUS] [s/SKILL]...\n\
Example: add n/Alice p/98765432 e/alice@ex.com g/85 i/NUS c/CS y/2025-05 s/Rust s/SQL";

const MANDATORY_PREFIXES: [Prefix; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_GRADE,
    PREFIX_INSTITUTION,
    PREFIX_COURSE,
    PREFIX_GRADUATION_YEAR_MONTH,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommandParser;

impl CommandParser for AddCommandParser {
    fn keyword(&self) -> &'static str {
        "add"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn parse(&self, args: &str) -> ParseResult<Command> {
        let args = tokenize(args, &APPLICANT_PREFIXES);
        require_prefixes(&args, &MANDATORY_PREFIXES, USAGE)?;
        require_no_preamble(&args, USAGE)?;

        let applicant = Applicant::new(
            parse_required(&args, &PREFIX_NAME, USAGE)?,
            parse_required(&args, &PREFIX_PHONE, USAGE)?,
            parse_required(&args, &PREFIX_EMAIL, USAGE)?,
            parse_required(&args, &PREFIX_GRADE, USAGE)?,
            parse_required(&args, &PREFIX_INSTITUTION, USAGE)?,
            parse_required(&args, &PREFIX_COURSE, USAGE)?,
            parse_required(&args, &PREFIX_GRADUATION_YEAR_MONTH, USAGE)?,
            parse_skills(args.all_values(&PREFIX_SKILL))?,
        );

        // 未指定狀態時保留預設的 Applied
        let applicant = match args.value(&PREFIX_STATUS) {
            None => applicant,
            Some(raw) => applicant.with_status(parse_status(raw)?),
        };

        tracing::debug!(
            "Parsed add for {} with {} skill(s)",
            applicant.name(),
            applicant.skills().len()
        );
        Ok(Command::Add { applicant })
    }
}
