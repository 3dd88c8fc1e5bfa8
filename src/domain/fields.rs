//! Validated field values of an applicant.
//!
//! Every type here can only hold a value that passed its format check: the
//! only ways in are [`FieldValue::try_new`] and `TryFrom<String>` (which serde
//! uses as well), and both run the same predicate.

use crate::utils::error::{ParseError, ParseResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Common constructor shape shared by every applicant field.
pub trait FieldValue: Sized {
    /// Human-readable field name used in error messages.
    const FIELD: &'static str;

    /// Builds the value from already-trimmed text, or explains why it is invalid.
    fn try_new(value: &str) -> ParseResult<Self>;
}

pub const MAX_TEXT_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_SKILL_LENGTH: usize = 30;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("name pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,15}$").expect("phone pattern"));
static EMAIL_LOCAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9+_.\-]*[A-Za-z0-9])?$").expect("email local pattern")
});
static EMAIL_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("email domain pattern")
});
static YEAR_MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("year-month pattern"));
static SKILL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+#.\-]+$").expect("skill pattern"));

fn ensure_not_blank(field: &'static str, value: &str) -> ParseResult<()> {
    if value.trim().is_empty() {
        return Err(ParseError::invalid_field(
            field,
            value,
            format!("{} must not be blank", field),
        ));
    }
    Ok(())
}

fn ensure_max_length(field: &'static str, value: &str, max: usize) -> ParseResult<()> {
    if value.chars().count() > max {
        return Err(ParseError::invalid_field(
            field,
            value,
            format!("{} must be at most {} characters long", field, max),
        ));
    }
    Ok(())
}

/// Implements the string plumbing shared by the text-backed field types.
macro_rules! text_field {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ParseError;

            fn try_from(value: String) -> ParseResult<Self> {
                <$ty as FieldValue>::try_new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.0
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl FieldValue for Name {
    const FIELD: &'static str = "name";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_not_blank(Self::FIELD, value)?;
        ensure_max_length(Self::FIELD, value, MAX_TEXT_LENGTH)?;
        if !NAME_RE.is_match(value) {
            return Err(ParseError::invalid_field(
                Self::FIELD,
                value,
                "name should only contain letters, digits and spaces, and start with a letter or digit",
            ));
        }
        Ok(Self(value.to_string()))
    }
}

text_field!(Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl FieldValue for Phone {
    const FIELD: &'static str = "phone";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_not_blank(Self::FIELD, value)?;
        if !PHONE_RE.is_match(value) {
            return Err(ParseError::invalid_field(
                Self::FIELD,
                value,
                "phone number should only contain digits, and be 3 to 15 digits long",
            ));
        }
        Ok(Self(value.to_string()))
    }
}

text_field!(Phone);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl FieldValue for Email {
    const FIELD: &'static str = "email";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_not_blank(Self::FIELD, value)?;
        ensure_max_length(Self::FIELD, value, MAX_EMAIL_LENGTH)?;

        let Some((local, domain)) = value.split_once('@') else {
            return Err(ParseError::invalid_field(
                Self::FIELD,
                value,
                "email should be of the format local-part@domain",
            ));
        };
        if !EMAIL_LOCAL_RE.is_match(local) {
            return Err(ParseError::invalid_field(
                Self::FIELD,
                value,
                "local-part should only contain letters, digits and + _ . -, and must not start or end with a special character",
            ));
        }
        // domain 部分不可再含有 '@'
        if !EMAIL_DOMAIN_RE.is_match(domain) {
            return Err(ParseError::invalid_field(
                Self::FIELD,
                value,
                "domain should be labels of letters and digits separated by periods, ending with a label at least 2 characters long",
            ));
        }
        Ok(Self(value.to_string()))
    }
}

text_field!(Email);

/// Whole-number grade from 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MAX: u8 = 100;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FieldValue for Grade {
    const FIELD: &'static str = "grade";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_not_blank(Self::FIELD, value)?;
        value
            .parse::<u8>()
            .ok()
            .filter(|grade| *grade <= Self::MAX)
            .map(Self)
            .ok_or_else(|| {
                ParseError::invalid_field(
                    Self::FIELD,
                    value,
                    format!("grade should be a whole number from 0 to {}", Self::MAX),
                )
            })
    }
}

impl TryFrom<u8> for Grade {
    type Error = ParseError;

    fn try_from(value: u8) -> ParseResult<Self> {
        Self::try_new(&value.to_string())
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn ensure_printable_text(field: &'static str, value: &str) -> ParseResult<()> {
    ensure_not_blank(field, value)?;
    ensure_max_length(field, value, MAX_TEXT_LENGTH)?;
    if value.chars().any(char::is_control) {
        return Err(ParseError::invalid_field(
            field,
            value,
            format!("{} must not contain control characters", field),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Institution(String);

impl FieldValue for Institution {
    const FIELD: &'static str = "institution";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_printable_text(Self::FIELD, value)?;
        Ok(Self(value.to_string()))
    }
}

text_field!(Institution);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Course(String);

impl FieldValue for Course {
    const FIELD: &'static str = "course";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_printable_text(Self::FIELD, value)?;
        Ok(Self(value.to_string()))
    }
}

text_field!(Course);

/// Expected graduation month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraduationYearMonth(NaiveDate);

impl GraduationYearMonth {
    pub const MIN_YEAR: i32 = 1900;
    pub const MAX_YEAR: i32 = 2100;

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl FieldValue for GraduationYearMonth {
    const FIELD: &'static str = "graduation year-month";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_not_blank(Self::FIELD, value)?;
        let invalid = |reason: &str| ParseError::invalid_field(Self::FIELD, value, reason);

        let caps = YEAR_MONTH_RE
            .captures(value)
            .ok_or_else(|| invalid("graduation year-month should be of the format YYYY-MM"))?;
        let year: i32 = caps[1]
            .parse()
            .map_err(|_| invalid("year should be four digits"))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| invalid("month should be two digits"))?;

        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(invalid(&format!(
                "year should be between {} and {}",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| invalid("month should be between 01 and 12"))
    }
}

impl fmt::Display for GraduationYearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl TryFrom<String> for GraduationYearMonth {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        Self::try_new(&value)
    }
}

impl From<GraduationYearMonth> for String {
    fn from(value: GraduationYearMonth) -> String {
        value.to_string()
    }
}

/// Where an applicant stands in the hiring pipeline.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Screening,
    Interviewing,
    Offered,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Offered,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Screening => "Screening",
            ApplicationStatus::Interviewing => "Interviewing",
            ApplicationStatus::Offered => "Offered",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl FieldValue for ApplicationStatus {
    const FIELD: &'static str = "status";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_not_blank(Self::FIELD, value)?;
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                ParseError::invalid_field(
                    Self::FIELD,
                    value,
                    format!("status should be one of: {}", allowed.join(", ")),
                )
            })
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        Self::try_new(&value)
    }
}

impl From<ApplicationStatus> for String {
    fn from(value: ApplicationStatus) -> String {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Skill(String);

impl FieldValue for Skill {
    const FIELD: &'static str = "skill";

    fn try_new(value: &str) -> ParseResult<Self> {
        ensure_not_blank(Self::FIELD, value)?;
        ensure_max_length(Self::FIELD, value, MAX_SKILL_LENGTH)?;
        if !SKILL_RE.is_match(value) {
            return Err(ParseError::invalid_field(
                Self::FIELD,
                value,
                "skill should be a single word of letters, digits and + # . -",
            ));
        }
        Ok(Self(value.to_string()))
    }
}

text_field!(Skill);
