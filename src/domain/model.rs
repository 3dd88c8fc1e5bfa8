use crate::domain::fields::{
    ApplicationStatus, Course, Email, Grade, GraduationYearMonth, Institution, Name, Phone, Skill,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A job applicant. Immutable once built; edits produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    name: Name,
    phone: Phone,
    email: Email,
    grade: Grade,
    institution: Institution,
    course: Course,
    graduation_year_month: GraduationYearMonth,
    #[serde(default)]
    status: ApplicationStatus,
    #[serde(default)]
    skills: BTreeSet<Skill>,
}

impl Applicant {
    /// Creates an applicant in the initial [`ApplicationStatus::Applied`] state.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        grade: Grade,
        institution: Institution,
        course: Course,
        graduation_year_month: GraduationYearMonth,
        skills: BTreeSet<Skill>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            grade,
            institution,
            course,
            graduation_year_month,
            status: ApplicationStatus::default(),
            skills,
        }
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn institution(&self) -> &Institution {
        &self.institution
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn graduation_year_month(&self) -> GraduationYearMonth {
        self.graduation_year_month
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn skills(&self) -> &BTreeSet<Skill> {
        &self.skills
    }

    /// Two applicants are the same person when their names match, ignoring case.
    pub fn is_same_applicant(&self, other: &Applicant) -> bool {
        self.name.as_str().eq_ignore_ascii_case(other.name.as_str())
    }
}

impl fmt::Display for Applicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Grade: {}; Institution: {}; Course: {}; Graduation: {}; Status: {}; Skills: ",
            self.name,
            self.phone,
            self.email,
            self.grade,
            self.institution,
            self.course,
            self.graduation_year_month,
            self.status
        )?;
        if self.skills.is_empty() {
            return f.write_str("-");
        }
        for skill in &self.skills {
            write!(f, "[{}]", skill)?;
        }
        Ok(())
    }
}
