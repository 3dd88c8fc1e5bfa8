use crate::domain::fields::{
    ApplicationStatus, Course, Email, Grade, GraduationYearMonth, Institution, Name, Phone, Skill,
};
use crate::domain::model::Applicant;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;

/// One-based position of an applicant in the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully validated request, ready to hand to a
/// [`CommandExecutor`](crate::domain::ports::CommandExecutor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Add {
        applicant: Applicant,
    },
    Edit {
        index: Index,
        descriptor: EditApplicantDescriptor,
    },
    Delete {
        index: Index,
    },
    Find {
        keywords: NameKeywords,
    },
    Filter {
        criteria: FilterCriteria,
    },
    Sort {
        key: SortKey,
        order: SortOrder,
    },
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Edit { .. } => "edit",
            Command::Delete { .. } => "delete",
            Command::Find { .. } => "find",
            Command::Filter { .. } => "filter",
            Command::Sort { .. } => "sort",
            Command::List => "list",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

/// Replacement values for an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditApplicantDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year_month: Option<GraduationYearMonth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    /// `Some(empty set)` clears every skill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<BTreeSet<Skill>>,
}

impl EditApplicantDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.grade.is_some()
            || self.institution.is_some()
            || self.course.is_some()
            || self.graduation_year_month.is_some()
            || self.status.is_some()
            || self.skills.is_some()
    }

    /// Builds the edited copy of `applicant`.
    pub fn apply_to(&self, applicant: &Applicant) -> Applicant {
        Applicant::new(
            self.name.clone().unwrap_or_else(|| applicant.name().clone()),
            self.phone.clone().unwrap_or_else(|| applicant.phone().clone()),
            self.email.clone().unwrap_or_else(|| applicant.email().clone()),
            self.grade.unwrap_or(applicant.grade()),
            self.institution
                .clone()
                .unwrap_or_else(|| applicant.institution().clone()),
            self.course.clone().unwrap_or_else(|| applicant.course().clone()),
            self.graduation_year_month
                .unwrap_or(applicant.graduation_year_month()),
            self.skills
                .clone()
                .unwrap_or_else(|| applicant.skills().clone()),
        )
        .with_status(self.status.unwrap_or(applicant.status()))
    }
}

/// Whole-word, case-insensitive match against the applicant's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameKeywords(Vec<String>);

impl NameKeywords {
    /// Returns `None` when `keywords` is empty.
    pub fn new(keywords: Vec<String>) -> Option<Self> {
        if keywords.is_empty() {
            None
        } else {
            Some(Self(keywords))
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.0
    }

    pub fn matches(&self, applicant: &Applicant) -> bool {
        applicant.name().as_str().split_whitespace().any(|word| {
            self.0
                .iter()
                .any(|keyword| keyword.eq_ignore_ascii_case(word))
        })
    }
}

/// Conditions an applicant must all satisfy to stay in a filtered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub skills: BTreeSet<Skill>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.course.is_none()
            && self.institution.is_none()
            && self.skills.is_empty()
    }

    pub fn matches(&self, applicant: &Applicant) -> bool {
        let status_ok = self.status.map_or(true, |s| applicant.status() == s);
        let course_ok = self.course.as_ref().map_or(true, |c| {
            c.as_str().eq_ignore_ascii_case(applicant.course().as_str())
        });
        let institution_ok = self.institution.as_ref().map_or(true, |i| {
            i.as_str()
                .eq_ignore_ascii_case(applicant.institution().as_str())
        });
        let skills_ok = self.skills.is_subset(applicant.skills());

        status_ok && course_ok && institution_ok && skills_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Grade,
    Graduation,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Grade, SortKey::Graduation];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Grade => "grade",
            SortKey::Graduation => "graduation",
        }
    }

    /// Ascending comparison of two applicants on this key.
    pub fn compare(&self, a: &Applicant, b: &Applicant) -> Ordering {
        match self {
            SortKey::Name => a
                .name()
                .as_str()
                .to_lowercase()
                .cmp(&b.name().as_str().to_lowercase()),
            SortKey::Grade => a.grade().cmp(&b.grade()),
            SortKey::Graduation => a.graduation_year_month().cmp(&b.graduation_year_month()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::FieldValue;
    use crate::domain::model::test_support::alice;

    #[test]
    fn test_index_conversions() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.one_based(), 3);
        assert_eq!(index.zero_based(), 2);
        assert!(Index::from_one_based(0).is_none());
    }

    #[test]
    fn test_empty_descriptor_edits_nothing() {
        let descriptor = EditApplicantDescriptor::default();
        assert!(!descriptor.is_any_field_edited());
        assert_eq!(descriptor.apply_to(&alice(&["Rust"])), alice(&["Rust"]));
    }

    #[test]
    fn test_descriptor_replaces_only_given_fields() {
        let descriptor = EditApplicantDescriptor {
            phone: Some(Phone::try_new("91234567").unwrap()),
            status: Some(ApplicationStatus::Interviewing),
            skills: Some(BTreeSet::new()),
            ..Default::default()
        };
        let edited = descriptor.apply_to(&alice(&["Rust"]));
        assert_eq!(edited.phone().as_str(), "91234567");
        assert_eq!(edited.status(), ApplicationStatus::Interviewing);
        assert!(edited.skills().is_empty());
        assert_eq!(edited.name().as_str(), "Alice");
        assert_eq!(edited.email().as_str(), "alice@ex.com");
    }

    #[test]
    fn test_name_keywords_match_whole_words() {
        let keywords = NameKeywords::new(vec!["alice".to_string()]).unwrap();
        assert!(keywords.matches(&alice(&[])));

        let partial = NameKeywords::new(vec!["Ali".to_string()]).unwrap();
        assert!(!partial.matches(&alice(&[])));
        assert!(NameKeywords::new(Vec::new()).is_none());
    }

    #[test]
    fn test_filter_criteria_requires_all_conditions() {
        let applicant = alice(&["Rust", "Go"]);

        let criteria = FilterCriteria {
            course: Some(Course::try_new("cs").unwrap()),
            skills: [Skill::try_new("Rust").unwrap()].into_iter().collect(),
            ..Default::default()
        };
        assert!(criteria.matches(&applicant));

        let stricter = FilterCriteria {
            status: Some(ApplicationStatus::Offered),
            ..criteria.clone()
        };
        assert!(!stricter.matches(&applicant));
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn test_sort_key_compare() {
        let a = alice(&[]);
        let b = EditApplicantDescriptor {
            grade: Some(Grade::try_new("90").unwrap()),
            name: Some(Name::try_new("bob").unwrap()),
            ..Default::default()
        }
        .apply_to(&a);
        assert_eq!(SortKey::Grade.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Graduation.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_command_serializes_with_tag() {
        let json = serde_json::to_value(Command::Delete {
            index: Index::from_one_based(2).unwrap(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"command": "delete", "index": 2}));
        assert_eq!(
            serde_json::to_value(Command::List).unwrap(),
            serde_json::json!({"command": "list"})
        );
    }
}
