use std::fmt;
use std::hash::{Hash, Hasher};

/// Marker that opens one field slot in command text, e.g. `n/` for the name.
///
/// Two prefixes are the same prefix when their markers match; the field name
/// is only carried along for error messages.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Prefix {
    marker: &'static str,
    field: &'static str,
}

impl Prefix {
    pub const fn new(marker: &'static str, field: &'static str) -> Self {
        Self { marker, field }
    }

    pub fn marker(&self) -> &'static str {
        self.marker
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl PartialEq for Prefix {
    fn eq(&self, other: &Self) -> bool {
        self.marker == other.marker
    }
}

impl Hash for Prefix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.marker.hash(state);
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/", "name");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/", "phone");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/", "email");
pub const PREFIX_GRADE: Prefix = Prefix::new("g/", "grade");
pub const PREFIX_INSTITUTION: Prefix = Prefix::new("i/", "institution");
pub const PREFIX_COURSE: Prefix = Prefix::new("c/", "course");
pub const PREFIX_GRADUATION_YEAR_MONTH: Prefix = Prefix::new("y/", "graduation year-month");
pub const PREFIX_STATUS: Prefix = Prefix::new("st/", "status");
pub const PREFIX_SKILL: Prefix = Prefix::new("s/", "skill");

/// Every field marker an applicant can carry, in the order the usage lines list them.
pub const APPLICANT_PREFIXES: [Prefix; 9] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_GRADE,
    PREFIX_INSTITUTION,
    PREFIX_COURSE,
    PREFIX_GRADUATION_YEAR_MONTH,
    PREFIX_STATUS,
    PREFIX_SKILL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_uses_marker_only() {
        assert_eq!(PREFIX_NAME, Prefix::new("n/", "something else"));
        assert_ne!(PREFIX_SKILL, PREFIX_STATUS);
    }

    #[test]
    fn test_registry_markers_are_distinct() {
        let markers: HashSet<_> = APPLICANT_PREFIXES.iter().map(|p| p.marker()).collect();
        assert_eq!(markers.len(), APPLICANT_PREFIXES.len());
    }
}
