//! Canonical trimming for text read back from the store.
//!
//! Fixed-width columns come back padded with trailing spaces. Readers never
//! trim ad hoc; they run whole records through [`TrimStrings`].

use crate::questionnaire::{ChronicDetails, Questionnaire};

/// Trims surrounding whitespace, reusing the allocation when nothing changes.
pub fn normalize_text(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.map(normalize_text)
}

/// A record whose string fields can be canonically trimmed.
pub trait TrimStrings {
    fn trim_strings(self) -> Self;
}

impl TrimStrings for Questionnaire {
    fn trim_strings(self) -> Self {
        Self {
            id: self.id,
            name: normalize_text(self.name),
            age: self.age,
            gender: normalize_text(self.gender),
            health_condition: normalize_text(self.health_condition),
            symptoms_present: self.symptoms_present,
            symptoms_list: normalize_optional_text(self.symptoms_list),
        }
    }
}

impl TrimStrings for ChronicDetails {
    fn trim_strings(self) -> Self {
        Self {
            id: self.id,
            questionnaire_id: self.questionnaire_id,
            detail: normalize_optional_text(self.detail),
            medication: normalize_optional_text(self.medication),
        }
    }
}

impl<T: TrimStrings> TrimStrings for Option<T> {
    fn trim_strings(self) -> Self {
        self.map(TrimStrings::trim_strings)
    }
}

impl<T: TrimStrings> TrimStrings for Vec<T> {
    fn trim_strings(self) -> Self {
        self.into_iter().map(TrimStrings::trim_strings).collect()
    }
}
