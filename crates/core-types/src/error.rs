use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Machine-readable classification of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// The field is missing or holds a value of the wrong JSON type.
    InvalidType,
    /// A number is below its allowed minimum.
    TooSmall,
    /// A number is above its allowed maximum.
    TooBig,
}

/// One offending field in an inbound payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Keys leading from the payload root to the field, e.g. `["chronicDetails", "detail"]`.
    pub path: Vec<String>,
    pub message: String,
    pub code: IssueCode,
}

impl ValidationIssue {
    pub fn new(path: &[&str], code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|segment| segment.to_string()).collect(),
            message: message.into(),
            code,
        }
    }

    /// Returns `true` if any segment of the path names `field`.
    pub fn concerns(&self, field: &str) -> bool {
        self.path.iter().any(|segment| segment == field)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// Every violation found in a payload, in the order the schema checks fields.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Questionnaire failed validation with {} issue(s)", .0.len())]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
