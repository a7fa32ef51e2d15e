//! # Healthcare Core Types
//!
//! The domain vocabulary shared by every other crate in the workspace: the
//! persisted questionnaire and chronic-detail records, the validated submission
//! that is the only shape the data-access layer accepts, and the schema that
//! turns an untyped JSON payload into that submission.
//!
//! ## Public API
//!
//! - `Questionnaire` / `ChronicDetails`: rows as read back from the store.
//! - `QuestionnaireSubmission`: a validated, trimmed inbound questionnaire.
//! - `ListQuery`: page, page size and optional health-condition filter.
//! - `validate_submission`: the validation schema.
//! - `normalize_text`: the one trimming function every reader goes through.

pub mod error;
pub mod normalize;
pub mod questionnaire;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use error::{IssueCode, ValidationErrors, ValidationIssue};
pub use normalize::{normalize_optional_text, normalize_text, TrimStrings};
pub use questionnaire::{
    is_chronic, ChronicDetails, ChronicDetailsSubmission, ListQuery, Questionnaire,
    QuestionnaireSubmission, CHRONIC_ILLNESS, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
pub use validation::validate_submission;
