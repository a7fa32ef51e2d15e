//! The validation schema for inbound questionnaire payloads.
//!
//! Every field's requiredness is spelled out below. All violations are
//! collected in field order rather than stopping at the first one. Strings
//! are trimmed as part of validation. Unknown keys are ignored, and there are
//! no cross-field rules.

use crate::error::{IssueCode, ValidationErrors, ValidationIssue};
use crate::questionnaire::{ChronicDetailsSubmission, QuestionnaireSubmission};
use serde_json::{Map, Value};

const CHRONIC_DETAILS_KEY: &str = "chronicDetails";

/// Validates an untyped payload into a trimmed, strongly-typed submission.
pub fn validate_submission(payload: &Value) -> Result<QuestionnaireSubmission, ValidationErrors> {
    let Some(fields) = payload.as_object() else {
        return Err(ValidationErrors(vec![ValidationIssue::new(
            &[],
            IssueCode::InvalidType,
            format!("Expected object, received {}", type_name(Some(payload))),
        )]));
    };

    let mut schema = Schema::default();
    let name = schema.required_string(fields, &[], "name");
    let age = schema.required_age(fields, "age");
    let gender = schema.required_string(fields, &[], "gender");
    let health_condition = schema.required_string(fields, &[], "health_condition");
    let symptoms_present = schema.required_bool(fields, "symptoms_present");
    let symptoms_list = schema.optional_string(fields, &[], "symptoms_list");
    let chronic_details = schema.optional_chronic_details(fields);

    match (name, age, gender, health_condition, symptoms_present) {
        (Some(name), Some(age), Some(gender), Some(health_condition), Some(symptoms_present))
            if schema.issues.is_empty() =>
        {
            Ok(QuestionnaireSubmission {
                name,
                age,
                gender,
                health_condition,
                symptoms_present,
                symptoms_list,
                chronic_details,
            })
        }
        _ => Err(ValidationErrors(schema.issues)),
    }
}

#[derive(Default)]
struct Schema {
    issues: Vec<ValidationIssue>,
}

impl Schema {
    fn push(&mut self, parent: &[&str], field: &str, code: IssueCode, message: impl Into<String>) {
        let mut path = parent.to_vec();
        path.push(field);
        self.issues.push(ValidationIssue::new(&path, code, message));
    }

    fn invalid_type(&mut self, parent: &[&str], field: &str, expected: &str, received: Option<&Value>) {
        let message = match received {
            None => "Required".to_string(),
            Some(value) => format!("Expected {expected}, received {}", type_name(Some(value))),
        };
        self.push(parent, field, IssueCode::InvalidType, message);
    }

    fn required_string(&mut self, fields: &Map<String, Value>, parent: &[&str], key: &str) -> Option<String> {
        match fields.get(key) {
            Some(Value::String(value)) => Some(value.trim().to_string()),
            other => {
                self.invalid_type(parent, key, "string", other);
                None
            }
        }
    }

    fn optional_string(&mut self, fields: &Map<String, Value>, parent: &[&str], key: &str) -> Option<String> {
        match fields.get(key) {
            None => None,
            Some(Value::String(value)) => Some(value.trim().to_string()),
            other => {
                self.invalid_type(parent, key, "string", other);
                None
            }
        }
    }

    fn required_bool(&mut self, fields: &Map<String, Value>, key: &str) -> Option<bool> {
        match fields.get(key) {
            Some(Value::Bool(value)) => Some(*value),
            other => {
                self.invalid_type(&[], key, "boolean", other);
                None
            }
        }
    }

    /// A non-negative integer that fits the store's 32-bit column.
    fn required_age(&mut self, fields: &Map<String, Value>, key: &str) -> Option<i32> {
        let number = match fields.get(key) {
            Some(Value::Number(number)) => number,
            other => {
                self.invalid_type(&[], key, "number", other);
                return None;
            }
        };

        let whole = if let Some(value) = number.as_i64() {
            Some(value)
        } else if number.as_u64().is_some() {
            Some(i64::MAX)
        } else {
            number
                .as_f64()
                .filter(|value| value.is_finite() && value.fract() == 0.0)
                .map(|value| value.clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        };

        let Some(value) = whole else {
            self.push(&[], key, IssueCode::InvalidType, "Expected integer, received float");
            // The range checks still apply to a fractional number.
            if number.as_f64().is_some_and(|value| value < 0.0) {
                self.push(&[], key, IssueCode::TooSmall, "Number must be greater than or equal to 0");
            }
            return None;
        };

        if value < 0 {
            self.push(&[], key, IssueCode::TooSmall, "Number must be greater than or equal to 0");
            return None;
        }

        match i32::try_from(value) {
            Ok(age) => Some(age),
            Err(_) => {
                self.push(
                    &[],
                    key,
                    IssueCode::TooBig,
                    format!("Number must be less than or equal to {}", i32::MAX),
                );
                None
            }
        }
    }

    fn optional_chronic_details(&mut self, fields: &Map<String, Value>) -> Option<ChronicDetailsSubmission> {
        match fields.get(CHRONIC_DETAILS_KEY) {
            None => None,
            Some(Value::Object(details)) => {
                let parent = [CHRONIC_DETAILS_KEY];
                let detail = self.optional_string(details, &parent, "detail");
                let medication = self.optional_string(details, &parent, "medication");
                Some(ChronicDetailsSubmission { detail, medication })
            }
            other => {
                self.invalid_type(&[], CHRONIC_DETAILS_KEY, "object", other);
                None
            }
        }
    }
}

fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
