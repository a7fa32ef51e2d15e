use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The health-condition value that links a questionnaire to a chronic-detail record.
pub const CHRONIC_ILLNESS: &str = "chronic_illness";

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Returns `true` if `health_condition` (after trimming) is the chronic sentinel.
pub fn is_chronic(health_condition: &str) -> bool {
    health_condition.trim() == CHRONIC_ILLNESS
}

/// A row from the `questionnaires` table.
///
/// Text columns may come back padded by the store; pass rows through
/// [`TrimStrings`](crate::TrimStrings) before handing them to callers.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Questionnaire {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub health_condition: String,
    pub symptoms_present: bool,
    pub symptoms_list: Option<String>,
}

impl Questionnaire {
    pub fn is_chronic(&self) -> bool {
        is_chronic(&self.health_condition)
    }
}

/// A row from the `chronic_details` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ChronicDetails {
    pub id: i32,
    pub questionnaire_id: i32,
    pub detail: Option<String>,
    pub medication: Option<String>,
}

/// The optional chronic-illness sub-object of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronicDetailsSubmission {
    pub detail: Option<String>,
    pub medication: Option<String>,
}

/// A questionnaire that has passed the validation schema.
///
/// Every string is already trimmed. This is the only shape the data-access
/// layer accepts for writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub health_condition: String,
    pub symptoms_present: bool,
    pub symptoms_list: Option<String>,
    #[serde(rename = "chronicDetails")]
    pub chronic_details: Option<ChronicDetailsSubmission>,
}

impl QuestionnaireSubmission {
    pub fn is_chronic(&self) -> bool {
        is_chronic(&self.health_condition)
    }

    /// The chronic-detail record to write alongside this questionnaire, if any.
    ///
    /// Only a chronic submission that actually carries `chronicDetails` produces one.
    pub fn chronic_details_to_persist(&self) -> Option<&ChronicDetailsSubmission> {
        if self.is_chronic() {
            self.chronic_details.as_ref()
        } else {
            None
        }
    }
}

/// Pagination and filtering for the questionnaire listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    /// Exact match on the trimmed `health_condition` column.
    pub health_condition: Option<String>,
}

impl ListQuery {
    /// Builds a query, replacing a zero page or page size with the default
    /// and dropping a blank filter.
    pub fn new(page: u32, page_size: u32, health_condition: Option<String>) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            health_condition: health_condition
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// `(page - 1) * page_size`
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)).saturating_mul(i64::from(self.page_size))
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(health_condition: &str, details: Option<ChronicDetailsSubmission>) -> QuestionnaireSubmission {
        QuestionnaireSubmission {
            name: "Jane Doe".to_string(),
            age: 28,
            gender: "Female".to_string(),
            health_condition: health_condition.to_string(),
            symptoms_present: true,
            symptoms_list: Some("Cough".to_string()),
            chronic_details: details,
        }
    }

    #[test]
    fn offset_is_derived_from_page_and_page_size() {
        let query = ListQuery::new(3, 25, None);
        assert_eq!(query.limit(), 25);
        assert_eq!(query.offset(), 50);
        assert_eq!(ListQuery::default().offset(), 0);
    }

    #[test]
    fn zero_page_values_fall_back_to_defaults() {
        let query = ListQuery::new(0, 0, Some("   ".to_string()));
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn filter_is_trimmed() {
        let query = ListQuery::new(1, 10, Some("  Healthy ".to_string()));
        assert_eq!(query.health_condition.as_deref(), Some("Healthy"));
    }

    #[test]
    fn chronic_details_are_only_persisted_for_the_sentinel() {
        let details = ChronicDetailsSubmission {
            detail: Some("Long-term asthma".to_string()),
            medication: Some("Steroid inhaler".to_string()),
        };

        let chronic = submission(CHRONIC_ILLNESS, Some(details.clone()));
        assert_eq!(chronic.chronic_details_to_persist(), Some(&details));

        let other = submission("Chronic illness", Some(details));
        assert!(other.chronic_details_to_persist().is_none());

        let without_details = submission(CHRONIC_ILLNESS, None);
        assert!(without_details.is_chronic());
        assert!(without_details.chronic_details_to_persist().is_none());
    }

    #[test]
    fn sentinel_comparison_ignores_padding() {
        assert!(is_chronic("chronic_illness      "));
        assert!(!is_chronic("Chronic_Illness"));
    }
}
