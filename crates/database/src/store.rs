use crate::error::DbError;
use async_trait::async_trait;
use core_types::{ChronicDetails, ListQuery, Questionnaire, QuestionnaireSubmission};

/// The data-access contract the HTTP layer is written against.
///
/// `DbRepository` is the PostgreSQL implementation; tests substitute an
/// in-memory one.
#[async_trait]
pub trait QuestionnaireStore: Send + Sync {
    /// Persists a validated questionnaire.
    ///
    /// When the health condition is the chronic sentinel and chronic details were
    /// supplied, the linked chronic-detail record is written in the same atomic
    /// operation. Returns the stored questionnaire row.
    async fn submit_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> Result<Questionnaire, DbError>;

    /// Fetches one page of questionnaires, ordered by id.
    async fn list_questionnaires(&self, query: &ListQuery) -> Result<Vec<Questionnaire>, DbError>;

    /// Fetches the chronic-detail record for a questionnaire, if any.
    async fn get_chronic_details(
        &self,
        questionnaire_id: i32,
    ) -> Result<Option<ChronicDetails>, DbError>;
}
