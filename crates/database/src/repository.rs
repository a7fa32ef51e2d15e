use crate::chronic_details;
use crate::error::DbError;
use crate::questionnaires;
use crate::store::QuestionnaireStore;
use crate::transaction::run_in_transaction;
use async_trait::async_trait;
use core_types::{ChronicDetails, ListQuery, Questionnaire, QuestionnaireSubmission};
use futures::FutureExt;
use sqlx::postgres::PgPool;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionnaireStore for DbRepository {
    async fn submit_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> Result<Questionnaire, DbError> {
        let submission = submission.clone();

        let questionnaire = run_in_transaction(&self.pool, move |conn| {
            async move {
                let questionnaire =
                    questionnaires::insert_questionnaire(&mut *conn, &submission).await?;

                if let Some(details) = submission.chronic_details_to_persist() {
                    chronic_details::insert_chronic_details(&mut *conn, questionnaire.id, details)
                        .await?;
                }

                Ok(questionnaire)
            }
            .boxed()
        })
        .await?;

        tracing::debug!(questionnaire_id = questionnaire.id, "Questionnaire stored.");
        Ok(questionnaire)
    }

    async fn list_questionnaires(&self, query: &ListQuery) -> Result<Vec<Questionnaire>, DbError> {
        questionnaires::list_questionnaires(&self.pool, query).await
    }

    async fn get_chronic_details(
        &self,
        questionnaire_id: i32,
    ) -> Result<Option<ChronicDetails>, DbError> {
        chronic_details::get_chronic_details(&self.pool, questionnaire_id).await
    }
}
