//! Queries against the `chronic_details` table.

use crate::error::DbError;
use core_types::{ChronicDetails, ChronicDetailsSubmission};
use sqlx::postgres::PgExecutor;

/// Writes the chronic-detail record for `questionnaire_id`.
///
/// Only called from the submit transaction, right after the parent row is inserted.
pub async fn insert_chronic_details<'e, E>(
    executor: E,
    questionnaire_id: i32,
    details: &ChronicDetailsSubmission,
) -> Result<ChronicDetails, DbError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, ChronicDetails>(
        r#"
        INSERT INTO chronic_details (questionnaire_id, detail, medication)
        VALUES ($1, $2, $3)
        RETURNING id, questionnaire_id, detail, medication
        "#,
    )
    .bind(questionnaire_id)
    .bind(details.detail.as_deref())
    .bind(details.medication.as_deref())
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Fetches the chronic-detail record of a questionnaire, if it has one.
pub async fn get_chronic_details<'e, E>(
    executor: E,
    questionnaire_id: i32,
) -> Result<Option<ChronicDetails>, DbError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, ChronicDetails>(
        "SELECT id, questionnaire_id, detail, medication FROM chronic_details WHERE questionnaire_id = $1 ORDER BY id LIMIT 1",
    )
    .bind(questionnaire_id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}
