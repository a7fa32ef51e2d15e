//! Queries against the `questionnaires` table.
//!
//! Functions take any Postgres executor so they run the same way against the
//! pool or inside a transaction.

use crate::error::DbError;
use core_types::{ListQuery, Questionnaire, QuestionnaireSubmission};
use sqlx::postgres::{PgExecutor, Postgres};
use sqlx::QueryBuilder;

const SELECT_QUESTIONNAIRES: &str = "SELECT id, name, age, gender, health_condition, symptoms_present, symptoms_list FROM questionnaires";

/// Inserts a validated questionnaire and returns the stored row, including its generated id.
pub async fn insert_questionnaire<'e, E>(
    executor: E,
    submission: &QuestionnaireSubmission,
) -> Result<Questionnaire, DbError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, Questionnaire>(
        r#"
        INSERT INTO questionnaires (name, age, gender, health_condition, symptoms_present, symptoms_list)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, age, gender, health_condition, symptoms_present, symptoms_list
        "#,
    )
    .bind(&submission.name)
    .bind(submission.age)
    .bind(&submission.gender)
    .bind(&submission.health_condition)
    .bind(submission.symptoms_present)
    .bind(submission.symptoms_list.as_deref())
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Builds the paginated listing query.
///
/// Rows are ordered by id so consecutive pages never overlap.
pub fn list_query(query: &ListQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_QUESTIONNAIRES);

    if let Some(health_condition) = &query.health_condition {
        builder
            .push(" WHERE btrim(health_condition) = ")
            .push_bind(health_condition.as_str());
    }

    builder
        .push(" ORDER BY id ASC LIMIT ")
        .push_bind(query.limit())
        .push(" OFFSET ")
        .push_bind(query.offset());

    builder
}

/// Fetches one page of questionnaires, optionally filtered by health condition.
///
/// Rows are returned as stored; callers are responsible for trimming.
pub async fn list_questionnaires<'e, E>(
    executor: E,
    query: &ListQuery,
) -> Result<Vec<Questionnaire>, DbError>
where
    E: PgExecutor<'e>,
{
    let mut builder = list_query(query);
    let rows = builder
        .build_query_as::<Questionnaire>()
        .fetch_all(executor)
        .await?;
    Ok(rows)
}
