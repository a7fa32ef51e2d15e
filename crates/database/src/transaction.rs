use crate::error::DbError;
use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

/// Runs `operation` inside a single database transaction.
///
/// The transaction commits only if the operation succeeds; any error rolls it
/// back, so multi-statement writes are all-or-nothing. The connection goes back
/// to the pool on every path, including a failed rollback (dropping an
/// uncommitted transaction also rolls it back).
///
/// ```ignore
/// let row = run_in_transaction(&pool, move |conn| {
///     async move { questionnaires::insert_questionnaire(&mut *conn, &submission).await }.boxed()
/// })
/// .await?;
/// ```
pub async fn run_in_transaction<T, F>(pool: &PgPool, operation: F) -> Result<T, DbError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, DbError>>,
{
    let mut tx = pool.begin().await?;

    let outcome = operation(&mut *tx).await;
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Transaction failed; rolling back.");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = ?rollback_err, "Rollback failed.");
            }
            Err(err)
        }
    }
}
