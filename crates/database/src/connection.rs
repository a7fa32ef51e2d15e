use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Builds connect options from either the full URL or the individual parts.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, DbError> {
    match &settings.url {
        Some(url) => PgConnectOptions::from_str(url)
            .map_err(|e| DbError::ConnectionConfigError(e.to_string())),
        None => Ok(PgConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.database)),
    }
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is bounded by `max_connections` and shared by every request;
/// a request that cannot get a connection within `acquire_timeout_secs` fails
/// with a store error instead of waiting forever.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let options = connect_options(settings)?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "Database connection pool established."
    );
    Ok(pool)
}
