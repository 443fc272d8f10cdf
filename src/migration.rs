//! Apply table DDL to the database. Every statement is `IF NOT EXISTS`, so this runs on
//! each startup.

use crate::error::AppError;
use crate::schema::{COUNTERS_DDL, GREETINGS_DDL};
use sqlx::PgPool;

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in [COUNTERS_DDL, GREETINGS_DDL] {
        tracing::debug!(sql = %ddl.trim(), "migration");
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("migrations applied");
    Ok(())
}
