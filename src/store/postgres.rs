//! PostgreSQL adapter.

use super::{step, Storage};
use crate::error::AppError;
use crate::schema::{Counter, Greeting, InsertGreeting, DEFAULT_COUNTER_NAME};
use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn set_counter_value(&self, id: i32, value: i32) -> Result<Counter, AppError> {
        let sql = "UPDATE counters SET value = $1 WHERE id = $2 RETURNING id, name, value";
        tracing::debug!(sql = %sql, id, value, "query");
        let row = sqlx::query_as::<_, Counter>(sql)
            .bind(value)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn get_counter(&self) -> Result<Counter, AppError> {
        let sql = "SELECT id, name, value FROM counters ORDER BY id LIMIT 1";
        tracing::debug!(sql = %sql, "query");
        if let Some(row) = sqlx::query_as::<_, Counter>(sql)
            .fetch_optional(&self.pool)
            .await?
        {
            return Ok(row);
        }
        let sql = "INSERT INTO counters (name, value) VALUES ($1, 0) RETURNING id, name, value";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Counter>(sql)
            .bind(DEFAULT_COUNTER_NAME)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn increment_counter(&self) -> Result<Counter, AppError> {
        let current = self.get_counter().await?;
        self.set_counter_value(current.id, step(current.value, 1)?).await
    }

    async fn decrement_counter(&self) -> Result<Counter, AppError> {
        let current = self.get_counter().await?;
        self.set_counter_value(current.id, step(current.value, -1)?).await
    }

    async fn reset_counter(&self) -> Result<Counter, AppError> {
        let current = self.get_counter().await?;
        self.set_counter_value(current.id, 0).await
    }

    async fn get_greetings(&self) -> Result<Vec<Greeting>, AppError> {
        let sql = "SELECT id, name, message FROM greetings ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Greeting>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_greeting(&self, input: &InsertGreeting) -> Result<Greeting, AppError> {
        let sql =
            "INSERT INTO greetings (name, message) VALUES ($1, $2) RETURNING id, name, message";
        tracing::debug!(sql = %sql, name = %input.name, "query");
        let row = sqlx::query_as::<_, Greeting>(sql)
            .bind(&input.name)
            .bind(&input.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_greeting(&self, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM greetings WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Connect to the `postgres` admin database on the same server and create the target
/// database when it does not exist yet.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| AppError::Internal("DATABASE_URL: no database path".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_admin_url_and_database_name() {
        let (admin, db) =
            parse_db_name_from_url("postgres://user:pw@localhost:5432/greetboard?sslmode=disable")
                .unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(db, "greetboard");
    }

    #[test]
    fn url_without_path_is_rejected() {
        assert!(parse_db_name_from_url("postgres://localhost").is_err());
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident(r#"we"ird"#), r#""we""ird""#);
    }
}
