use crate::error::{AppError, AppResult};
use crate::models::UrlMapping;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, SqlitePool,
};
use std::str::FromStr;

/// Database repository
#[derive(Clone)]
pub struct Repository {
    pub(crate) pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with a connection pool.
    ///
    /// The database file is created if it does not exist, so a fresh
    /// deployment works without any manual setup.
    pub async fn new(database_url: &str, max_connections: u32) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::Configuration(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations (idempotent)
    pub async fn run_migrations(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Insert a new URL mapping.
    ///
    /// The UNIQUE constraint on `short_code` is the authoritative uniqueness
    /// guard; a violated constraint maps to `ShortCodeExists` so callers can
    /// retry with a fresh code.
    pub async fn insert_mapping(
        &self,
        short_code: &str,
        long_url: &str,
    ) -> AppResult<UrlMapping> {
        let result = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (short_code, long_url)
            VALUES (?, ?)
            RETURNING *
            "#,
        )
        .bind(short_code)
        .bind(long_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::ShortCodeExists(short_code.to_string())
            }
            other => AppError::Database(other),
        })?;

        Ok(result)
    }

    /// Get a URL mapping by short code; absence is a valid `None`
    pub async fn get_by_short_code(&self, short_code: &str) -> AppResult<Option<UrlMapping>> {
        let result = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT * FROM url_mappings
            WHERE short_code = ?
            "#,
        )
        .bind(short_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Check if a short code exists
    pub async fn short_code_exists(&self, short_code: &str) -> AppResult<bool> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM url_mappings WHERE short_code = ?
            "#,
        )
        .bind(short_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(result > 0)
    }

    /// Count all mappings
    #[allow(dead_code)]
    pub async fn count_mappings(&self) -> AppResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM url_mappings
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_repository() -> Repository {
        // Single connection so the in-memory database is shared
        let repository = Repository::new("sqlite::memory:", 1).await.unwrap();
        repository.run_migrations().await.unwrap();
        repository
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let repository = test_repository().await;

        let mapping = repository
            .insert_mapping("abc123", "https://example.com")
            .await
            .unwrap();
        assert_eq!(mapping.short_code, "abc123");
        assert_eq!(mapping.long_url, "https://example.com");

        let found = repository.get_by_short_code("abc123").await.unwrap();
        assert_eq!(found.unwrap().long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_lookup_missing_code_is_none() {
        let repository = test_repository().await;

        let found = repository.get_by_short_code("nosuch").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_code_is_conflict() {
        let repository = test_repository().await;

        repository
            .insert_mapping("dupe01", "https://example.com/a")
            .await
            .unwrap();
        let err = repository
            .insert_mapping("dupe01", "https://example.com/b")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ShortCodeExists(code) if code == "dupe01"));
    }

    #[tokio::test]
    async fn test_short_code_exists() {
        let repository = test_repository().await;

        assert!(!repository.short_code_exists("abc123").await.unwrap());
        repository
            .insert_mapping("abc123", "https://example.com")
            .await
            .unwrap();
        assert!(repository.short_code_exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let repository = test_repository().await;
        // Second run against an already-initialized store must succeed
        repository.run_migrations().await.unwrap();
        assert_eq!(repository.count_mappings().await.unwrap(), 0);
    }
}
