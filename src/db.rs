use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::AppConfig;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT UNIQUE,
    password TEXT
)
"#;

/// Opens the file-backed pool, creating the database file if it is missing.
pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("parse DATABASE_URL {}", config.database_url))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")
}

/// Creates the `users` table if it does not exist yet. Safe to run on every start.
pub async fn init_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(db).await?;
    tracing::debug!("users table ready");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // One long-lived connection: every `sqlite::memory:` connection is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    init_schema(&pool).await.expect("schema");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.expect("second run");

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'users'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }

    #[tokio::test]
    async fn init_schema_keeps_existing_rows() {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO users (email, password) VALUES ('a@x.com', 'p1')")
            .execute(&pool)
            .await
            .unwrap();

        init_schema(&pool).await.expect("rerun");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn connect_creates_missing_file() {
        let path = std::env::temp_dir().join(format!("signup-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let config = AppConfig {
            database_url: format!("sqlite://{}", path.display()),
            host: "127.0.0.1".into(),
            port: 0,
            max_connections: 1,
        };

        let pool = connect(&config).await.expect("connect");
        init_schema(&pool).await.expect("schema");
        pool.close().await;

        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
