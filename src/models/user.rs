use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A row of the `users` table. The password is kept verbatim, as submitted.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    /// Inserts a new user and returns its id. A taken email surfaces as the
    /// database's unique-constraint error; there is no separate existence check.
    pub async fn create(
        db: &SqlitePool,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(email)
            .bind(password)
            .execute(db)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, email, password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(db)
            .await
    }

    pub async fn count(db: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
    }
}
