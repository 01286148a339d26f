use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::storage::repositories::{ChecklistRepository, UserRepository};
use crate::storage::traits::Connection;

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and set up the schema
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database at {}", url))?;

        Self::setup_schema(&pool).await?;
        info!("Connected to database at {}", url);

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a private in-memory database for tests
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // A single long-lived connection keeps the in-memory database alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<std::time::Duration>)
            .max_lifetime(None::<std::time::Duration>)
            .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
            .await?;

        Self::setup_schema(&pool).await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // `document` holds the full checklist as JSON, box order included.
        // The other columns mirror document fields for filtering and sorting.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS checklists (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                document TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_checklists_owner ON checklists (owner_id)")
            .execute(pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_checklists_created_at ON checklists (created_at)")
            .execute(pool)
            .await?;

        debug!("Database schema ready");
        Ok(())
    }
}

impl Connection for DbConnection {
    type ChecklistRepository = ChecklistRepository;
    type UserRepository = UserRepository;

    fn create_checklist_repository(&self) -> Self::ChecklistRepository {
        ChecklistRepository::new(self.clone())
    }

    fn create_user_repository(&self) -> Self::UserRepository {
        UserRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::User;
    use crate::storage::traits::UserStorage;
    use chrono::Utc;

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", temp_dir.path().join("checklists.db").display());

        let now = Utc::now();
        let user = User {
            id: crate::domain::models::generate_id(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            created_at: now,
            updated_at: now,
        };

        {
            let db = DbConnection::new(&url).await.expect("Failed to open database");
            db.create_user_repository().store_user(&user).await.unwrap();
            db.pool().close().await;
        }

        let reopened = DbConnection::new(&url).await.expect("Failed to reopen database");
        let loaded = reopened.create_user_repository().get_user(&user.id).await.unwrap();
        assert_eq!(loaded.map(|u| u.email), Some(user.email));
    }
}
