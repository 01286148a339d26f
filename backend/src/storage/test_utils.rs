/// Test utilities shared by storage, domain and REST tests
///
/// Every `TestEnvironment` gets its own in-memory database, so tests never
/// see each other's data and nothing needs cleaning up afterwards.
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;

use super::connection::DbConnection;
use super::repositories::UserRepository;
use super::traits::UserStorage;
use crate::domain::models::generate_id;
use crate::domain::models::user::User;

pub struct TestEnvironment {
    pub connection: DbConnection,
}

impl TestEnvironment {
    /// Create a new test environment backed by a fresh database
    pub async fn new() -> Result<Self> {
        Ok(TestEnvironment {
            connection: DbConnection::init_test().await?,
        })
    }

    /// Shared handle for services that take `Arc<C>`
    pub fn shared_connection(&self) -> Arc<DbConnection> {
        Arc::new(self.connection.clone())
    }

    /// Store a user named `name` and return it
    pub async fn seed_user(&self, name: &str) -> User {
        let now = Utc::now();
        let user = User {
            id: generate_id(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: now,
            updated_at: now,
        };

        UserRepository::new(self.connection.clone())
            .store_user(&user)
            .await
            .expect("Failed to seed test user");
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_environments_are_isolated() -> Result<()> {
        let first = TestEnvironment::new().await?;
        let second = TestEnvironment::new().await?;

        let user = first.seed_user("Kiran").await;

        let repo = UserRepository::new(second.connection.clone());
        assert!(repo.get_user(&user.id).await?.is_none());
        assert_eq!(repo.list_users().await?.len(), 0);
        Ok(())
    }
}
