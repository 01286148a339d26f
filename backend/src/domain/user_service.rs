use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::user::CreateUserCommand;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::user::User;
use crate::domain::models::{generate_id, is_valid_id};
use crate::storage::{Connection, UserStorage};

/// Service for the user directory that checklists reference
#[derive(Clone)]
pub struct UserService<C: Connection> {
    user_repository: C::UserRepository,
}

impl<C: Connection> UserService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            user_repository: connection.create_user_repository(),
        }
    }

    /// Create a new user
    pub async fn create_user(&self, command: CreateUserCommand) -> DomainResult<User> {
        let name = command.name.as_deref().map(str::trim).unwrap_or_default();
        let email = command.email.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() || email.is_empty() {
            return Err(DomainError::validation("please provide all required fields"));
        }
        if !email.contains('@') {
            return Err(DomainError::validation("please provide valid email"));
        }

        let now = Utc::now();
        let user = User {
            id: generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.user_repository.store_user(&user).await?;

        info!("Created user {} with ID: {}", user.name, user.id);
        Ok(user)
    }

    /// Look up a user, treating a malformed id as absent
    pub async fn find_user(&self, user_id: &str) -> DomainResult<Option<User>> {
        if !is_valid_id(user_id) {
            return Ok(None);
        }
        Ok(self.user_repository.get_user(user_id).await?)
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: &str) -> DomainResult<User> {
        match self.find_user(user_id).await? {
            Some(user) => Ok(user),
            None => {
                warn!("User not found: {}", user_id);
                Err(DomainError::not_found("user not exists"))
            }
        }
    }

    /// List all users
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        let users = self.user_repository.list_users().await?;
        info!("Found {} users", users.len());
        Ok(users)
    }
}
