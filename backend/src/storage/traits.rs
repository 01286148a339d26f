//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::checklist::Checklist;
use crate::domain::models::user::User;

/// Narrows which checklists a listing or count considers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistFilter {
    pub owner_id: Option<String>,
}

impl ChecklistFilter {
    pub fn owned_by(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: Some(owner_id.into()),
        }
    }
}

/// Trait defining the interface for checklist storage operations
///
/// Checklists are stored as whole documents: every write replaces the full
/// record, including the box list.
#[async_trait]
pub trait ChecklistStorage: Send + Sync {
    /// Store a new checklist
    async fn store_checklist(&self, checklist: &Checklist) -> Result<()>;

    /// Retrieve a specific checklist by ID
    async fn get_checklist(&self, checklist_id: &str) -> Result<Option<Checklist>>;

    /// List checklists matching `filter`, newest `created_at` first,
    /// skipping `skip` records and returning at most `limit` (all if `None`)
    async fn list_checklists(
        &self,
        filter: &ChecklistFilter,
        skip: u64,
        limit: Option<u32>,
    ) -> Result<Vec<Checklist>>;

    /// Count checklists matching `filter`
    async fn count_checklists(&self, filter: &ChecklistFilter) -> Result<u64>;

    /// Replace an existing checklist document
    async fn update_checklist(&self, checklist: &Checklist) -> Result<()>;

    /// Delete a checklist
    /// Returns true if the checklist was found and deleted, false otherwise
    async fn delete_checklist(&self, checklist_id: &str) -> Result<bool>;
}

/// Trait defining the interface for user storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Store a new user
    async fn store_user(&self, user: &User) -> Result<()>;

    /// Retrieve a specific user by ID
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    /// List all users ordered by name
    async fn list_users(&self) -> Result<Vec<User>>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories, so the domain layer can work
/// with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone + 'static {
    /// The type of ChecklistStorage this connection creates
    type ChecklistRepository: ChecklistStorage + Clone + 'static;

    /// The type of UserStorage this connection creates
    type UserRepository: UserStorage + Clone + 'static;

    /// Create a new checklist repository for this connection
    fn create_checklist_repository(&self) -> Self::ChecklistRepository;

    /// Create a new user repository for this connection
    fn create_user_repository(&self) -> Self::UserRepository;
}
