//! # Checklist Repository
//!
//! Stores each checklist as a JSON document in the `checklists` table.
//! `owner_id` and `created_at` are duplicated into their own columns so the
//! listing can filter, sort and page in SQL; everything else, including the
//! ordered box list, lives in `document`.
//!
//! Updates replace the whole document. Two writers that read the same
//! checklist and save it back will race, and the later write wins.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::Row;
use tracing::debug;

use crate::domain::models::checklist::Checklist;
use crate::storage::connection::DbConnection;
use crate::storage::traits::{ChecklistFilter, ChecklistStorage};

use super::sortable_timestamp;

/// Repository for checklist documents
#[derive(Clone)]
pub struct ChecklistRepository {
    db: DbConnection,
}

impl ChecklistRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn encode(checklist: &Checklist) -> Result<String> {
        serde_json::to_string(checklist)
            .with_context(|| format!("Failed to encode checklist {}", checklist.id))
    }

    fn decode(document: &str) -> Result<Checklist> {
        serde_json::from_str(document).context("Failed to decode checklist document")
    }
}

#[async_trait]
impl ChecklistStorage for ChecklistRepository {
    async fn store_checklist(&self, checklist: &Checklist) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO checklists (id, owner_id, created_at, updated_at, document)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&checklist.id)
        .bind(&checklist.owner_id)
        .bind(sortable_timestamp(&checklist.created_at))
        .bind(sortable_timestamp(&checklist.updated_at))
        .bind(Self::encode(checklist)?)
        .execute(self.db.pool())
        .await?;

        debug!("Stored checklist {} with {} boxes", checklist.id, checklist.boxes.len());
        Ok(())
    }

    async fn get_checklist(&self, checklist_id: &str) -> Result<Option<Checklist>> {
        let row = sqlx::query("SELECT document FROM checklists WHERE id = ?")
            .bind(checklist_id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(Self::decode(r.get("document"))?)),
            None => Ok(None),
        }
    }

    async fn list_checklists(
        &self,
        filter: &ChecklistFilter,
        skip: u64,
        limit: Option<u32>,
    ) -> Result<Vec<Checklist>> {
        // SQLite treats a negative LIMIT as "no limit"
        let limit = limit.map(i64::from).unwrap_or(-1);
        // An offset past anything SQLite can hold just yields an empty page
        let offset = i64::try_from(skip).unwrap_or(i64::MAX);

        let query = match &filter.owner_id {
            Some(owner_id) => sqlx::query(
                r#"
                SELECT document FROM checklists
                WHERE owner_id = ?
                ORDER BY created_at DESC, rowid DESC
                LIMIT ? OFFSET ?
                "#,
            )
            .bind(owner_id.clone()),
            None => sqlx::query(
                r#"
                SELECT document FROM checklists
                ORDER BY created_at DESC, rowid DESC
                LIMIT ? OFFSET ?
                "#,
            ),
        };

        let rows = query
            .bind(limit)
            .bind(offset)
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(|r| Self::decode(r.get("document"))).collect()
    }

    async fn count_checklists(&self, filter: &ChecklistFilter) -> Result<u64> {
        let row = match &filter.owner_id {
            Some(owner_id) => {
                sqlx::query("SELECT COUNT(*) AS count FROM checklists WHERE owner_id = ?")
                    .bind(owner_id)
                    .fetch_one(self.db.pool())
                    .await?
            }
            None => {
                sqlx::query("SELECT COUNT(*) AS count FROM checklists")
                    .fetch_one(self.db.pool())
                    .await?
            }
        };

        Ok(row.get::<i64, _>("count") as u64)
    }

    async fn update_checklist(&self, checklist: &Checklist) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE checklists
            SET owner_id = ?, updated_at = ?, document = ?
            WHERE id = ?
            "#,
        )
        .bind(&checklist.owner_id)
        .bind(sortable_timestamp(&checklist.updated_at))
        .bind(Self::encode(checklist)?)
        .bind(&checklist.id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(anyhow::anyhow!("Checklist not found: {}", checklist.id));
        }
        Ok(())
    }

    async fn delete_checklist(&self, checklist_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM checklists WHERE id = ?")
            .bind(checklist_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::box_schedule::generate_boxes;
    use crate::domain::models::generate_id;
    use crate::storage::test_utils::TestEnvironment;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn sample_checklist(owner_id: &str, minutes: i64) -> Checklist {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes);
        Checklist {
            id: generate_id(),
            owner_id: owner_id.to_string(),
            title: format!("Checklist {}", minutes),
            sheet_url: "http://sheets/x".to_string(),
            boxes: generate_boxes(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ),
            created_at,
            updated_at: created_at,
            created_by: owner_id.to_string(),
            updated_by: owner_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_and_get_checklist() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ChecklistRepository::new(env.connection.clone());
        let checklist = sample_checklist("owner-1", 0);

        repo.store_checklist(&checklist).await.unwrap();

        let loaded = repo.get_checklist(&checklist.id).await.unwrap();
        assert_eq!(loaded, Some(checklist));
        assert!(repo.get_checklist("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_document() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ChecklistRepository::new(env.connection.clone());
        let mut checklist = sample_checklist("owner-1", 0);
        repo.store_checklist(&checklist).await.unwrap();

        checklist.owner_id = "owner-2".to_string();
        checklist.boxes[0].mark_completed(Utc::now());
        repo.update_checklist(&checklist).await.unwrap();

        let loaded = repo.get_checklist(&checklist.id).await.unwrap().unwrap();
        assert_eq!(loaded, checklist);

        // owner column follows the document
        assert_eq!(repo.count_checklists(&ChecklistFilter::owned_by("owner-2")).await.unwrap(), 1);
        assert_eq!(repo.count_checklists(&ChecklistFilter::owned_by("owner-1")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_checklist_fails() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ChecklistRepository::new(env.connection.clone());

        let result = repo.update_checklist(&sample_checklist("owner-1", 0)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_checklist() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ChecklistRepository::new(env.connection.clone());
        let checklist = sample_checklist("owner-1", 0);
        repo.store_checklist(&checklist).await.unwrap();

        assert!(repo.delete_checklist(&checklist.id).await.unwrap());
        assert!(repo.get_checklist(&checklist.id).await.unwrap().is_none());
        assert!(!repo.delete_checklist(&checklist.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_newest_first_with_paging_and_filter() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ChecklistRepository::new(env.connection.clone());

        for minutes in 0..5 {
            repo.store_checklist(&sample_checklist("owner-1", minutes)).await.unwrap();
        }
        for minutes in 5..8 {
            repo.store_checklist(&sample_checklist("owner-2", minutes)).await.unwrap();
        }

        let all = repo.list_checklists(&ChecklistFilter::default(), 0, None).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Checklist 7", "Checklist 6", "Checklist 5", "Checklist 4",
                "Checklist 3", "Checklist 2", "Checklist 1", "Checklist 0",
            ]
        );

        let page = repo.list_checklists(&ChecklistFilter::default(), 2, Some(3)).await.unwrap();
        let titles: Vec<&str> = page.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Checklist 5", "Checklist 4", "Checklist 3"]);

        let owned = repo
            .list_checklists(&ChecklistFilter::owned_by("owner-1"), 0, Some(2))
            .await
            .unwrap();
        let titles: Vec<&str> = owned.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Checklist 4", "Checklist 3"]);

        assert_eq!(repo.count_checklists(&ChecklistFilter::default()).await.unwrap(), 8);
        assert_eq!(repo.count_checklists(&ChecklistFilter::owned_by("owner-1")).await.unwrap(), 5);
        assert_eq!(repo.count_checklists(&ChecklistFilter::owned_by("nobody")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_skip_beyond_sqlite_range_is_empty() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ChecklistRepository::new(env.connection.clone());
        repo.store_checklist(&sample_checklist("owner-1", 0)).await.unwrap();

        let skip = u64::from(u32::MAX - 1) * u64::from(u32::MAX);
        let page = repo
            .list_checklists(&ChecklistFilter::default(), skip, Some(u32::MAX))
            .await
            .unwrap();
        assert!(page.is_empty());

        let page = repo.list_checklists(&ChecklistFilter::default(), u64::MAX, None).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_same_timestamp_lists_latest_insert_first() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ChecklistRepository::new(env.connection.clone());

        let mut first = sample_checklist("owner-1", 0);
        first.title = "first".to_string();
        let mut second = sample_checklist("owner-1", 0);
        second.title = "second".to_string();
        repo.store_checklist(&first).await.unwrap();
        repo.store_checklist(&second).await.unwrap();

        let listed = repo.list_checklists(&ChecklistFilter::default(), 0, None).await.unwrap();
        assert_eq!(listed[0].title, "second");
        assert_eq!(listed[1].title, "first");
    }
}
