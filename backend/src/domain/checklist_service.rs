//! Checklist service domain logic.
//!
//! Owns the checklist lifecycle: creation with an initial run of day boxes,
//! edits, range extension, per-day completion, deletion, and the listings
//! with their date-window narrowing.
//!
//! ## Business Rules
//!
//! - A checklist has exactly one owner, who must exist at creation time
//! - Boxes cover one calendar day each and only ever grow at the end
//! - Marking a day complete is one-way; re-marking refreshes the timestamp
//! - Edits leave `updated_at`/`updated_by` untouched, extensions refresh them
//! - An edit naming an unknown owner keeps the current owner
//!
//! Mutations load the whole checklist, change it in memory and save it back
//! without locking, so concurrent writers to one checklist can overwrite
//! each other.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::box_schedule::{
    extend_boxes, generate_boxes, mark_day_complete, parse_calendar_date, DateWindow,
};
use crate::domain::commands::checklist::{
    ChecklistListQuery, ChecklistListResult, ChecklistView, CreateChecklistCommand,
    CreateChecklistResult, DeleteChecklistCommand, EditChecklistCommand, ExtendChecklistCommand,
    ExtendChecklistResult, MyChecklistsQuery, ToggleChecklistDayCommand, ToggleChecklistDayResult,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::checklist::Checklist;
use crate::domain::models::user::User;
use crate::domain::models::{generate_id, is_valid_id};
use crate::domain::user_service::UserService;
use crate::storage::{ChecklistFilter, ChecklistStorage, Connection};

const MISSING_FIELDS: &str = "please provide all required fields";

/// Service for managing checklists and their day boxes
#[derive(Clone)]
pub struct ChecklistService<C: Connection> {
    checklist_repository: C::ChecklistRepository,
    user_service: UserService<C>,
}

impl<C: Connection> ChecklistService<C> {
    pub fn new(connection: Arc<C>, user_service: UserService<C>) -> Self {
        Self {
            checklist_repository: connection.create_checklist_repository(),
            user_service,
        }
    }

    /// Create a checklist with one pending box per day in the requested range
    pub async fn create_checklist(
        &self,
        command: CreateChecklistCommand,
    ) -> DomainResult<CreateChecklistResult> {
        info!(
            "Creating checklist {:?} for owner {}",
            command.title, command.owner_id
        );

        let (Some(title), Some(sheet_url), Some(owner_id), Some(upto_date)) = (
            required(command.title),
            required(command.sheet_url),
            required(Some(command.owner_id)),
            required(command.upto_date),
        ) else {
            return Err(DomainError::validation(MISSING_FIELDS));
        };

        let upto = parse_calendar_date(&upto_date)
            .ok_or_else(|| DomainError::validation("please provide valid date"))?;
        let start = command
            .start_date
            .as_deref()
            .and_then(parse_calendar_date)
            .ok_or_else(|| DomainError::validation("please provide valid start date"))?;

        let owner = match self.user_service.find_user(&owner_id).await? {
            Some(owner) => owner,
            None => {
                warn!("Owner not found for new checklist: {}", owner_id);
                return Err(DomainError::not_found("user not exists"));
            }
        };

        let now = Utc::now();
        let checklist = Checklist {
            id: generate_id(),
            owner_id: owner.id,
            title,
            sheet_url,
            boxes: generate_boxes(start, upto),
            created_at: now,
            updated_at: now,
            created_by: command.actor_id.clone(),
            updated_by: command.actor_id,
        };

        self.checklist_repository.store_checklist(&checklist).await?;

        info!(
            "Created checklist {} with {} boxes ({} to {})",
            checklist.id,
            checklist.boxes.len(),
            start,
            upto
        );

        Ok(CreateChecklistResult {
            checklist_id: checklist.id,
            success_message: "new Checklist added".to_string(),
        })
    }

    /// Update title and sheet URL, and reassign the owner when the new one exists
    pub async fn edit_checklist(&self, command: EditChecklistCommand) -> DomainResult<String> {
        info!("Editing checklist {}", command.checklist_id);

        let (Some(title), Some(sheet_url)) = (required(command.title), required(command.sheet_url))
        else {
            return Err(DomainError::validation(MISSING_FIELDS));
        };

        let mut checklist = self
            .find_checklist(&command.checklist_id)
            .await?
            .ok_or_else(|| DomainError::not_found("checklist not exists"))?;

        if let Some(owner_id) = required(command.owner_id) {
            match self.user_service.find_user(&owner_id).await? {
                Some(owner) => checklist.owner_id = owner.id,
                None => debug!(
                    "Keeping owner of checklist {}: user {} not found",
                    checklist.id, owner_id
                ),
            }
        }

        checklist.title = title;
        checklist.sheet_url = sheet_url;

        self.checklist_repository.update_checklist(&checklist).await?;

        info!("Updated checklist {}", checklist.id);
        Ok("Checklist updated".to_string())
    }

    /// Append boxes after the last existing day through `upto_date`
    pub async fn extend_checklist(
        &self,
        command: ExtendChecklistCommand,
    ) -> DomainResult<ExtendChecklistResult> {
        info!(
            "Extending checklist {} up to {:?}",
            command.checklist_id, command.upto_date
        );

        let (Some(checklist_id), Some(upto_date)) =
            (required(Some(command.checklist_id)), required(command.upto_date))
        else {
            return Err(DomainError::validation(MISSING_FIELDS));
        };

        let upto = parse_calendar_date(&upto_date)
            .ok_or_else(|| DomainError::validation("please provide valid date"))?;

        let mut checklist = self
            .find_checklist(&checklist_id)
            .await?
            .ok_or_else(|| DomainError::not_found("checklist not exists"))?;

        let appended = extend_boxes(&mut checklist.boxes, upto);
        checklist.updated_by = command.actor_id;
        checklist.updated_at = Utc::now();

        self.checklist_repository.update_checklist(&checklist).await?;

        info!(
            "Appended {} boxes to checklist {}, now ending {:?}",
            appended,
            checklist.id,
            checklist.last_desired_date()
        );
        Ok(ExtendChecklistResult {
            appended,
            success_message: "more boxes added successfully".to_string(),
        })
    }

    /// Permanently delete a checklist
    pub async fn delete_checklist(&self, command: DeleteChecklistCommand) -> DomainResult<String> {
        info!("Deleting checklist {}", command.checklist_id);

        if !is_valid_id(&command.checklist_id) {
            return Err(DomainError::validation("id not valid"));
        }

        if !self
            .checklist_repository
            .delete_checklist(&command.checklist_id)
            .await?
        {
            warn!("Checklist not found for delete: {}", command.checklist_id);
            return Err(DomainError::not_found("Checklist not found"));
        }

        info!("Deleted checklist {}", command.checklist_id);
        Ok("Checklist deleted".to_string())
    }

    /// Mark every box for the given day as completed now
    pub async fn toggle_checklist_day(
        &self,
        command: ToggleChecklistDayCommand,
    ) -> DomainResult<ToggleChecklistDayResult> {
        info!(
            "Marking checklist {} complete for {:?}",
            command.checklist_id, command.date
        );

        if !is_valid_id(&command.checklist_id) {
            return Err(DomainError::validation("id not valid"));
        }
        let date = command
            .date
            .as_deref()
            .and_then(parse_calendar_date)
            .ok_or_else(|| DomainError::validation("please provide valid date"))?;

        let mut checklist = match self.checklist_repository.get_checklist(&command.checklist_id).await? {
            Some(checklist) => checklist,
            None => {
                warn!("Checklist not found for toggle: {}", command.checklist_id);
                return Err(DomainError::not_found("Checklist not found"));
            }
        };

        let marked = mark_day_complete(&mut checklist.boxes, date, Utc::now());
        self.checklist_repository.update_checklist(&checklist).await?;

        if marked == 0 {
            debug!("No box on {} in checklist {}", date, checklist.id);
        } else {
            info!(
                "Marked {} complete in checklist {} ({} of {} days done)",
                date,
                checklist.id,
                checklist.completed_count(),
                checklist.boxes.len()
            );
        }

        Ok(ToggleChecklistDayResult {
            marked,
            success_message: "successfully changed".to_string(),
        })
    }

    /// Paged listing across owners, newest first
    pub async fn list_checklists(&self, query: ChecklistListQuery) -> DomainResult<ChecklistListResult> {
        info!("Listing checklists: {:?}", query);

        let limit = parse_positive(query.limit.as_deref())?;
        let page = parse_positive(query.page.as_deref())?;
        let window = DateWindow::from_bounds(query.start_date.as_deref(), query.end_date.as_deref())?;

        let filter = match required(query.owner_id) {
            Some(owner_id) => ChecklistFilter::owned_by(owner_id),
            None => ChecklistFilter::default(),
        };

        let skip = u64::from(page - 1) * u64::from(limit);
        let checklists = self
            .checklist_repository
            .list_checklists(&filter, skip, Some(limit))
            .await?;
        let count = self.checklist_repository.count_checklists(&filter).await?;

        let checklists = self.resolve_views(checklists, window).await?;

        info!("Found {} checklists on page {} ({} matching)", checklists.len(), page, count);
        Ok(ChecklistListResult {
            checklists,
            total: count.div_ceil(u64::from(limit)),
            page,
            limit,
        })
    }

    /// All checklists owned by the actor, newest first
    pub async fn list_my_checklists(&self, query: MyChecklistsQuery) -> DomainResult<Vec<ChecklistView>> {
        info!("Listing checklists owned by {}", query.actor_id);

        let window = DateWindow::from_bounds(query.start_date.as_deref(), query.end_date.as_deref())?;
        let checklists = self
            .checklist_repository
            .list_checklists(&ChecklistFilter::owned_by(query.actor_id), 0, None)
            .await?;

        self.resolve_views(checklists, window).await
    }

    async fn find_checklist(&self, checklist_id: &str) -> DomainResult<Option<Checklist>> {
        if !is_valid_id(checklist_id) {
            return Ok(None);
        }
        Ok(self.checklist_repository.get_checklist(checklist_id).await?)
    }

    /// Narrow boxes to `window` and resolve user references for display
    async fn resolve_views(
        &self,
        checklists: Vec<Checklist>,
        window: Option<DateWindow>,
    ) -> DomainResult<Vec<ChecklistView>> {
        let mut users: HashMap<String, Option<User>> = HashMap::new();
        let mut views = Vec::with_capacity(checklists.len());

        for mut checklist in checklists {
            if let Some(window) = &window {
                window.retain_boxes(&mut checklist.boxes);
            }

            let owner = self.cached_user(&mut users, &checklist.owner_id).await?;
            let created_by = self.cached_user(&mut users, &checklist.created_by).await?;
            let updated_by = self.cached_user(&mut users, &checklist.updated_by).await?;

            views.push(ChecklistView {
                checklist,
                owner,
                created_by,
                updated_by,
            });
        }

        Ok(views)
    }

    async fn cached_user(
        &self,
        cache: &mut HashMap<String, Option<User>>,
        user_id: &str,
    ) -> DomainResult<Option<User>> {
        if let Some(user) = cache.get(user_id) {
            return Ok(user.clone());
        }
        let user = self.user_service.find_user(user_id).await?;
        cache.insert(user_id.to_string(), user.clone());
        Ok(user)
    }
}

/// Trimmed value, or `None` when missing or blank
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_positive(value: Option<&str>) -> DomainResult<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .ok_or_else(|| DomainError::validation("limit and page must be positive numbers"))
}
