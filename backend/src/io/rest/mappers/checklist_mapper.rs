//! Conversions between checklist DTOs and domain types.
//!
//! Calendar days go out as `YYYY-MM-DD`; completion instants and audit
//! timestamps as RFC 3339 in UTC.

use shared::{
    Checklist, ChecklistBox, ChecklistListRequest, ChecklistListResponse, CreateChecklistRequest,
    EditChecklistRequest, ExtendChecklistRequest, MyChecklistsRequest, ToggleChecklistRequest,
};

use super::format_timestamp;
use super::user_mapper::UserMapper;
use crate::domain::commands::checklist::{
    ChecklistListQuery, ChecklistListResult, ChecklistView, CreateChecklistCommand,
    EditChecklistCommand, ExtendChecklistCommand, MyChecklistsQuery, ToggleChecklistDayCommand,
};
use crate::domain::models::checklist::ChecklistBox as DomainChecklistBox;

pub struct ChecklistMapper;

impl ChecklistMapper {
    pub fn box_to_dto(domain: &DomainChecklistBox) -> ChecklistBox {
        ChecklistBox {
            desired_date: domain.desired_date.format("%Y-%m-%d").to_string(),
            actual_date: domain.actual_date.as_ref().map(format_timestamp),
        }
    }

    /// Convert a resolved checklist view to the shared Checklist DTO
    pub fn to_dto(view: ChecklistView) -> Checklist {
        let checklist = view.checklist;
        Checklist {
            boxes: checklist.boxes.iter().map(Self::box_to_dto).collect(),
            created_at: format_timestamp(&checklist.created_at),
            updated_at: format_timestamp(&checklist.updated_at),
            id: checklist.id,
            owner: view.owner.map(UserMapper::to_dto),
            title: checklist.title,
            sheet_url: checklist.sheet_url,
            created_by: view.created_by.map(UserMapper::to_dto),
            updated_by: view.updated_by.map(UserMapper::to_dto),
        }
    }

    pub fn to_dto_list(views: Vec<ChecklistView>) -> Vec<Checklist> {
        views.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_list_response(result: ChecklistListResult) -> ChecklistListResponse {
        ChecklistListResponse {
            checklists: Self::to_dto_list(result.checklists),
            total: result.total,
            page: result.page,
            limit: result.limit,
        }
    }

    pub fn to_create_command(
        owner_id: String,
        request: CreateChecklistRequest,
        actor_id: String,
    ) -> CreateChecklistCommand {
        CreateChecklistCommand {
            owner_id,
            title: request.title,
            sheet_url: request.sheet_url,
            start_date: request.start_date,
            upto_date: request.upto_date,
            actor_id,
        }
    }

    pub fn to_edit_command(checklist_id: String, request: EditChecklistRequest) -> EditChecklistCommand {
        EditChecklistCommand {
            checklist_id,
            title: request.title,
            sheet_url: request.sheet_url,
            owner_id: request.user_id,
        }
    }

    pub fn to_extend_command(
        checklist_id: String,
        request: ExtendChecklistRequest,
        actor_id: String,
    ) -> ExtendChecklistCommand {
        ExtendChecklistCommand {
            checklist_id,
            upto_date: request.upto_date,
            actor_id,
        }
    }

    pub fn to_toggle_command(checklist_id: String, request: ToggleChecklistRequest) -> ToggleChecklistDayCommand {
        ToggleChecklistDayCommand {
            checklist_id,
            date: request.date,
        }
    }

    pub fn to_list_query(request: ChecklistListRequest) -> ChecklistListQuery {
        ChecklistListQuery {
            limit: request.limit,
            page: request.page,
            owner_id: request.id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }

    pub fn to_my_query(actor_id: String, request: MyChecklistsRequest) -> MyChecklistsQuery {
        MyChecklistsQuery {
            actor_id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::checklist::Checklist as DomainChecklist;
    use crate::domain::models::user::User;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_view() -> ChecklistView {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let mut done = DomainChecklistBox::pending(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        done.mark_completed(Utc.with_ymd_and_hms(2024, 1, 1, 17, 5, 30).unwrap());
        let owner = User {
            id: "owner-1".to_string(),
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
            created_at: at,
            updated_at: at,
        };

        ChecklistView {
            checklist: DomainChecklist {
                id: "c1".to_string(),
                owner_id: owner.id.clone(),
                title: "Jan QC".to_string(),
                sheet_url: "http://x".to_string(),
                boxes: vec![
                    done,
                    DomainChecklistBox::pending(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
                ],
                created_at: at,
                updated_at: at,
                created_by: "gone".to_string(),
                updated_by: "gone".to_string(),
            },
            owner: Some(owner),
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_to_dto() {
        let dto = ChecklistMapper::to_dto(sample_view());

        assert_eq!(dto.id, "c1");
        assert_eq!(dto.owner.as_ref().map(|u| u.name.as_str()), Some("Owner"));
        assert!(dto.created_by.is_none());
        assert_eq!(dto.created_at, "2024-01-01T08:00:00.000Z");
        assert_eq!(
            dto.boxes,
            vec![
                ChecklistBox {
                    desired_date: "2024-01-01".to_string(),
                    actual_date: Some("2024-01-01T17:05:30.000Z".to_string()),
                },
                ChecklistBox {
                    desired_date: "2024-01-02".to_string(),
                    actual_date: None,
                },
            ]
        );
    }

    #[test]
    fn test_list_request_owner_filter_maps_to_owner_id() {
        let query = ChecklistMapper::to_list_query(ChecklistListRequest {
            limit: Some("10".to_string()),
            page: Some("2".to_string()),
            id: Some("owner-1".to_string()),
            start_date: None,
            end_date: None,
        });

        assert_eq!(query.owner_id.as_deref(), Some("owner-1"));
        assert_eq!(query.limit.as_deref(), Some("10"));
        assert_eq!(query.page.as_deref(), Some("2"));
    }

    #[test]
    fn test_edit_request_user_id_becomes_owner() {
        let command = ChecklistMapper::to_edit_command(
            "c1".to_string(),
            EditChecklistRequest {
                title: Some("t".to_string()),
                sheet_url: Some("u".to_string()),
                user_id: Some("owner-2".to_string()),
            },
        );

        assert_eq!(command.checklist_id, "c1");
        assert_eq!(command.owner_id.as_deref(), Some("owner-2"));
    }
}
