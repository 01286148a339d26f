//! # REST API for Checklist Management
//!
//! Endpoints for creating, editing, extending, completing, deleting and
//! listing checklists. Every route needs an [`Actor`].

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use shared::{
    ChecklistListRequest, CreateChecklistRequest, CreateChecklistResponse, EditChecklistRequest,
    ExtendChecklistRequest, MessageResponse, MyChecklistsRequest, ToggleChecklistRequest,
};
use tracing::{error, info};

use crate::domain::commands::checklist::DeleteChecklistCommand;
use crate::io::rest::actor::Actor;
use crate::io::rest::error::ApiError;
use crate::io::rest::json_body::JsonBody;
use crate::io::rest::mappers::checklist_mapper::ChecklistMapper;
use crate::AppState;

/// Create a router for checklist related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_checklists))
        .route("/me", get(list_my_checklists))
        .route(
            "/:id",
            post(create_checklist).put(edit_checklist).delete(delete_checklist),
        )
        .route("/:id/boxes", patch(extend_checklist))
        .route("/:id/toggle", patch(toggle_checklist_day))
}

/// Create a checklist for the owner in the path
pub async fn create_checklist(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(owner_id): Path<String>,
    JsonBody(request): JsonBody<CreateChecklistRequest>,
) -> impl IntoResponse {
    info!("POST /api/checklists/{} - request: {:?}", owner_id, request);

    let command = ChecklistMapper::to_create_command(owner_id, request, actor.id);

    match state.checklist_service.create_checklist(command).await {
        Ok(result) => {
            let response = CreateChecklistResponse {
                message: result.success_message,
                checklist_id: result.checklist_id,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create checklist: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Edit title, sheet URL and owner
pub async fn edit_checklist(
    State(state): State<AppState>,
    Actor(_actor): Actor,
    Path(checklist_id): Path<String>,
    JsonBody(request): JsonBody<EditChecklistRequest>,
) -> impl IntoResponse {
    info!("PUT /api/checklists/{} - request: {:?}", checklist_id, request);

    let command = ChecklistMapper::to_edit_command(checklist_id, request);

    match state.checklist_service.edit_checklist(command).await {
        Ok(message) => (StatusCode::OK, Json(MessageResponse::new(message))).into_response(),
        Err(e) => {
            error!("Failed to edit checklist: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Append boxes through the requested day
pub async fn extend_checklist(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(checklist_id): Path<String>,
    JsonBody(request): JsonBody<ExtendChecklistRequest>,
) -> impl IntoResponse {
    info!("PATCH /api/checklists/{}/boxes - request: {:?}", checklist_id, request);

    let command = ChecklistMapper::to_extend_command(checklist_id, request, actor.id);

    match state.checklist_service.extend_checklist(command).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(MessageResponse::new(result.success_message))).into_response()
        }
        Err(e) => {
            error!("Failed to extend checklist: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Mark the given day complete
pub async fn toggle_checklist_day(
    State(state): State<AppState>,
    Actor(_actor): Actor,
    Path(checklist_id): Path<String>,
    Query(query): Query<ToggleChecklistRequest>,
) -> impl IntoResponse {
    info!("PATCH /api/checklists/{}/toggle - query: {:?}", checklist_id, query);

    let command = ChecklistMapper::to_toggle_command(checklist_id, query);

    match state.checklist_service.toggle_checklist_day(command).await {
        Ok(result) => (StatusCode::OK, Json(result.success_message)).into_response(),
        Err(e) => {
            error!("Failed to toggle checklist day: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn delete_checklist(
    State(state): State<AppState>,
    Actor(_actor): Actor,
    Path(checklist_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/checklists/{}", checklist_id);

    let command = DeleteChecklistCommand { checklist_id };

    match state.checklist_service.delete_checklist(command).await {
        Ok(message) => (StatusCode::OK, Json(MessageResponse::new(message))).into_response(),
        Err(e) => {
            error!("Failed to delete checklist: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Paged listing, newest first
pub async fn list_checklists(
    State(state): State<AppState>,
    Actor(_actor): Actor,
    Query(query): Query<ChecklistListRequest>,
) -> impl IntoResponse {
    info!("GET /api/checklists - query: {:?}", query);

    let query = ChecklistMapper::to_list_query(query);

    match state.checklist_service.list_checklists(query).await {
        Ok(result) => (StatusCode::OK, Json(ChecklistMapper::to_list_response(result))).into_response(),
        Err(e) => {
            error!("Failed to list checklists: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Checklists owned by the caller
pub async fn list_my_checklists(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Query(query): Query<MyChecklistsRequest>,
) -> impl IntoResponse {
    info!("GET /api/checklists/me - user: {}, query: {:?}", actor.id, query);

    let query = ChecklistMapper::to_my_query(actor.id, query);

    match state.checklist_service.list_my_checklists(query).await {
        Ok(views) => (StatusCode::OK, Json(ChecklistMapper::to_dto_list(views))).into_response(),
        Err(e) => {
            error!("Failed to list own checklists: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
