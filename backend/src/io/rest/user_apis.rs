//! # REST API for the User Directory

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::CreateUserRequest;
use tracing::{error, info};

use crate::io::rest::error::ApiError;
use crate::io::rest::json_body::JsonBody;
use crate::io::rest::mappers::user_mapper::UserMapper;
use crate::AppState;

/// Create a router for user related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> impl IntoResponse {
    info!("POST /api/users - request: {:?}", request);

    let command = UserMapper::to_create_command(request);

    match state.user_service.create_user(command).await {
        Ok(user) => (StatusCode::CREATED, Json(UserMapper::to_dto(user))).into_response(),
        Err(e) => {
            error!("Failed to create user: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_user(State(state): State<AppState>, Path(user_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/users/{}", user_id);

    match state.user_service.get_user(&user_id).await {
        Ok(user) => (StatusCode::OK, Json(UserMapper::to_dto(user))).into_response(),
        Err(e) => {
            error!("Failed to get user: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/users");

    match state.user_service.list_users().await {
        Ok(users) => (StatusCode::OK, Json(UserMapper::to_list_response(users))).into_response(),
        Err(e) => {
            error!("Failed to list users: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
