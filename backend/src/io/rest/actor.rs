use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::domain::models::user::User;
use crate::io::rest::error::ApiError;
use crate::AppState;

/// Header carrying the id of the calling user
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user making the request
#[derive(Debug, Clone)]
pub struct Actor(pub User);

#[axum::async_trait]
impl FromRequestParts<AppState> for Actor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("please log in".to_string()))?;

        match state.user_service.find_user(user_id).await? {
            Some(user) => Ok(Actor(user)),
            None => {
                warn!("Rejected request from unknown user {}", user_id);
                Err(ApiError::Unauthorized("user not recognised".to_string()))
            }
        }
    }
}
