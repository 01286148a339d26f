//! # Checklist Tracker Backend
//!
//! REST service for tracking per-owner checklists of daily completion boxes.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, mappers, actor extraction)
//!     ↓
//! Domain Layer (services, box schedule, models)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{ChecklistService, UserService};
use crate::io::rest::{checklist_apis, user_apis};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub checklist_service: ChecklistService<DbConnection>,
    pub user_service: UserService<DbConnection>,
}

impl AppState {
    pub fn new(db_conn: DbConnection) -> Self {
        let db_conn = Arc::new(db_conn);
        let user_service = UserService::new(db_conn.clone());
        let checklist_service = ChecklistService::new(db_conn, user_service.clone());

        Self {
            checklist_service,
            user_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/checklists", checklist_apis::router())
        .nest("/users", user_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
