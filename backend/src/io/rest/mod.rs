//! # REST API Interface Layer
//!
//! HTTP endpoints for checklists and users, all nested under `/api`.
//!
//! - `checklist_apis`: create, edit, extend, toggle, delete and list
//! - `user_apis`: the user directory used to resolve owners and actors
//! - `actor`: resolves the calling user from the `x-user-id` header
//! - `error`: domain error to HTTP status translation
//! - `json_body`: JSON body extractor reporting bad input as 400

pub mod actor;
pub mod checklist_apis;
pub mod error;
pub mod json_body;
pub mod mappers;
pub mod user_apis;

pub use actor::{Actor, USER_ID_HEADER};
pub use error::ApiError;
pub use json_body::JsonBody;
