//! # Domain Module
//!
//! Business logic for the checklist tracker, independent of HTTP and of the
//! storage engine.
//!
//! ## Module Organization
//!
//! - **models**: checklist, box and user entities
//! - **box_schedule**: pure date logic for generating, extending, completing
//!   and windowing day boxes
//! - **checklist_service**: checklist lifecycle and listings
//! - **user_service**: the user directory that owners and actors resolve through
//! - **commands**: input and result types for the services
//! - **error**: `DomainError`, shared by every service
//!
//! ## Core Concepts
//!
//! - **Checklist**: a tracked run of days owned by one user
//! - **Box**: one calendar day in a checklist, pending until marked complete
//! - **Actor**: the user performing an operation, passed in explicitly

pub mod box_schedule;
pub mod checklist_service;
pub mod commands;
pub mod error;
pub mod models;
pub mod user_service;

pub use checklist_service::ChecklistService;
pub use error::{DomainError, DomainResult};
pub use user_service::UserService;
