//! # Storage Module
//!
//! Handles all data persistence for the checklist tracker.
//!
//! The domain layer only sees the traits in [`traits`]; [`DbConnection`] is
//! the SQLite implementation and hands out repositories through
//! [`Connection`]. Checklists are stored as JSON documents, users as plain
//! rows.

pub mod connection;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use connection::DbConnection;
pub use repositories::{ChecklistRepository, UserRepository};
pub use traits::{ChecklistFilter, ChecklistStorage, Connection, UserStorage};
