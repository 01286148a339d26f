pub mod checklist_repository;
pub mod user_repository;

pub use checklist_repository::ChecklistRepository;
pub use user_repository::UserRepository;

use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width RFC 3339 form, so text ordering in SQL matches time ordering
pub(crate) fn sortable_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}
