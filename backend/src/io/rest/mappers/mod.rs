pub mod checklist_mapper;
pub mod user_mapper;

use chrono::{DateTime, SecondsFormat, Utc};

/// Wire format for instants
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
