use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A per-owner tracked set of daily completion records.
///
/// This is the persisted document shape: `boxes` is stored in order and
/// always ascends by `desired_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checklist {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub sheet_url: String,
    pub boxes: Vec<ChecklistBox>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_by: String,
}

impl Checklist {
    /// Date of the last box, if any
    pub fn last_desired_date(&self) -> Option<NaiveDate> {
        self.boxes.last().map(|b| b.desired_date)
    }

    pub fn completed_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_completed()).count()
    }
}

/// One calendar day's completion record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistBox {
    pub desired_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<DateTime<Utc>>,
}

/// Lifecycle of a single box. The only transition is Pending -> Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    Pending,
    Completed,
}

impl ChecklistBox {
    pub fn pending(desired_date: NaiveDate) -> Self {
        Self {
            desired_date,
            actual_date: None,
        }
    }

    pub fn state(&self) -> BoxState {
        match self.actual_date {
            Some(_) => BoxState::Completed,
            None => BoxState::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == BoxState::Completed
    }

    /// Stamp the box as completed at `at`. Overwrites an earlier stamp.
    pub fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.actual_date = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_box_state_transitions() {
        let mut b = ChecklistBox::pending(day(1));
        assert_eq!(b.state(), BoxState::Pending);
        assert!(!b.is_completed());

        let first = Utc::now();
        b.mark_completed(first);
        assert_eq!(b.state(), BoxState::Completed);
        assert_eq!(b.actual_date, Some(first));

        let second = first + chrono::Duration::seconds(5);
        b.mark_completed(second);
        assert_eq!(b.actual_date, Some(second));
    }

    #[test]
    fn test_document_round_trip_keeps_box_order() {
        let now = Utc::now();
        let mut boxes = vec![
            ChecklistBox::pending(day(1)),
            ChecklistBox::pending(day(2)),
            ChecklistBox::pending(day(3)),
        ];
        boxes[1].mark_completed(now);

        let checklist = Checklist {
            id: "c1".to_string(),
            owner_id: "u1".to_string(),
            title: "Jan QC".to_string(),
            sheet_url: "http://x".to_string(),
            boxes,
            created_at: now,
            updated_at: now,
            created_by: "u2".to_string(),
            updated_by: "u2".to_string(),
        };

        let json = serde_json::to_string(&checklist).unwrap();
        assert!(json.contains(r#""desired_date":"2024-01-01""#));

        let parsed: Checklist = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, checklist);
        assert_eq!(parsed.last_desired_date(), Some(day(3)));
        assert_eq!(parsed.completed_count(), 1);
    }
}
