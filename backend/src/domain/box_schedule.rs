//! Day-box scheduling for checklists.
//!
//! Pure date arithmetic over a checklist's box list: generating one box per
//! calendar day, appending days after the last box, stamping a day as
//! completed, and narrowing boxes to a display window. Nothing here touches
//! storage; callers attach the results to a checklist and persist it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::checklist::ChecklistBox;

/// Parse a calendar day from user input.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the day in the timestamp's own
/// offset), and naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// One pending box per day in `[start, upto]`, inclusive of both ends.
/// Empty when `start` is after `upto`.
pub fn generate_boxes(start: NaiveDate, upto: NaiveDate) -> Vec<ChecklistBox> {
    start
        .iter_days()
        .take_while(|day| *day <= upto)
        .map(ChecklistBox::pending)
        .collect()
}

/// The day an extension would start from: the day after the last box.
pub fn next_box_date(boxes: &[ChecklistBox]) -> Option<NaiveDate> {
    boxes.last().and_then(|b| b.desired_date.succ_opt())
}

/// Append pending boxes after the last existing box through `upto`.
///
/// Returns how many boxes were appended. A list with no boxes has no anchor
/// day and is left untouched, as is any `upto` before the next day.
pub fn extend_boxes(boxes: &mut Vec<ChecklistBox>, upto: NaiveDate) -> usize {
    let Some(next) = next_box_date(boxes) else {
        return 0;
    };
    let appended = generate_boxes(next, upto);
    let count = appended.len();
    boxes.extend(appended);
    count
}

/// Stamp every box whose day equals `date` as completed at `at`.
///
/// Returns the number of boxes stamped. Already-completed boxes are
/// re-stamped; there is no way back to pending.
pub fn mark_day_complete(boxes: &mut [ChecklistBox], date: NaiveDate, at: DateTime<Utc>) -> usize {
    let mut marked = 0;
    for b in boxes.iter_mut().filter(|b| b.desired_date == date) {
        b.mark_completed(at);
        marked += 1;
    }
    marked
}

/// Inclusive day range used to narrow the boxes shown for a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a window from optional query bounds.
    ///
    /// The window only applies when both bounds are present; a single bound
    /// is ignored. A bound that is present but not a date is rejected.
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> DomainResult<Option<Self>> {
        let (Some(start), Some(end)) = (non_blank(start), non_blank(end)) else {
            return Ok(None);
        };

        let start = parse_calendar_date(start)
            .ok_or_else(|| DomainError::validation("please provide valid start date"))?;
        let end = parse_calendar_date(end)
            .ok_or_else(|| DomainError::validation("please provide valid end date"))?;

        Ok(Some(Self::new(start, end)))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Drop boxes outside the window, keeping the order of the rest
    pub fn retain_boxes(&self, boxes: &mut Vec<ChecklistBox>) {
        boxes.retain(|b| self.contains(b.desired_date));
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
