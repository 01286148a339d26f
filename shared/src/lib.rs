use serde::{Deserialize, Serialize};

/// Represents a user of the checklist tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

/// Request for creating a new user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response containing a list of users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// One calendar day's completion record within a checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistBox {
    /// Calendar day this box represents (YYYY-MM-DD)
    pub desired_date: String,
    /// Completion instant (RFC 3339), absent while the day is pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<String>,
}

/// A checklist with its user references resolved for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    /// `None` when the owner no longer exists
    pub owner: Option<User>,
    pub title: String,
    pub sheet_url: String,
    pub boxes: Vec<ChecklistBox>,
    pub created_at: String,
    pub updated_at: String,
    pub created_by: Option<User>,
    pub updated_by: Option<User>,
}

/// Request body for creating a checklist. The owner id travels in the path.
///
/// Every field is optional on the wire so that missing values surface as
/// validation messages instead of deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateChecklistRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sheet_url: Option<String>,
    /// First day of the range (YYYY-MM-DD or RFC 3339)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day of the range, inclusive (YYYY-MM-DD or RFC 3339)
    #[serde(default)]
    pub upto_date: Option<String>,
}

/// Response after creating a checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateChecklistResponse {
    pub message: String,
    pub checklist_id: String,
}

/// Request body for editing a checklist
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditChecklistRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sheet_url: Option<String>,
    /// New owner id; ignored when it does not resolve to a user
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Request body for appending more boxes to a checklist
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtendChecklistRequest {
    #[serde(default)]
    pub upto_date: Option<String>,
}

/// Query string for the paged checklist listing
///
/// `limit` and `page` are kept as raw strings so non-numeric input can be
/// reported as a bad request with a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChecklistListRequest {
    pub limit: Option<String>,
    pub page: Option<String>,
    /// Owner id filter
    pub id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Query string for listing the caller's own checklists
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MyChecklistsRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Query string for marking a day complete
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToggleChecklistRequest {
    pub date: Option<String>,
}

/// Response for the paged checklist listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistListResponse {
    pub checklists: Vec<Checklist>,
    /// Number of pages available at the requested limit
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Generic acknowledgment body, also used for error responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let request: CreateChecklistRequest =
            serde_json::from_str(r#"{"title": "Jan QC"}"#).unwrap();

        assert_eq!(request.title.as_deref(), Some("Jan QC"));
        assert!(request.sheet_url.is_none());
        assert!(request.start_date.is_none());
        assert!(request.upto_date.is_none());
    }

    #[test]
    fn test_pending_box_omits_actual_date() {
        let pending = ChecklistBox {
            desired_date: "2024-01-01".to_string(),
            actual_date: None,
        };

        let json = serde_json::to_value(&pending).unwrap();
        assert_eq!(json, serde_json::json!({"desired_date": "2024-01-01"}));

        let parsed: ChecklistBox = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, pending);
    }

    #[test]
    fn test_message_response() {
        let message = MessageResponse::new("Checklist deleted");
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"message":"Checklist deleted"}"#
        );
    }
}
