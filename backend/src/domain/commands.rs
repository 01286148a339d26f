//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined in
//! the `shared` crate, plus path parameters and the acting user, onto these.
//!
//! Raw user input stays as `Option<String>` here; services own validation.

pub mod checklist {
    use crate::domain::models::checklist::Checklist;
    use crate::domain::models::user::User;

    /// Input for creating a checklist for `owner_id`.
    #[derive(Debug, Clone)]
    pub struct CreateChecklistCommand {
        pub owner_id: String,
        pub title: Option<String>,
        pub sheet_url: Option<String>,
        pub start_date: Option<String>,
        pub upto_date: Option<String>,
        pub actor_id: String,
    }

    /// Input for editing a checklist's descriptive fields and owner.
    #[derive(Debug, Clone)]
    pub struct EditChecklistCommand {
        pub checklist_id: String,
        pub title: Option<String>,
        pub sheet_url: Option<String>,
        pub owner_id: Option<String>,
    }

    /// Input for appending boxes through `upto_date`.
    #[derive(Debug, Clone)]
    pub struct ExtendChecklistCommand {
        pub checklist_id: String,
        pub upto_date: Option<String>,
        pub actor_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteChecklistCommand {
        pub checklist_id: String,
    }

    /// Input for marking the box for `date` as completed.
    #[derive(Debug, Clone)]
    pub struct ToggleChecklistDayCommand {
        pub checklist_id: String,
        pub date: Option<String>,
    }

    /// Query parameters for the paged listing.
    #[derive(Debug, Clone, Default)]
    pub struct ChecklistListQuery {
        pub limit: Option<String>,
        pub page: Option<String>,
        pub owner_id: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// Query parameters for listing the actor's own checklists.
    #[derive(Debug, Clone)]
    pub struct MyChecklistsQuery {
        pub actor_id: String,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// A checklist with its user references resolved.
    #[derive(Debug, Clone)]
    pub struct ChecklistView {
        pub checklist: Checklist,
        pub owner: Option<User>,
        pub created_by: Option<User>,
        pub updated_by: Option<User>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateChecklistResult {
        pub checklist_id: String,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct ExtendChecklistResult {
        pub appended: usize,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct ToggleChecklistDayResult {
        pub marked: usize,
        pub success_message: String,
    }

    /// Result of the paged listing. `total` counts pages, not checklists.
    #[derive(Debug, Clone)]
    pub struct ChecklistListResult {
        pub checklists: Vec<ChecklistView>,
        pub total: u64,
        pub page: u32,
        pub limit: u32,
    }
}

pub mod user {
    /// Input for creating a new user.
    #[derive(Debug, Clone)]
    pub struct CreateUserCommand {
        pub name: Option<String>,
        pub email: Option<String>,
    }
}
