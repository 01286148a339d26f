pub mod checklist;
pub mod user;

use uuid::Uuid;

/// Generate a new record identifier
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Whether `id` is a syntactically valid record identifier
pub fn is_valid_id(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_valid_and_unique() {
        let a = generate_id();
        let b = generate_id();
        assert!(is_valid_id(&a));
        assert!(is_valid_id(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_malformed_ids() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("not-an-id"));
        assert!(!is_valid_id("507f1f77bcf86cd799439011"));
    }
}
