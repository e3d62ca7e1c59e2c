use serde::{Deserialize, Serialize};

use crate::pii::Masked;

/// A registered passenger account.
///
/// `username` is the login handle; accounts can also log in with `mobile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub id: u64,
    pub username: String,
    pub mobile: String,
    pub email: String,
    pub password: Masked<String>,
    pub name: String,
}

impl UserAccount {
    /// True if `identifier` is this account's handle or mobile number.
    pub fn is_identified_by(&self, identifier: &str) -> bool {
        self.username == identifier || self.mobile == identifier
    }

    /// Plaintext comparison, the accounts are demo data.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose() == candidate
    }

    /// True if this account already owns the given mobile or email.
    pub fn conflicts_with(&self, mobile: &str, email: &str) -> bool {
        self.mobile == mobile || self.email == email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> UserAccount {
        UserAccount {
            id: 1,
            username: "demo123".to_string(),
            mobile: "9876543210".to_string(),
            email: "demo@example.com".to_string(),
            password: Masked::from("Demo@123"),
            name: "Demo User".to_string(),
        }
    }

    #[test]
    fn test_identified_by_handle_or_mobile() {
        let account = demo();
        assert!(account.is_identified_by("demo123"));
        assert!(account.is_identified_by("9876543210"));
        assert!(!account.is_identified_by("demo@example.com"));
    }

    #[test]
    fn test_conflict_on_either_field() {
        let account = demo();
        assert!(account.conflicts_with("9876543210", "other@example.com"));
        assert!(account.conflicts_with("1111111111", "demo@example.com"));
        assert!(!account.conflicts_with("1111111111", "other@example.com"));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", demo());
        assert!(!rendered.contains("Demo@123"));
    }
}
