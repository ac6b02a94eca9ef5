//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space; empty when neither is set.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Best available label: `@username`, else `First Last (ID: n)`, else `User (ID: n)`.
    pub fn display_name(&self) -> String {
        if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            return format!("@{}", username);
        }
        let name = self.full_name();
        if name.is_empty() {
            format!("User (ID: {})", self.id)
        } else {
            format!("{} (ID: {})", name, self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: Option<&str>, first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: 42,
            username: username.map(String::from),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    #[test]
    fn test_display_name_prefers_username() {
        assert_eq!(user(Some("nomis"), Some("A"), None).display_name(), "@nomis");
    }

    #[test]
    fn test_display_name_falls_back_to_names() {
        assert_eq!(
            user(None, Some("Ada"), Some("Lovelace")).display_name(),
            "Ada Lovelace (ID: 42)"
        );
        assert_eq!(user(Some(""), Some("Ada"), None).display_name(), "Ada (ID: 42)");
    }

    #[test]
    fn test_display_name_without_any_name() {
        assert_eq!(user(None, None, None).display_name(), "User (ID: 42)");
    }
}
