//! User domain entity.

use serde::{Deserialize, Serialize};

/// Identifier generated by the credential store
pub type UserId = i32;

/// Registered portal user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Free-text role label (`staff`, `doctor`, `patient` from the form)
    pub role: String,
}

/// Dashboard heading for a role, e.g. `Doctor Dashboard`.
pub fn dashboard_title(role: &str) -> String {
    format!("{} Dashboard", capitalize(role))
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "hashed".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_dashboard_title() {
        assert_eq!(dashboard_title("doctor"), "Doctor Dashboard");
        assert_eq!(dashboard_title("staff"), "Staff Dashboard");
        assert_eq!(dashboard_title("patient"), "Patient Dashboard");
    }

    #[test]
    fn test_free_text_role_title() {
        assert_eq!(dashboard_title("nURSE"), "Nurse Dashboard");
        assert_eq!(dashboard_title(""), " Dashboard");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("doctor"), "Doctor");
        assert_eq!(capitalize("DOCTOR"), "Doctor");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_string(&user_with_role("doctor")).unwrap();
        assert!(!json.contains("hashed"));
        assert!(json.contains("alice"));
    }
}
