use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Authenticated user as reported by `/api/system/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// Name shown in the dashboard header.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user = UserInfo {
            id: "u1".into(),
            username: "wanjiku".into(),
            full_name: None,
            email: None,
            is_admin: false,
        };
        assert_eq!(user.display_name(), "wanjiku");

        user.full_name = Some("  ".into());
        assert_eq!(user.display_name(), "wanjiku");

        user.full_name = Some("Wanjiku Kamau".into());
        assert_eq!(user.display_name(), "Wanjiku Kamau");
    }

    #[test]
    fn is_admin_defaults_to_false() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"1","username":"a","full_name":null,"email":null}"#)
                .unwrap();
        assert!(!user.is_admin);
    }
}
