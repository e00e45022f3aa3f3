use serde::{Deserialize, Serialize};

/// Minimum admin password length accepted by the sign-up form.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

impl AdminLoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, String> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err("Please fill all the fields!".into());
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AdminSignUpRequest {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, String> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err("Please fill all the fields!".into());
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// The signed-in admin, as held in memory and in local storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl AdminIdentity {
    pub fn is_admin(&self) -> bool {
        !self.id.is_empty() && self.role.eq_ignore_ascii_case("admin")
    }

    /// Up to two initials for the header avatar.
    pub fn initials(&self) -> String {
        let source = if self.name.trim().is_empty() {
            self.email.as_str()
        } else {
            self.name.as_str()
        };
        source
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: AdminIdentity,
}

/// Answer of `GET /auth/test-session`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCheckResponse {
    #[serde(default)]
    pub has_user: bool,
    #[serde(default)]
    pub user: Option<AdminIdentity>,
}

impl SessionCheckResponse {
    /// The cookie belongs to a live admin account.
    pub fn valid_admin(&self) -> Option<&AdminIdentity> {
        if !self.has_user {
            return None;
        }
        self.user.as_ref().filter(|u| u.is_admin())
    }
}

/// Body-less success envelope of mutations and logout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        assert!(AdminLoginRequest::new(" ", "x").is_err());
        assert!(AdminLoginRequest::new("a@b.c", "").is_err());
        assert_eq!(AdminLoginRequest::new(" a@b.c ", "pw").unwrap().email, "a@b.c");
    }

    #[test]
    fn signup_enforces_password_length() {
        assert_eq!(
            AdminSignUpRequest::new("Ann", "a@b.c", "12345").unwrap_err(),
            "Password must be at least 6 characters."
        );
        assert!(AdminSignUpRequest::new("Ann", "a@b.c", "123456").is_ok());
    }

    #[test]
    fn session_check_requires_admin_role() {
        let ok: SessionCheckResponse = serde_json::from_str(
            r#"{"hasUser":true,"user":{"_id":"1","name":"Ann","email":"a@b.c","role":"admin"}}"#,
        )
        .unwrap();
        assert_eq!(ok.valid_admin().map(|u| u.id.as_str()), Some("1"));

        let customer: SessionCheckResponse =
            serde_json::from_str(r#"{"hasUser":true,"user":{"id":"2","role":"user"}}"#).unwrap();
        assert!(customer.valid_admin().is_none());

        let anonymous: SessionCheckResponse = serde_json::from_str(r#"{"hasUser":false}"#).unwrap();
        assert!(anonymous.valid_admin().is_none());
    }

    #[test]
    fn identity_round_trips_through_storage_format() {
        let identity = AdminIdentity {
            id: "1".into(),
            name: "Ann Lee".into(),
            email: "a@b.c".into(),
            role: "admin".into(),
        };
        let stored = serde_json::to_string(&identity).unwrap();
        let restored: AdminIdentity = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, identity);
        assert_eq!(identity.initials(), "AL");
    }
}
