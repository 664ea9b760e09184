//! Browser Session Storage
//!
//! Tokens and the signed-in user record live in `localStorage` under
//! `token`, `adminToken` and `user`. Missing browser globals read as
//! "no session".

use serde::Deserialize;

pub const USER_TOKEN_KEY: &str = "token";
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
pub const USER_KEY: &str = "user";

/// Signed-in user as stored by the login flow
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref().is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Non-blank value for `key`
pub fn get(key: &str) -> Option<String> {
    let value = storage()?.get_item(key).ok().flatten()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn user_token() -> Option<String> {
    get(USER_TOKEN_KEY)
}

/// `adminToken`, or the user token when the stored user is an admin
pub fn admin_token() -> Option<String> {
    get(ADMIN_TOKEN_KEY).or_else(|| {
        current_user()
            .filter(SessionUser::is_admin)
            .and_then(|_| user_token())
    })
}

pub fn current_user() -> Option<SessionUser> {
    get(USER_KEY).and_then(|raw| parse_user(&raw))
}

fn parse_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            web_sys::console::warn_1(&format!("[Session] Ignoring malformed user record: {}", e).into());
            None
        }
    }
}

pub fn is_admin() -> bool {
    admin_token().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_role() {
        let user: SessionUser = serde_json::from_str(r#"{"name":"Ada","role":"Admin","_id":7}"#).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.name.as_deref(), Some("Ada"));

        let user: SessionUser = serde_json::from_str(r#"{"name":"Bo"}"#).unwrap();
        assert!(!user.is_admin());
    }
}
