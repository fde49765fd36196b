//! The authenticated session handed to every resource-client call site.
//!
//! The session is created at login and destroyed at logout; resource
//! clients receive it explicitly instead of reading credentials from
//! ambient browser storage.

use serde::{Deserialize, Serialize};

use crate::domain::user::UserRole;

/// Identity stored alongside the token (and persisted across reloads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub fullname: String,
    pub role: UserRole,
}

/// Bearer credential plus the identity it was issued for.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub fullname: String,
    pub role: UserRole,
    pub token: String,
}

impl Session {
    pub fn new(user: AuthUser, token: String) -> Self {
        Self {
            user_id: user.id,
            fullname: user.fullname,
            role: user.role,
            token,
        }
    }

    pub fn user(&self) -> AuthUser {
        AuthUser {
            id: self.user_id,
            fullname: self.fullname.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub gmail: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_round_trips() {
        let user = AuthUser {
            id: 7,
            fullname: "Quan Le".into(),
            role: UserRole::Manager,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 7);
        assert_eq!(back.role, UserRole::Manager);
    }
}
