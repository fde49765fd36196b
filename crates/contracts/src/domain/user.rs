use serde::{Deserialize, Serialize};

use crate::domain::status::ActiveStatus;

/// Staff/customer account role. Only managers may open the user
/// management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum UserRole {
    Staff,
    Manager,
    Customer,
}

impl UserRole {
    pub fn code(self) -> i32 {
        match self {
            UserRole::Staff => 0,
            UserRole::Manager => 1,
            UserRole::Customer => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Staff => "Staff",
            UserRole::Manager => "Manager",
            UserRole::Customer => "Customer",
        }
    }

    pub fn can_manage_users(self) -> bool {
        self == UserRole::Manager
    }
}

impl From<i32> for UserRole {
    fn from(code: i32) -> Self {
        match code {
            0 => UserRole::Staff,
            1 => UserRole::Manager,
            _ => UserRole::Customer,
        }
    }
}

impl From<UserRole> for i32 {
    fn from(role: UserRole) -> i32 {
        role.code()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub phone: String,
    pub gmail: String,
    pub password: String,
    pub address: String,
    pub role: UserRole,
    pub status: ActiveStatus,
}

/// Form state for the add-user form.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub fullname: String,
    pub gmail: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub role: Option<UserRole>,
}

/// Wire payload for user creation. New accounts always start active.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub fullname: String,
    pub gmail: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub role: i32,
    pub status: i32,
}

impl NewUser {
    pub fn build(&self) -> Result<CreateUser, String> {
        if self.fullname.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if self.gmail.trim().is_empty() {
            return Err("Email is required".into());
        }
        if self.password.is_empty() {
            return Err("Password is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone is required".into());
        }
        if self.address.trim().is_empty() {
            return Err("Address is required".into());
        }
        let role = self.role.ok_or("Select a role")?;
        Ok(CreateUser {
            fullname: self.fullname.clone(),
            gmail: self.gmail.clone(),
            password: self.password.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            role: role.code(),
            status: ActiveStatus::Active.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> NewUser {
        NewUser {
            fullname: "An Nguyen".into(),
            gmail: "an@example.com".into(),
            password: "secret".into(),
            phone: "0123456789".into(),
            address: "12 Hang Bai".into(),
            role: Some(UserRole::Staff),
        }
    }

    #[test]
    fn new_accounts_start_active() {
        let payload = filled_form().build().unwrap();
        assert_eq!(payload.status, 1);
        assert_eq!(payload.role, 0);
    }

    #[test]
    fn role_must_be_selected() {
        let mut form = filled_form();
        form.role = None;
        assert!(form.build().is_err());
    }

    #[test]
    fn only_managers_manage_users() {
        assert!(UserRole::Manager.can_manage_users());
        assert!(!UserRole::Staff.can_manage_users());
        assert!(!UserRole::Customer.can_manage_users());
        // Unknown role codes fall back to the least privileged role.
        assert_eq!(UserRole::from(9), UserRole::Customer);
    }
}
