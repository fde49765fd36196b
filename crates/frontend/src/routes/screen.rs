use contracts::domain::user::UserRole;

/// The screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Bookings,
    Menu,
    Categories,
    Tables,
    TableFood,
    Bills,
    Users,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Dashboard,
        Screen::Bookings,
        Screen::Menu,
        Screen::Categories,
        Screen::Tables,
        Screen::TableFood,
        Screen::Bills,
        Screen::Users,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Bookings => "Bookings",
            Screen::Menu => "Menu",
            Screen::Categories => "Categories",
            Screen::Tables => "Tables",
            Screen::TableFood => "Table Food",
            Screen::Bills => "Bills",
            Screen::Users => "Users",
        }
    }

    /// Whether `role` may see this screen in the sidebar and open it.
    pub fn visible_to(self, role: UserRole) -> bool {
        match self {
            Screen::Users => role.can_manage_users(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_screen_is_manager_only() {
        assert!(Screen::Users.visible_to(UserRole::Manager));
        assert!(!Screen::Users.visible_to(UserRole::Staff));
        assert!(!Screen::Users.visible_to(UserRole::Customer));
        assert!(Screen::Bills.visible_to(UserRole::Staff));
    }
}
