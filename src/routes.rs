//! Route table. Flows return the `Route` to navigate to instead of navigating
//! themselves; the CLI reports it and stops.

use std::fmt;

pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const USER_MANAGEMENT: &str = "/user-management";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    UserManagement,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => paths::LOGIN,
            Self::Register => paths::REGISTER,
            Self::UserManagement => paths::USER_MANAGEMENT,
        }
    }

    /// Protected routes render only behind the route guard.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::UserManagement)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_user_management_is_protected() {
        assert!(Route::UserManagement.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Register.is_protected());
    }
}
