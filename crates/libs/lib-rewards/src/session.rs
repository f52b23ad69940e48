//! # Session and Role
//!
//! The session is the only cross-cutting state of the portal: which email, if
//! any, is logged in for the current page load. It is never persisted.
//!
//! Role is derived, never stored. The admin check is a plain string comparison
//! with [`ADMIN_EMAIL`]; the backend never confirms it, so it only gates what
//! the navigation shows.

/// The single address treated as an administrator.
pub const ADMIN_EMAIL: &str = "admin@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    Member,
    Admin,
}

impl Role {
    /// Exact, case-sensitive match; no trimming or normalization.
    pub fn for_user(user: Option<&str>) -> Self {
        match user {
            None => Role::Anonymous,
            Some(ADMIN_EMAIL) => Role::Admin,
            Some(_) => Role::Member,
        }
    }

    pub fn is_logged_in(self) -> bool {
        !matches!(self, Role::Anonymous)
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Promote `email` to the current user, exactly as entered.
    pub fn sign_in(&mut self, email: impl Into<String>) {
        let email = email.into();
        tracing::info!(email = %email, "Session user set");
        self.user = Some(email);
    }

    pub fn role(&self) -> Role {
        Role::for_user(self.user())
    }

    pub fn is_logged_in(&self) -> bool {
        self.role().is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }
}
