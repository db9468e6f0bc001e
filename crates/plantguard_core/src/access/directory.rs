//! In-memory user directory backing the mock login flow.
//!
//! # Invariants
//! - Email lookup is trimmed and case-insensitive.
//! - No password is stored or checked.

use crate::model::user::{Role, User, UserId};
use log::info;

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory with the four demo accounts, one per role.
    pub fn demo() -> Self {
        Self::new(vec![
            demo_user(
                "1",
                "Dr. Sarah Johnson",
                "admin@plantguard.com",
                Role::Admin,
                "Agricultural Research Center",
            ),
            demo_user(
                "2",
                "Mark Chen",
                "approver@plantguard.com",
                Role::Approver,
                "Regional Extension Office",
            ),
            demo_user(
                "3",
                "Maria Rodriguez",
                "dataentry@plantguard.com",
                Role::DataEntry,
                "Field Station Alpha",
            ),
            demo_user(
                "4",
                "John Farmer",
                "user@plantguard.com",
                Role::BasicUser,
                "Green Valley Farm",
            ),
        ])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        let found = self
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email));
        info!(
            "event=user_lookup module=access status={}",
            if found.is_some() { "ok" } else { "not_found" }
        );
        found
    }
}

fn demo_user(id: &str, name: &str, email: &str, role: Role, location: &str) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        location: Some(location.to_string()),
    }
}
