//! The authenticated actor an access check is made for.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// A user and the role they act under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requester {
    pub user_id: uuid::Uuid,
    pub role: Role,
}

impl Requester {
    #[must_use]
    pub const fn new(user_id: uuid::Uuid, role: Role) -> Self {
        Self { user_id, role }
    }
}

impl std::fmt::Display for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.role, self.user_id)
    }
}
