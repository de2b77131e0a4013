use serde::{Deserialize, Serialize};

use super::role::Role;

/// Authenticated principal attached to a request by the authentication layer.
///
/// `role` is kept as the raw claim so that roles outside [`Role`] still reach
/// the gate and are rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub role: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
        }
    }

    /// The known role, if the claim names one
    pub fn known_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

impl From<crate::auth::Claims> for Identity {
    fn from(claims: crate::auth::Claims) -> Self {
        Self {
            id: claims.id,
            role: claims.role,
        }
    }
}
