//! Role-based authorization gate.
//!
//! A [`Gate`] is configured once when routes are built and then consulted for
//! every request. Deciding is a pure function of the configured role(s) and
//! the identity handed in, so a gate can be cloned into any number of route
//! layers and evaluated concurrently.

use crate::error::ApiError;

use super::identity::Identity;
use super::role::Role;

pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Exactly one role may pass
    Only(Role),
    /// Any role in the list may pass; order is kept for the rejection message
    AnyOf(Vec<Role>),
}

/// Outcome of evaluating a gate against one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Unauthenticated,
    Forbidden { message: String },
}

impl Gate {
    pub fn only(role: Role) -> Self {
        Gate::Only(role)
    }

    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Gate::AnyOf(roles.into_iter().collect())
    }

    pub fn decide(&self, identity: Option<&Identity>) -> AccessDecision {
        // Presence first: an anonymous caller is always told to log in
        let Some(identity) = identity else {
            return AccessDecision::Unauthenticated;
        };

        match self {
            Gate::Only(role) if role.matches(&identity.role) => AccessDecision::Allow,
            Gate::Only(role) => AccessDecision::Forbidden {
                message: format!(
                    "Access denied. Only {}s can perform this action.",
                    role.label()
                ),
            },
            Gate::AnyOf(roles) if roles.iter().any(|r| r.matches(&identity.role)) => {
                AccessDecision::Allow
            }
            Gate::AnyOf(roles) => AccessDecision::Forbidden {
                message: format!("Access denied. Required roles: {}", join_roles(roles)),
            },
        }
    }

    pub fn check(&self, identity: Option<&Identity>) -> Result<(), ApiError> {
        self.decide(identity).into_result()
    }
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        match self {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Unauthenticated => Err(ApiError::unauthorized(AUTHENTICATION_REQUIRED)),
            AccessDecision::Forbidden { message } => Err(ApiError::forbidden(message)),
        }
    }
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// Fixed-role gates

pub fn require_financial_officer() -> Gate {
    Gate::only(Role::FinancialOfficer)
}

pub fn require_project_engineer() -> Gate {
    Gate::only(Role::ProjectEngineer)
}

pub fn require_chief_engineer() -> Gate {
    Gate::only(Role::ChiefEngineer)
}

pub fn require_land_officer() -> Gate {
    Gate::only(Role::LandOfficer)
}

// Role-group gates

pub fn require_any_role(roles: impl IntoIterator<Item = Role>) -> Gate {
    Gate::any_of(roles)
}

pub fn require_engineers() -> Gate {
    Gate::any_of([Role::ChiefEngineer, Role::ProjectEngineer])
}

pub fn require_officers() -> Gate {
    Gate::any_of([Role::FinancialOfficer, Role::LandOfficer])
}

pub fn require_all() -> Gate {
    Gate::any_of(Role::ALL)
}
