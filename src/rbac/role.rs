use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Staff roles recognised by the land administration API.
///
/// Roles are flat: there is no hierarchy and no inheritance, a gate only ever
/// compares for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    FinancialOfficer,
    ProjectEngineer,
    ChiefEngineer,
    LandOfficer,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::ChiefEngineer,
        Role::ProjectEngineer,
        Role::FinancialOfficer,
        Role::LandOfficer,
    ];

    /// Wire value carried in the `role` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::FinancialOfficer => "financial_officer",
            Role::ProjectEngineer => "project_engineer",
            Role::ChiefEngineer => "chief_engineer",
            Role::LandOfficer => "land_officer",
        }
    }

    /// Human readable name used in rejection messages
    pub fn label(&self) -> &'static str {
        match self {
            Role::FinancialOfficer => "Financial Officer",
            Role::ProjectEngineer => "Project Engineer",
            Role::ChiefEngineer => "Chief Engineer",
            Role::LandOfficer => "Land Officer",
        }
    }

    pub fn matches(&self, role: &str) -> bool {
        self.as_str() == role
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.matches(s))
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}
