pub mod gate;
pub mod identity;
pub mod role;

pub use gate::{
    require_all, require_any_role, require_chief_engineer, require_engineers,
    require_financial_officer, require_land_officer, require_officers, require_project_engineer,
    AccessDecision, Gate, AUTHENTICATION_REQUIRED,
};
pub use identity::Identity;
pub use role::{ParseRoleError, Role};
