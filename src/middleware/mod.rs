pub mod auth;
pub mod gate;
pub mod identity;
pub mod response;

pub use auth::authenticate;
pub use gate::require_gate;
pub use identity::CurrentIdentity;
pub use response::{ApiResponse, ApiResult};
