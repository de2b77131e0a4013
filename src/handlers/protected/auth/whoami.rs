use serde_json::{json, Value};

use crate::middleware::{ApiResponse, CurrentIdentity};

/// GET /api/auth/whoami - the identity carried by the caller's token
pub async fn whoami(CurrentIdentity(user): CurrentIdentity) -> ApiResponse<Value> {
    let label = user.known_role().map(|role| role.label());

    ApiResponse::success(json!({
        "id": user.id,
        "role": user.role,
        "label": label,
    }))
}
