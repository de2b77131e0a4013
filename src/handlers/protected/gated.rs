use axum::{extract::MatchedPath, http::Method};
use serde::Serialize;

use crate::middleware::{ApiResponse, CurrentIdentity};
use crate::rbac::Identity;

#[derive(Debug, Serialize)]
pub struct Forwarded {
    pub method: String,
    pub route: String,
    pub user: Identity,
}

/// Acknowledges a request that passed its route gate
pub async fn forward(
    method: Method,
    path: MatchedPath,
    CurrentIdentity(user): CurrentIdentity,
) -> ApiResponse<Forwarded> {
    ApiResponse::success(Forwarded {
        method: method.to_string(),
        route: path.as_str().to_string(),
        user,
    })
}
