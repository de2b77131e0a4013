use axum::{
    extract::MatchedPath,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::rbac::Role;

/// GET / - service description and role catalogue
pub async fn root() -> ApiResponse<Value> {
    let roles: Vec<Value> = Role::ALL
        .iter()
        .map(|role| json!({ "role": role.as_str(), "label": role.label() }))
        .collect();

    ApiResponse::success(json!({
        "name": "Land Administration API",
        "version": env!("CARGO_PKG_VERSION"),
        "roles": roles,
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "auth": "/api/auth/whoami (any authenticated user)",
            "projects": "/api/projects/* (engineers)",
            "plans": "/api/plans/* (project engineer creates, authenticated users read)",
            "lots": "/api/lots/* (land officer edits, financial officer values)",
            "compensation": "/api/compensation/* (financial officer writes, authenticated users read)",
            "messages": "/api/messages/* (any authenticated user)",
            "stats": "/api/stats/dashboard (public)",
            "assignments": "/api/assignments/* (engineers assign, land officers view)",
            "prediction": "/api/prediction/* (engineers)",
        }
    }))
}

/// GET /health - liveness check
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "status": "ok",
                "timestamp": chrono::Utc::now(),
            }
        })),
    )
}

/// GET /api/stats/dashboard - public dashboard figures, no token required
pub async fn dashboard(method: Method, path: MatchedPath) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "method": method.to_string(),
        "route": path.as_str(),
    }))
}

/// Fallback for a known route hit with a method it does not serve
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(format!("Method {} not allowed on this route", method))
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
