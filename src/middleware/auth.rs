use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::decode_jwt;
use crate::error::ApiError;
use crate::rbac::Identity;

/// Bearer-token authentication.
///
/// A request without an `Authorization` header continues anonymously and is
/// left for the route's gate to reject. A header that is present but does not
/// carry a valid token is rejected here.
pub async fn authenticate(mut request: Request, next: Next) -> Response {
    match identity_from_headers(request.headers()) {
        Ok(Some(identity)) => {
            tracing::debug!("Authenticated user '{}' as '{}'", identity.id, identity.role);
            request.extensions_mut().insert(identity);
        }
        Ok(None) => {}
        Err(err) => return err.into_response(),
    }

    next.run(request).await
}

fn identity_from_headers(headers: &HeaderMap) -> Result<Option<Identity>, ApiError> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = extract_bearer(auth_header.to_str().ok()).map_err(|reason| {
        tracing::warn!("Rejected Authorization header: {}", reason);
        ApiError::unauthorized("Invalid token")
    })?;

    let claims = decode_jwt(token).map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        ApiError::from(e)
    })?;

    Ok(Some(Identity::from(claims)))
}

fn extract_bearer(value: Option<&str>) -> Result<&str, &'static str> {
    let value = value.ok_or("header is not valid ASCII")?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or("header must use Bearer token format")?
        .trim();

    if token.is_empty() {
        return Err("empty bearer token");
    }

    Ok(token)
}
