use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::rbac::{Gate, Identity};

/// Route layer that runs a [`Gate`] against the identity left by
/// [`super::authenticate`].
///
/// Use with `axum::middleware::from_fn_with_state(gate, require_gate)`.
pub async fn require_gate(State(gate): State<Gate>, request: Request, next: Next) -> Response {
    let identity = request.extensions().get::<Identity>();

    match gate.check(identity) {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}
