//! Router assembly: public routes, then the authenticated `/api` tree where
//! each route carries the role gate it needs.

use axum::{
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, patch, post, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, AppConfig, SecurityConfig};
use crate::handlers::{protected, public};
use crate::middleware::{authenticate, require_gate};
use crate::rbac::{
    require_all, require_any_role, require_chief_engineer, require_engineers,
    require_financial_officer, require_land_officer, require_project_engineer, Gate, Role,
};

pub fn app() -> Router {
    app_with(config::config())
}

pub fn app_with(config: &AppConfig) -> Router {
    let mut app = Router::new()
        .route("/", endpoint(get(public::root)))
        .route("/health", endpoint(get(public::health)))
        .route("/api/stats/dashboard", endpoint(get(public::dashboard)))
        .merge(protected_routes())
        .fallback(public::not_found)
        .layer(cors_layer(&config.security));

    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

/// Everything else under `/api`: authenticated, then gated per route.
///
/// Routes without a gate still need a caller: their handlers take
/// `CurrentIdentity`, which answers 401 for anonymous requests.
fn protected_routes() -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(project_routes())
        .merge(plan_routes())
        .merge(lot_routes())
        .merge(compensation_routes())
        .merge(message_routes())
        .merge(assignment_routes())
        .merge(prediction_routes())
        .layer(from_fn(authenticate))
}

fn gated(route: MethodRouter, gate: Gate) -> MethodRouter {
    route.route_layer(from_fn_with_state(gate, require_gate))
}

/// Finish a path's method router so unsupported methods get the JSON envelope
fn endpoint(route: MethodRouter) -> MethodRouter {
    route.fallback(public::method_not_allowed)
}

fn engineers_or_land_officer() -> Gate {
    require_any_role([Role::ChiefEngineer, Role::ProjectEngineer, Role::LandOfficer])
}

fn auth_routes() -> Router {
    Router::new().route("/api/auth/whoami", endpoint(get(protected::whoami)))
}

fn project_routes() -> Router {
    use protected::forward;

    Router::new()
        // Project Engineer
        .route("/api/projects/create", endpoint(gated(post(forward), require_project_engineer())))
        .route(
            "/api/projects/update/:id",
            endpoint(gated(put(forward), require_project_engineer())),
        )
        // Chief Engineer
        .route("/api/projects/pending", endpoint(gated(get(forward), require_chief_engineer())))
        .route(
            "/api/projects/approve/:id",
            endpoint(gated(put(forward), require_chief_engineer())),
        )
        .route(
            "/api/projects/reject/:id",
            endpoint(gated(put(forward), require_chief_engineer())),
        )
        .route("/api/projects/:id", endpoint(gated(get(forward), require_engineers())))
}

fn plan_routes() -> Router {
    use protected::forward;

    Router::new()
        .route("/api/plans/create", endpoint(gated(post(forward), require_project_engineer())))
        .route("/api/plans/project/:project_id", endpoint(get(forward)))
        .route("/api/plans/:id", endpoint(get(forward)))
}

fn lot_routes() -> Router {
    use protected::forward;

    Router::new()
        .route("/api/lots/create", endpoint(gated(post(forward), require_land_officer())))
        .route("/api/lots/plan/:plan_id", endpoint(gated(get(forward), require_all())))
        .route("/api/lots/user/lots", endpoint(gated(get(forward), require_all())))
        .route(
            "/api/lots/:id",
            endpoint(
                gated(get(forward), require_all())
                    .merge(gated(put(forward).delete(forward), require_land_officer())),
            ),
        )
        .route(
            "/api/lots/:id/valuation",
            endpoint(gated(put(forward), require_financial_officer())),
        )
        .route(
            "/api/lots/:id/compensation",
            endpoint(gated(put(forward), require_financial_officer())),
        )
        .route(
            "/api/lots/:id/owners",
            endpoint(gated(post(forward), engineers_or_land_officer())),
        )
        .route(
            "/api/lots/:id/owners/:owner_id",
            endpoint(gated(delete(forward), engineers_or_land_officer())),
        )
}

fn compensation_routes() -> Router {
    use protected::forward;

    Router::new()
        .route(
            "/api/compensation/plans/:plan_id/lots/:lot_id",
            endpoint(gated(post(forward), require_financial_officer()).merge(get(forward))),
        )
        .route("/api/compensation/plans/:plan_id", endpoint(get(forward)))
}

fn message_routes() -> Router {
    use protected::forward;

    Router::new()
        .route("/api/messages", endpoint(get(forward).post(forward)))
        .route("/api/messages/unread-count", endpoint(get(forward)))
        .route("/api/messages/:message_id", endpoint(get(forward).delete(forward)))
        .route("/api/messages/:message_id/read", endpoint(patch(forward)))
}

fn assignment_routes() -> Router {
    use protected::forward;

    let assigners = || require_any_role([Role::ProjectEngineer, Role::ChiefEngineer]);

    Router::new()
        .route("/api/assignments/land-officers", endpoint(gated(get(forward), assigners())))
        .route("/api/assignments/assign", endpoint(gated(post(forward), require_project_engineer())))
        .route(
            "/api/assignments/assigned-projects",
            endpoint(gated(get(forward), require_land_officer())),
        )
        .route("/api/assignments/can-edit/:project_id", endpoint(gated(get(forward), require_all())))
        .route("/api/assignments/project/:project_id", endpoint(gated(get(forward), assigners())))
        .route("/api/assignments/remove", endpoint(gated(post(forward), require_project_engineer())))
}

fn prediction_routes() -> Router {
    use protected::forward;

    Router::new()
        .route("/api/prediction/health", endpoint(gated(get(forward), require_engineers())))
        .route("/api/prediction/model-info", endpoint(gated(get(forward), require_engineers())))
        .route("/api/prediction/predict", endpoint(gated(post(forward), require_engineers())))
        .route(
            "/api/prediction/predict-batch",
            endpoint(gated(post(forward), require_engineers())),
        )
        .route(
            "/api/prediction/predict-project/:project_id",
            endpoint(gated(get(forward), require_engineers())),
        )
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
