//! Application route configuration.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{auth_handler, auth_routes, dashboard_handler, health_handler};
use super::middleware::session_middleware;
use super::AppState;
use crate::config::{DASHBOARD_PATH, LOGOUT_PATH};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Pages that need a live session; anonymous visitors are sent to login
    let protected = Router::new()
        .route(DASHBOARD_PATH, get(dashboard_handler::dashboard))
        .route(LOGOUT_PATH, get(auth_handler::logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .route("/health", get(health_handler::health))
        .merge(auth_routes())
        .merge(protected)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
