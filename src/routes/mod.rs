//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! the dashboard, its actions, health checks and metrics exposition.

mod actions;
mod dashboard;
mod device_layer;
mod health_routes;
mod metrics;

use crate::state::AppState;
use axum::{Router, middleware};

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router, wraps them in the
/// device classification layer and attaches the application state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(dashboard::routes())
        .merge(actions::routes(&state.config.features))
        .merge(health_routes::routes())
        .merge(metrics::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            device_layer::classify_device,
        ))
        .with_state(state)
}
