//! Router assembly

use axum::{routing::get, Router};

use crate::handlers::{health, menu};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu routes
        .route("/api/v1/menu", get(menu::get_menu))
        .route("/api/v1/menu/trail", get(menu::get_trail))
        .route("/api/v1/menu/diagnostics", get(menu::get_diagnostics))
        .with_state(state)
}
