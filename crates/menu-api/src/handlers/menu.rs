// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menu.rs
// ============================================================================
//! Menu tree HTTP handlers. Every request rebuilds the tree from discovery.

use axum::{
    extract::{Query, State},
    Json,
};
use menu_core::MenuDiagnostics;
use serde::Deserialize;
use tracing::debug;

use crate::dto::{MenuNodeDto, TrailItemDto};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::trail::active_trail;

#[derive(Debug, Deserialize)]
pub struct TrailQuery {
    pub route: String,
}

/// Menu tree handler - GET /api/v1/menu
pub async fn get_menu(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuNodeDto>>>, ApiError> {
    let tree = state.menu.build()?;
    Ok(Json(ApiResponse::menu(&tree)))
}

/// Active trail handler - GET /api/v1/menu/trail?route=/MenuPages/SubTeam1
pub async fn get_trail(
    State(state): State<AppState>,
    Query(query): Query<TrailQuery>,
) -> Result<Json<ApiResponse<Vec<TrailItemDto>>>, ApiError> {
    if query.route.trim().is_empty() {
        return Err(ApiError::BadRequest("route is required".to_string()));
    }

    let tree = state.menu.build()?;
    let trail = active_trail(&tree, &query.route)
        .ok_or_else(|| ApiError::NotFound(format!("No menu item for route {}", query.route)))?;

    debug!("Active trail for {} has {} items", query.route, trail.len());
    Ok(Json(ApiResponse::success(
        trail.into_iter().map(TrailItemDto::from).collect(),
    )))
}

/// Diagnostics handler - GET /api/v1/menu/diagnostics
pub async fn get_diagnostics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MenuDiagnostics>>, ApiError> {
    let report = state.menu.diagnose()?;
    Ok(Json(ApiResponse::success(report)))
}
