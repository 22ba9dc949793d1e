//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menu_core::DomainError;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST")
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            ApiError::Domain(DomainError::Discovery(msg)) => {
                tracing::error!("Menu discovery failed: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "DISCOVERY_FAILED")
            }
            ApiError::Domain(err) => {
                tracing::error!("Menu build failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "MENU_INTEGRITY")
            }
        };

        let body = match &self {
            ApiError::Domain(err) => Json(ApiResponse::<()>::domain_error(code, err)),
            _ => Json(ApiResponse::<()>::error(code, &self.to_string())),
        };
        (status, body).into_response()
    }
}
