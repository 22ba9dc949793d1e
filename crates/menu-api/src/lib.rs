//! # Menu API
//! 
//! HTTP handlers, DTOs, and render helpers serving the menu tree.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;
pub mod trail;

pub use routes::build_router;
pub use state::AppState;
