//! # Menu Shared
//! 
//! Configuration, telemetry and application-level errors shared by the menu crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
