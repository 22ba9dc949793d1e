//! # Menu Core
//! 
//! Menu declarations, the discovery port, and the menu tree builder.

pub mod domain;
pub mod discovery;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use discovery::MenuDiscovery;
pub use error::DomainError;
pub use services::{DuplicatePolicy, MenuDiagnostics, MenuTreeBuilder};
