//! Menu discovery trait (port)

use std::sync::Arc;

use crate::domain::MenuDeclaration;
use crate::error::DomainError;

/// Source of every menu declaration registered in the running program.
///
/// The returned order is the discovery order; the builder keeps it for siblings.
pub trait MenuDiscovery: Send + Sync {
    fn discover(&self) -> Result<Vec<MenuDeclaration>, DomainError>;
}

impl<D: MenuDiscovery + ?Sized> MenuDiscovery for Arc<D> {
    fn discover(&self) -> Result<Vec<MenuDeclaration>, DomainError> {
        (**self).discover()
    }
}

impl<D: MenuDiscovery + ?Sized> MenuDiscovery for Box<D> {
    fn discover(&self) -> Result<Vec<MenuDeclaration>, DomainError> {
        (**self).discover()
    }
}
