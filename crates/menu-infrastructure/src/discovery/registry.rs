// ============================================================================
// Menu Infrastructure - Page Registry
// File: crates/menu-infrastructure/src/discovery/registry.rs
// Description: Init-once, read-many registry of page menu declarations
// ============================================================================

use std::sync::Arc;

use menu_core::{DomainError, MenuComponent, MenuDeclaration, MenuDiscovery};
use tracing::info;

/// Collects declarations during startup. Call [`freeze`](Self::freeze) once
/// every page is registered.
#[derive(Debug, Default)]
pub struct MenuRegistryBuilder {
    declarations: Vec<MenuDeclaration>,
}

impl MenuRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the page type `T` through its `MenuComponent` metadata.
    pub fn register<T: MenuComponent>(mut self) -> Self {
        self.declarations.push(MenuDeclaration::of::<T>());
        self
    }

    pub fn register_declaration(mut self, declaration: MenuDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn extend(mut self, declarations: impl IntoIterator<Item = MenuDeclaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    pub fn freeze(self) -> Arc<MenuRegistry> {
        info!("Menu registry frozen with {} declarations", self.declarations.len());
        Arc::new(MenuRegistry {
            declarations: self.declarations,
        })
    }
}

/// Read-only set of registered declarations, in registration order.
#[derive(Debug)]
pub struct MenuRegistry {
    declarations: Vec<MenuDeclaration>,
}

impl MenuRegistry {
    pub fn builder() -> MenuRegistryBuilder {
        MenuRegistryBuilder::new()
    }

    pub fn declarations(&self) -> &[MenuDeclaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl MenuDiscovery for MenuRegistry {
    fn discover(&self) -> Result<Vec<MenuDeclaration>, DomainError> {
        Ok(self.declarations.clone())
    }
}
