//! Fixed declaration list

use menu_core::{DomainError, MenuDeclaration, MenuDiscovery};

/// Discovery over a list known up front. Discovery order is list order.
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    declarations: Vec<MenuDeclaration>,
}

impl StaticDiscovery {
    pub fn new(declarations: Vec<MenuDeclaration>) -> Self {
        Self { declarations }
    }
}

impl From<Vec<MenuDeclaration>> for StaticDiscovery {
    fn from(declarations: Vec<MenuDeclaration>) -> Self {
        Self::new(declarations)
    }
}

impl MenuDiscovery for StaticDiscovery {
    fn discover(&self) -> Result<Vec<MenuDeclaration>, DomainError> {
        Ok(self.declarations.clone())
    }
}
