//! Chained discovery sources

use std::sync::Arc;

use menu_core::{DomainError, MenuDeclaration, MenuDiscovery};

/// Concatenates several sources, in the order they were added.
#[derive(Clone, Default)]
pub struct CompositeDiscovery {
    sources: Vec<Arc<dyn MenuDiscovery>>,
}

impl CompositeDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Arc<dyn MenuDiscovery>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl MenuDiscovery for CompositeDiscovery {
    fn discover(&self) -> Result<Vec<MenuDeclaration>, DomainError> {
        let mut declarations = Vec::new();
        for source in &self.sources {
            declarations.extend(source.discover()?);
        }
        Ok(declarations)
    }
}
