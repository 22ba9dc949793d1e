//! Domain errors

use thiserror::Error;

use crate::domain::ComponentId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Menu discovery failed: {0}")]
    Discovery(String),

    #[error("Duplicate component identity: {0}")]
    DuplicateIdentity(ComponentId),

    #[error("Cyclic parent reference at {id} ({} levels deep)", .path.len())]
    CyclicReference { id: ComponentId, path: Vec<ComponentId> },

    #[error("Unknown duplicate policy: {0}")]
    UnknownPolicy(String),
}
