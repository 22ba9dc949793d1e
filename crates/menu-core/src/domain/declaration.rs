//! Menu declaration: the metadata a page component contributes to the menu.

use serde::{Deserialize, Serialize};

use super::component::{ComponentId, MenuComponent};

/// One menu entry as declared by its owning component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDeclaration {
    pub route: String,
    pub label: String,
    pub self_id: ComponentId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ComponentId>,
}

impl MenuDeclaration {
    pub fn new(
        route: impl Into<String>,
        label: impl Into<String>,
        self_id: impl Into<ComponentId>,
        parent_id: Option<ComponentId>,
    ) -> Self {
        Self {
            route: route.into(),
            label: label.into(),
            self_id: self_id.into(),
            parent_id,
        }
    }

    /// Declaration without a parent.
    pub fn root(
        route: impl Into<String>,
        label: impl Into<String>,
        self_id: impl Into<ComponentId>,
    ) -> Self {
        Self::new(route, label, self_id, None)
    }

    pub fn child_of(
        parent_id: impl Into<ComponentId>,
        route: impl Into<String>,
        label: impl Into<String>,
        self_id: impl Into<ComponentId>,
    ) -> Self {
        Self::new(route, label, self_id, Some(parent_id.into()))
    }

    /// Declaration attached to the component type `T`.
    pub fn of<T: MenuComponent>() -> Self {
        Self {
            route: T::ROUTE.to_string(),
            label: T::LABEL.to_string(),
            self_id: ComponentId::of::<T>(),
            parent_id: T::parent(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
