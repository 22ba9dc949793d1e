// ============================================================================
// Menu Core - Component Identity
// File: crates/menu-core/src/domain/component.rs
// Description: Component identity and compile-time menu metadata
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a page component.
///
/// Type-derived ids come from [`std::any::type_name`]; manifest files use
/// arbitrary strings. Both compare by their string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(Cow<'static, str>);

impl ComponentId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Identity of the component type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ComponentId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

/// Menu metadata attached to a page component type.
///
/// Usually implemented through [`menu_item!`](crate::menu_item).
pub trait MenuComponent: 'static {
    const ROUTE: &'static str;
    const LABEL: &'static str;

    /// Identity of the parent component, `None` for a root entry.
    fn parent() -> Option<ComponentId> {
        None
    }
}

/// Attach menu metadata to a page type.
///
/// ```ignore
/// pub struct Team;
/// pub struct SubTeam1;
///
/// menu_item!(Team, route = "/MenuPages/Team", label = "Team");
/// menu_item!(SubTeam1, route = "/MenuPages/SubTeam1", label = "SubTeam1", parent = Team);
/// ```
#[macro_export]
macro_rules! menu_item {
    ($component:ty, route = $route:expr, label = $label:expr, parent = $parent:ty $(,)?) => {
        impl $crate::domain::MenuComponent for $component {
            const ROUTE: &'static str = $route;
            const LABEL: &'static str = $label;

            fn parent() -> ::core::option::Option<$crate::domain::ComponentId> {
                ::core::option::Option::Some($crate::domain::ComponentId::of::<$parent>())
            }
        }
    };
    ($component:ty, route = $route:expr, label = $label:expr $(,)?) => {
        impl $crate::domain::MenuComponent for $component {
            const ROUTE: &'static str = $route;
            const LABEL: &'static str = $label;
        }
    };
}
