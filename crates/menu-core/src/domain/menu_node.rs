// ============================================================================
// Menu Core - Menu Node
// File: crates/menu-core/src/domain/menu_node.rs
// Description: Tree node produced by the menu tree builder
// ============================================================================

use serde::{Deserialize, Serialize};

use super::component::ComponentId;
use super::declaration::MenuDeclaration;

/// A node of the navigation tree.
///
/// `children` keep the order in which their declarations were discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub route: String,
    pub label: String,
    pub self_id: ComponentId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ComponentId>,

    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn from_declaration(declaration: &MenuDeclaration, children: Vec<MenuNode>) -> Self {
        Self {
            route: declaration.route.clone(),
            label: declaration.label.clone(),
            self_id: declaration.self_id.clone(),
            parent_id: declaration.parent_id.clone(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in this subtree, counting this node.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(MenuNode::depth).max().unwrap_or(0)
    }

    /// Number of nodes in this subtree, counting this node.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::count).sum::<usize>()
    }

    /// Depth-first search by identity.
    pub fn find(&self, id: &ComponentId) -> Option<&MenuNode> {
        if &self.self_id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_by_route(&self, route: &str) -> Option<&MenuNode> {
        if self.route == route {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_route(route))
    }
}
