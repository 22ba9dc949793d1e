//! Response DTOs

use menu_core::MenuNode;
use serde::Serialize;

/// Menu node as sent to navigation widgets.
#[derive(Debug, Serialize)]
pub struct MenuNodeDto {
    pub id: String,
    pub route: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub children: Vec<MenuNodeDto>,
}

impl From<&MenuNode> for MenuNodeDto {
    fn from(node: &MenuNode) -> Self {
        Self {
            id: node.self_id.to_string(),
            route: node.route.clone(),
            label: node.label.clone(),
            parent_id: node.parent_id.as_ref().map(|p| p.to_string()),
            children: node.children.iter().map(MenuNodeDto::from).collect(),
        }
    }
}

/// One step of an active trail (breadcrumb).
#[derive(Debug, Serialize)]
pub struct TrailItemDto {
    pub id: String,
    pub route: String,
    pub label: String,
}

impl From<&MenuNode> for TrailItemDto {
    fn from(node: &MenuNode) -> Self {
        Self {
            id: node.self_id.to_string(),
            route: node.route.clone(),
            label: node.label.clone(),
        }
    }
}
