//! Response envelope for the menu endpoints

use chrono::Utc;
use menu_core::{ComponentId, DomainError, MenuNode};
use serde::Serialize;

use crate::dto::MenuNodeDto;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<TreeMeta>,
    pub error: Option<ApiErrorBody>,
    /// When this tree (or error) was produced. Trees are rebuilt per request.
    pub built_at: String,
}

/// Shape summary of a built tree, so widgets can size themselves without walking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeMeta {
    pub roots: usize,
    pub nodes: usize,
    pub depth: usize,
}

impl TreeMeta {
    pub fn of(tree: &[MenuNode]) -> Self {
        Self {
            roots: tree.len(),
            nodes: tree.iter().map(MenuNode::count).sum(),
            depth: tree.iter().map(MenuNode::depth).max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    /// Component the failure is about (duplicate or re-entered identity).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentId>,
    /// Expansion path that closed a parent cycle, root first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<ComponentId>>,
}

impl ApiErrorBody {
    fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            component: None,
            path: None,
        }
    }

    fn from_domain(code: &str, err: &DomainError) -> Self {
        let mut body = Self::new(code, &err.to_string());
        match err {
            DomainError::DuplicateIdentity(id) => body.component = Some(id.clone()),
            DomainError::CyclicReference { id, path } => {
                body.component = Some(id.clone());
                body.path = Some(path.clone());
            }
            DomainError::Discovery(_) | DomainError::UnknownPolicy(_) => {}
        }
        body
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            meta: None,
            error: None,
            built_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self::failure(ApiErrorBody::new(code, message))
    }

    /// Error envelope that names the offending components of a domain failure.
    pub fn domain_error(code: &str, err: &DomainError) -> Self {
        Self::failure(ApiErrorBody::from_domain(code, err))
    }

    fn failure(body: ApiErrorBody) -> Self {
        Self {
            success: false,
            data: None,
            meta: None,
            error: Some(body),
            built_at: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<Vec<MenuNodeDto>> {
    /// The menu tree with its shape summary.
    pub fn menu(tree: &[MenuNode]) -> Self {
        let mut response = Self::success(tree.iter().map(MenuNodeDto::from).collect());
        response.meta = Some(TreeMeta::of(tree));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::MenuDeclaration;

    fn node(decl: MenuDeclaration, children: Vec<MenuNode>) -> MenuNode {
        MenuNode::from_declaration(&decl, children)
    }

    #[test]
    fn test_tree_meta() {
        let tree = vec![
            node(MenuDeclaration::root("/", "Home", "home"), vec![]),
            node(
                MenuDeclaration::root("/team", "Team", "team"),
                vec![node(
                    MenuDeclaration::child_of("team", "/team/a", "A", "a"),
                    vec![node(MenuDeclaration::child_of("a", "/team/a/b", "B", "b"), vec![])],
                )],
            ),
        ];

        assert_eq!(TreeMeta::of(&tree), TreeMeta { roots: 2, nodes: 4, depth: 3 });
        assert_eq!(TreeMeta::of(&[]), TreeMeta { roots: 0, nodes: 0, depth: 0 });
    }

    #[test]
    fn test_menu_response_carries_meta() {
        let tree = vec![node(MenuDeclaration::root("/", "Home", "home"), vec![])];
        let response = ApiResponse::menu(&tree);

        assert!(response.success);
        assert_eq!(response.data.as_ref().map(Vec::len), Some(1));
        assert_eq!(response.meta, Some(TreeMeta { roots: 1, nodes: 1, depth: 1 }));
    }

    #[test]
    fn test_cycle_error_names_path() {
        let err = DomainError::CyclicReference {
            id: ComponentId::from("a"),
            path: vec![ComponentId::from("a"), ComponentId::from("b"), ComponentId::from("a")],
        };
        let response = ApiResponse::<()>::domain_error("MENU_INTEGRITY", &err);
        let body = response.error.unwrap();

        assert_eq!(body.component, Some(ComponentId::from("a")));
        assert_eq!(body.path.map(|p| p.len()), Some(3));
    }

    #[test]
    fn test_plain_error_has_no_component() {
        let body = ApiResponse::<()>::error("NOT_FOUND", "missing").error.unwrap();

        assert!(body.component.is_none());
        assert!(body.path.is_none());
    }
}
