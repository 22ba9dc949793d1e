//! Active-route helpers for navigation rendering.
//!
//! Route matching is exact; the first match in tree order wins.

use menu_core::MenuNode;

/// Path from a root down to the node whose route equals `route`.
pub fn active_trail<'a>(roots: &'a [MenuNode], route: &str) -> Option<Vec<&'a MenuNode>> {
    for root in roots {
        let mut trail = Vec::new();
        if collect_trail(root, route, &mut trail) {
            return Some(trail);
        }
    }
    None
}

fn collect_trail<'a>(node: &'a MenuNode, route: &str, trail: &mut Vec<&'a MenuNode>) -> bool {
    trail.push(node);
    if node.route == route {
        return true;
    }
    for child in &node.children {
        if collect_trail(child, route, trail) {
            return true;
        }
    }
    trail.pop();
    false
}

/// Whether `node` or one of its descendants is the active route.
pub fn is_active(node: &MenuNode, route: &str) -> bool {
    node.find_by_route(route).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::{ComponentId, MenuNode};

    fn node(route: &str, children: Vec<MenuNode>) -> MenuNode {
        MenuNode {
            route: route.to_string(),
            label: route.trim_start_matches('/').to_string(),
            self_id: ComponentId::from(route.to_string()),
            parent_id: None,
            children,
        }
    }

    fn sample() -> Vec<MenuNode> {
        vec![
            node("/Index", vec![]),
            node("/MenuPages/Team", vec![
                node("/MenuPages/SubTeam1", vec![node("/MenuPages/SubSubTeam1", vec![])]),
                node("/MenuPages/SubTeam2", vec![]),
            ]),
        ]
    }

    #[test]
    fn test_trail_to_nested_route() {
        let tree = sample();
        let trail = active_trail(&tree, "/MenuPages/SubSubTeam1").unwrap();
        let routes: Vec<&str> = trail.iter().map(|n| n.route.as_str()).collect();

        assert_eq!(
            routes,
            vec!["/MenuPages/Team", "/MenuPages/SubTeam1", "/MenuPages/SubSubTeam1"]
        );
    }

    #[test]
    fn test_trail_to_root() {
        let tree = sample();
        let trail = active_trail(&tree, "/Index").unwrap();
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_unknown_route() {
        assert!(active_trail(&sample(), "/Privacy").is_none());
    }

    #[test]
    fn test_is_active() {
        let tree = sample();
        assert!(is_active(&tree[1], "/MenuPages/SubTeam2"));
        assert!(!is_active(&tree[0], "/MenuPages/SubTeam2"));
    }
}
