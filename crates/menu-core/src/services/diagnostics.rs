//! Structural report over a declaration set, computed without building the tree.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::domain::{ComponentId, MenuDeclaration};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuDiagnostics {
    /// Number of declarations discovered.
    pub declarations: usize,
    pub roots: Vec<ComponentId>,
    /// Declarations whose parent names no declared component.
    pub dangling: Vec<ComponentId>,
    /// Declarations with a declared parent that is itself unreachable
    /// (under a dangling ancestor, or part of a parent cycle).
    pub orphaned: Vec<ComponentId>,
    /// Identities on a parent cycle or below one. A build fails on these
    /// when a root reaches them, and drops them otherwise.
    pub cyclic: Vec<ComponentId>,
    /// Identities declared more than once, in first-seen order.
    pub duplicates: Vec<ComponentId>,
}

impl MenuDiagnostics {
    pub fn from_declarations(declarations: &[MenuDeclaration]) -> Self {
        let known: HashSet<&ComponentId> = declarations.iter().map(|d| &d.self_id).collect();

        let mut children: HashMap<&ComponentId, Vec<&ComponentId>> = HashMap::new();
        for decl in declarations {
            if let Some(parent) = &decl.parent_id {
                children.entry(parent).or_default().push(&decl.self_id);
            }
        }

        let mut reached: HashSet<&ComponentId> = HashSet::new();
        let mut queue: VecDeque<&ComponentId> = declarations
            .iter()
            .filter(|d| d.is_root())
            .map(|d| &d.self_id)
            .collect();
        while let Some(id) = queue.pop_front() {
            if !reached.insert(id) {
                continue;
            }
            if let Some(kids) = children.get(id) {
                queue.extend(kids.iter().copied());
            }
        }

        let in_cycle = cyclic_ids(&known, &children);

        let mut report = Self {
            declarations: declarations.len(),
            duplicates: duplicate_ids(declarations),
            ..Self::default()
        };

        let mut listed: HashSet<&ComponentId> = HashSet::new();
        for decl in declarations {
            if in_cycle.contains(&decl.self_id) && listed.insert(&decl.self_id) {
                report.cyclic.push(decl.self_id.clone());
            }
        }

        for decl in declarations {
            match &decl.parent_id {
                None => report.roots.push(decl.self_id.clone()),
                Some(parent) if !known.contains(parent) => report.dangling.push(decl.self_id.clone()),
                Some(parent) if !reached.contains(parent) => report.orphaned.push(decl.self_id.clone()),
                Some(_) => {}
            }
        }

        report
    }

    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty()
            && self.orphaned.is_empty()
            && self.cyclic.is_empty()
            && self.duplicates.is_empty()
    }
}

/// Every id reachable from an id that can reach itself through child links.
fn cyclic_ids<'a>(
    known: &HashSet<&'a ComponentId>,
    children: &HashMap<&'a ComponentId, Vec<&'a ComponentId>>,
) -> HashSet<&'a ComponentId> {
    let mut cyclic = HashSet::new();
    for &start in known {
        if cyclic.contains(start) {
            continue;
        }
        let mut below: HashSet<&ComponentId> = HashSet::new();
        let mut stack: Vec<&ComponentId> = children.get(start).cloned().unwrap_or_default();
        while let Some(id) = stack.pop() {
            if below.insert(id) {
                if let Some(kids) = children.get(id) {
                    stack.extend(kids.iter().copied());
                }
            }
        }
        if below.contains(start) {
            cyclic.extend(below);
        }
    }
    cyclic
}

/// Identities that appear on more than one declaration.
pub(crate) fn duplicate_ids(declarations: &[MenuDeclaration]) -> Vec<ComponentId> {
    let mut seen: HashSet<&ComponentId> = HashSet::new();
    let mut reported: HashSet<&ComponentId> = HashSet::new();
    let mut duplicates = Vec::new();
    for decl in declarations {
        if !seen.insert(&decl.self_id) && reported.insert(&decl.self_id) {
            duplicates.push(decl.self_id.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &'static str) -> ComponentId {
        ComponentId::from(s)
    }

    #[test]
    fn test_clean_tree() {
        let decls = vec![
            MenuDeclaration::root("/a", "A", "a"),
            MenuDeclaration::child_of("a", "/a/b", "B", "b"),
        ];
        let report = MenuDiagnostics::from_declarations(&decls);

        assert_eq!(report.declarations, 2);
        assert_eq!(report.roots, vec![id("a")]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_dangling_and_its_descendants() {
        let decls = vec![
            MenuDeclaration::root("/a", "A", "a"),
            MenuDeclaration::child_of("z", "/c", "C", "c"),
            MenuDeclaration::child_of("c", "/c/d", "D", "d"),
        ];
        let report = MenuDiagnostics::from_declarations(&decls);

        assert_eq!(report.dangling, vec![id("c")]);
        assert_eq!(report.orphaned, vec![id("d")]);
        assert!(report.cyclic.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_unreachable_cycle_is_orphaned() {
        let decls = vec![
            MenuDeclaration::child_of("b", "/a", "A", "a"),
            MenuDeclaration::child_of("a", "/b", "B", "b"),
            MenuDeclaration::child_of("s", "/s", "S", "s"),
        ];
        let report = MenuDiagnostics::from_declarations(&decls);

        assert!(report.roots.is_empty());
        assert!(report.dangling.is_empty());
        assert_eq!(report.orphaned, vec![id("a"), id("b"), id("s")]);
        assert_eq!(report.cyclic, vec![id("a"), id("b"), id("s")]);
    }

    #[test]
    fn test_reachable_cycle_is_reported() {
        let decls = vec![
            MenuDeclaration::root("/a", "A", "a"),
            MenuDeclaration::child_of("a", "/a/b", "B", "b"),
            MenuDeclaration::child_of("b", "/a/b/a", "A again", "a"),
            MenuDeclaration::child_of("b", "/a/b/c", "C", "c"),
            MenuDeclaration::root("/x", "X", "x"),
        ];
        let report = MenuDiagnostics::from_declarations(&decls);

        assert_eq!(report.cyclic, vec![id("a"), id("b"), id("c")]);
        assert_eq!(report.duplicates, vec![id("a")]);
        assert!(report.orphaned.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_below_unreachable_cycle_is_cyclic() {
        let decls = vec![
            MenuDeclaration::root("/r", "R", "r"),
            MenuDeclaration::child_of("b", "/a", "A", "a"),
            MenuDeclaration::child_of("a", "/b", "B", "b"),
            MenuDeclaration::child_of("b", "/b/c", "C", "c"),
        ];
        let report = MenuDiagnostics::from_declarations(&decls);

        assert_eq!(report.cyclic, vec![id("a"), id("b"), id("c")]);
        assert_eq!(report.orphaned, vec![id("a"), id("b"), id("c")]);
    }

    #[test]
    fn test_duplicates_reported_once() {
        let decls = vec![
            MenuDeclaration::root("/a", "A", "a"),
            MenuDeclaration::root("/a2", "A again", "a"),
            MenuDeclaration::root("/a3", "A third", "a"),
            MenuDeclaration::root("/b", "B", "b"),
        ];
        let report = MenuDiagnostics::from_declarations(&decls);

        assert_eq!(report.duplicates, vec![id("a")]);
    }
}
