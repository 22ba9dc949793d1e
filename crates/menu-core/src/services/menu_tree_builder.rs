// ============================================================================
// Menu Core - Menu Tree Builder
// File: crates/menu-core/src/services/menu_tree_builder.rs
// ============================================================================
//! Assembles discovered menu declarations into a tree of menu nodes

use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::discovery::MenuDiscovery;
use crate::domain::{ComponentId, MenuDeclaration, MenuNode};
use crate::error::DomainError;
use crate::services::diagnostics::{duplicate_ids, MenuDiagnostics};

/// How a build treats two declarations sharing one `self_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Expand every declaration; each duplicate receives the shared id's children.
    Tolerate,
    /// Fail the build with [`DomainError::DuplicateIdentity`].
    Reject,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Tolerate => "tolerate",
            DuplicatePolicy::Reject => "reject",
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tolerate" => Ok(DuplicatePolicy::Tolerate),
            "reject" => Ok(DuplicatePolicy::Reject),
            _ => Err(DomainError::UnknownPolicy(s.to_string())),
        }
    }
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Tolerate
    }
}

type Groups<'a> = HashMap<Option<&'a ComponentId>, Vec<&'a MenuDeclaration>>;

/// Builds the navigation tree from whatever the discovery source reports.
///
/// Every call to [`build`](Self::build) re-runs discovery; nothing is cached
/// between builds.
pub struct MenuTreeBuilder<D: MenuDiscovery + ?Sized> {
    discovery: Arc<D>,
    policy: DuplicatePolicy,
}

impl<D: MenuDiscovery + ?Sized> MenuTreeBuilder<D> {
    pub fn new(discovery: Arc<D>) -> Self {
        Self::with_policy(discovery, DuplicatePolicy::default())
    }

    pub fn with_policy(discovery: Arc<D>, policy: DuplicatePolicy) -> Self {
        Self { discovery, policy }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Build the root-level menu nodes with their subtrees expanded.
    ///
    /// Roots and siblings appear in discovery order. Declarations whose
    /// parent is never declared are left out of the tree.
    pub fn build(&self) -> Result<Vec<MenuNode>, DomainError> {
        let declarations = self.discovery.discover()?;

        if self.policy == DuplicatePolicy::Reject {
            if let Some(id) = duplicate_ids(&declarations).into_iter().next() {
                warn!("Menu build rejected: duplicate component identity {}", id);
                return Err(DomainError::DuplicateIdentity(id));
            }
        }

        warn_dangling(&declarations);

        let groups = group_by_parent(&declarations);
        let mut path = Vec::new();
        let roots = expand(&groups, None, &mut path)?;

        debug!(
            "Menu tree built: {} declarations, {} roots, {} nodes",
            declarations.len(),
            roots.len(),
            roots.iter().map(MenuNode::count).sum::<usize>()
        );

        Ok(roots)
    }

    /// Report roots, dangling parents, unreachable entries and duplicates.
    pub fn diagnose(&self) -> Result<MenuDiagnostics, DomainError> {
        let declarations = self.discovery.discover()?;
        Ok(MenuDiagnostics::from_declarations(&declarations))
    }
}

fn group_by_parent(declarations: &[MenuDeclaration]) -> Groups<'_> {
    let mut groups: Groups<'_> = HashMap::new();
    for decl in declarations {
        groups.entry(decl.parent_id.as_ref()).or_default().push(decl);
    }
    groups
}

/// Nodes for every declaration whose parent is `parent`, recursively.
///
/// `path` holds the identities currently being expanded; meeting one of them
/// again means the parent references loop.
fn expand<'a>(
    groups: &Groups<'a>,
    parent: Option<&'a ComponentId>,
    path: &mut Vec<ComponentId>,
) -> Result<Vec<MenuNode>, DomainError> {
    let Some(members) = groups.get(&parent) else {
        return Ok(Vec::new());
    };

    let mut nodes = Vec::with_capacity(members.len());
    for &decl in members {
        if path.contains(&decl.self_id) {
            let mut cycle = path.clone();
            cycle.push(decl.self_id.clone());
            warn!("Cyclic parent reference detected at {}", decl.self_id);
            return Err(DomainError::CyclicReference {
                id: decl.self_id.clone(),
                path: cycle,
            });
        }

        path.push(decl.self_id.clone());
        let children = expand(groups, Some(&decl.self_id), path)?;
        path.pop();

        nodes.push(MenuNode::from_declaration(decl, children));
    }
    Ok(nodes)
}

fn warn_dangling(declarations: &[MenuDeclaration]) {
    let known: HashSet<&ComponentId> = declarations.iter().map(|d| &d.self_id).collect();
    for decl in declarations {
        if let Some(parent) = &decl.parent_id {
            if !known.contains(parent) {
                warn!(
                    "Menu item {} ({}) references unknown parent {}; skipped",
                    decl.self_id, decl.route, parent
                );
            }
        }
    }
}
