//! Domain services (menu assembly)

pub mod diagnostics;
pub mod menu_tree_builder;

pub use diagnostics::MenuDiagnostics;
pub use menu_tree_builder::{DuplicatePolicy, MenuTreeBuilder};
