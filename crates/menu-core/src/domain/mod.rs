//! # Menu Core - Domain Module
//! 
//! Declarations consumed by the builder and the nodes it produces.

pub mod component;
pub mod declaration;
pub mod menu_node;

pub use component::{ComponentId, MenuComponent};
pub use declaration::MenuDeclaration;
pub use menu_node::MenuNode;
