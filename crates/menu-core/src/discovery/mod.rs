//! Discovery port

pub mod menu_discovery;

pub use menu_discovery::MenuDiscovery;
