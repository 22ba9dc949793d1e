//! Discovery adapters (implementations of `MenuDiscovery`)

pub mod composite;
pub mod manifest;
pub mod registry;
pub mod static_list;

pub use composite::CompositeDiscovery;
pub use manifest::ManifestDiscovery;
pub use registry::{MenuRegistry, MenuRegistryBuilder};
pub use static_list::StaticDiscovery;
