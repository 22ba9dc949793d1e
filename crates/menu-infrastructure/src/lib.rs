//! # Menu Infrastructure
//! 
//! Discovery adapters: static lists, the page registry, manifest files.

pub mod discovery;
pub mod error;

pub use discovery::{
    CompositeDiscovery, ManifestDiscovery, MenuRegistry, MenuRegistryBuilder, StaticDiscovery,
};
pub use error::InfraError;
