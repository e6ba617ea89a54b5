//! mqadmin Core Library
//!
//! This crate provides the core functionality for the mqadmin broker
//! administration console: the endpoint registry, its property-file
//! persistence, the console presentation model, and the seams to the
//! external connection layer.

pub mod console;
pub mod error;
pub mod models;
pub mod registry;
pub mod remote;
pub mod store;

pub use console::{
    capabilities, endpoint_label, ActionSet, AdminAction, IconId, NodeCapabilities, NodeKind,
    PanelKind,
};
pub use error::{
    AdminError, PersistenceError, PersistenceResult, Result, ValidationError, ValidationResult,
};
pub use models::{Credentials, EndpointDescriptor, EndpointKind};
pub use registry::ConnectionRegistry;
pub use remote::{AdminClient, ConnectionStatus, LifecycleCommand};
pub use store::{ListKind, PropertyList, RegistryStore};
