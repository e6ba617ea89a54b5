//! Data models for the mqadmin console

mod credentials;
mod endpoint;

pub use credentials::Credentials;
pub use endpoint::{EndpointDescriptor, EndpointKind};
