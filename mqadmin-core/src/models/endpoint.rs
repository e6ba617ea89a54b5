//! Endpoint descriptor model representing a configured broker or object store.

use serde::{Deserialize, Serialize};

use super::credentials::Credentials;

/// Kind of remote endpoint the console administers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// A message broker
    #[default]
    Broker,
    /// A JNDI object store holding administered objects
    ObjectStore,
}

impl EndpointKind {
    /// Returns the lowercase string form used in CLI filters and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Broker => "broker",
            Self::ObjectStore => "objstore",
        }
    }

    /// Returns the conventional admin port for this endpoint kind
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Broker => 7676,
            Self::ObjectStore => 1099,
        }
    }
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured remote endpoint (broker or object store)
///
/// The `name` is the operator-chosen key that identifies the entry in the
/// registry. The `connected` flag is advisory only: it records the last
/// status pushed by the connection layer and says nothing about current
/// reachability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Unique, operator-chosen name for the endpoint
    pub name: String,
    /// Endpoint kind (broker or object store)
    pub kind: EndpointKind,
    /// Remote host address (hostname or IP)
    pub host: String,
    /// Remote admin port number
    pub port: u16,
    /// Credentials used when connecting
    #[serde(default)]
    pub credentials: Credentials,
    /// Last known connection state (advisory, not persisted)
    #[serde(default, skip_serializing)]
    pub connected: bool,
}

impl EndpointDescriptor {
    /// Creates a new endpoint descriptor with the given parameters
    #[must_use]
    pub fn new(name: String, kind: EndpointKind, host: String, port: u16) -> Self {
        Self {
            name,
            kind,
            host,
            port,
            credentials: Credentials::empty(),
            connected: false,
        }
    }

    /// Creates a new broker endpoint on the conventional admin port
    #[must_use]
    pub fn new_broker(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self::new(
            name.into(),
            EndpointKind::Broker,
            host.into(),
            EndpointKind::Broker.default_port(),
        )
    }

    /// Creates a new object-store endpoint on the conventional port
    #[must_use]
    pub fn new_object_store(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self::new(
            name.into(),
            EndpointKind::ObjectStore,
            host.into(),
            EndpointKind::ObjectStore.default_port(),
        )
    }

    /// Sets the port for this endpoint
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the credentials for this endpoint
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Returns `host:port` for display
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_broker_defaults() {
        let ep = EndpointDescriptor::new_broker("broker1", "localhost");
        assert_eq!(ep.kind, EndpointKind::Broker);
        assert_eq!(ep.port, 7676);
        assert!(!ep.connected);
        assert!(ep.credentials.is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let ep = EndpointDescriptor::new_object_store("store1", "10.0.0.5")
            .with_port(1100)
            .with_credentials(Credentials::with_username("admin"));
        assert_eq!(ep.kind, EndpointKind::ObjectStore);
        assert_eq!(ep.address(), "10.0.0.5:1100");
        assert_eq!(ep.credentials.username, "admin");
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(EndpointKind::Broker.as_str(), "broker");
        assert_eq!(EndpointKind::ObjectStore.as_str(), "objstore");
    }
}
