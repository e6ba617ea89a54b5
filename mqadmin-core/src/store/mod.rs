//! Registry persistence for the mqadmin console
//!
//! This module provides the `RegistryStore`, which round-trips a
//! `ConnectionRegistry` to the console's property-file format. The format
//! is a compatibility contract with the original console and is positional:
//! a count property plus index-derived keys, in entry order.
//!
//! ```text
//! version=2.0
//! broker.count=2
//! broker.0.name=broker1
//! broker.0.host=localhost
//! broker.0.port=7676
//! broker.0.username=admin
//! broker.0.password=admin
//! broker.1.name=...
//! ```
//!
//! Saves rewrite the whole file in place. There is no temp-file-and-rename
//! step, so an interrupted save can leave a truncated file; inherited gap,
//! kept for now.

mod properties;

pub use properties::PropertyList;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PersistenceError, PersistenceResult, ValidationError, ValidationResult};
use crate::models::{Credentials, EndpointDescriptor, EndpointKind};
use crate::registry::ConnectionRegistry;

/// File names for the two favourite lists
const BROKER_LIST_FILE: &str = "brokerlist.properties";
const OBJSTORE_LIST_FILE: &str = "objstorelist.properties";

/// Version property written to every file
const PROP_VERSION: &str = "version";
/// Version this console writes
const VERSION: &str = "2.0";
/// Oldest file version this console still reads
const FIRST_VERSION: &str = "2.0";

/// Which favourite list a store manages
///
/// The two lists share the codec and differ only in key prefix and
/// file name, as in the original console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Broker favourite list (`broker.*` keys)
    Brokers,
    /// Object-store favourite list (`objstore.*` keys)
    ObjectStores,
}

impl ListKind {
    /// Key prefix used in the property file
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Brokers => "broker",
            Self::ObjectStores => "objstore",
        }
    }

    /// Default file name under the config directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Brokers => BROKER_LIST_FILE,
            Self::ObjectStores => OBJSTORE_LIST_FILE,
        }
    }

    /// Endpoint kind stored in this list
    #[must_use]
    pub const fn endpoint_kind(self) -> EndpointKind {
        match self {
            Self::Brokers => EndpointKind::Broker,
            Self::ObjectStores => EndpointKind::ObjectStore,
        }
    }
}

/// Persistence adapter for a `ConnectionRegistry`
///
/// Loads are all-or-nothing: any malformed field aborts the whole load
/// and the caller keeps whatever registry it already had.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    kind: ListKind,
    path: PathBuf,
}

impl RegistryStore {
    /// Creates a store for the broker list in the default config directory
    ///
    /// The default location is `~/.config/mqadmin/brokerlist.properties`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn brokers() -> PersistenceResult<Self> {
        Self::in_default_dir(ListKind::Brokers)
    }

    /// Creates a store for the object-store list in the default config directory
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn object_stores() -> PersistenceResult<Self> {
        Self::in_default_dir(ListKind::ObjectStores)
    }

    fn in_default_dir(kind: ListKind) -> PersistenceResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| PersistenceError::NotFound(PathBuf::from("~/.config")))?
            .join("mqadmin");
        Ok(Self {
            kind,
            path: dir.join(kind.file_name()),
        })
    }

    /// Creates a store backed by an explicit file path
    ///
    /// This is useful for testing or non-standard configurations.
    #[must_use]
    pub const fn with_path(kind: ListKind, path: PathBuf) -> Self {
        Self { kind, path }
    }

    /// Returns the backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the list kind this store manages
    #[must_use]
    pub const fn kind(&self) -> ListKind {
        self.kind
    }

    /// Loads the registry from the backing file
    ///
    /// The whole file is parsed before any descriptor is constructed;
    /// loaded entries come back with `connected = false` since the format
    /// carries no state field.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing or unreadable, carries an
    /// unsupported version, or any count/entry field is malformed. No
    /// partially populated registry is ever returned.
    pub fn load(&self) -> PersistenceResult<ConnectionRegistry> {
        if !self.path.exists() {
            return Err(PersistenceError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            PersistenceError::Read(format!("{}: {}", self.path.display(), e))
        })?;

        let props = PropertyList::parse(&content)?;
        Self::check_version(&props)?;

        let prefix = self.kind.prefix();
        let count = Self::entry_count(&props, prefix)?;

        let mut registry = ConnectionRegistry::new();
        for i in 0..count {
            registry.add(self.read_entry(&props, i)?);
        }

        debug!(
            path = %self.path.display(),
            count = registry.len(),
            "loaded endpoint list"
        );
        Ok(registry)
    }

    /// Saves the registry to the backing file
    ///
    /// All entries are serialized in `list()` order under index-derived
    /// keys. Creates the parent directory if needed. The file is rewritten
    /// from scratch on every save.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, registry: &ConnectionRegistry) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    PersistenceError::Write(format!(
                        "failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let prefix = self.kind.prefix();
        let mut props = PropertyList::new();
        props.set(PROP_VERSION, VERSION);
        props.set(format!("{prefix}.count"), registry.len().to_string());

        for (i, entry) in registry.list().enumerate() {
            let base = format!("{prefix}.{i}");
            props.set(format!("{base}.name"), entry.name.clone());
            props.set(format!("{base}.host"), entry.host.clone());
            props.set(format!("{base}.port"), entry.port.to_string());
            props.set(format!("{base}.username"), entry.credentials.username.clone());
            props.set(
                format!("{base}.password"),
                entry.credentials.expose_password().unwrap_or_default(),
            );
        }

        fs::write(&self.path, props.render()).map_err(|e| {
            PersistenceError::Write(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(
            path = %self.path.display(),
            count = registry.len(),
            "saved endpoint list"
        );
        Ok(())
    }

    /// Validates an endpoint before it enters the registry
    ///
    /// Called at the input boundary (dialogs, CLI arguments); descriptors
    /// that fail here never reach `ConnectionRegistry::add`.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank name or host, or a zero port.
    pub fn validate_endpoint(endpoint: &EndpointDescriptor) -> ValidationResult<()> {
        if endpoint.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Endpoint name cannot be empty"));
        }

        if endpoint.host.trim().is_empty() {
            return Err(ValidationError::new("host", "Host cannot be empty"));
        }

        if endpoint.port == 0 {
            return Err(ValidationError::new("port", "Port must be greater than 0"));
        }

        Ok(())
    }

    /// Accepts a missing version as current, rejects anything outside the
    /// supported range or non-numeric.
    fn check_version(props: &PropertyList) -> PersistenceResult<()> {
        let Some(found) = props.get(PROP_VERSION) else {
            return Ok(());
        };

        let parse = |s: &str| -> PersistenceResult<f64> {
            s.parse().map_err(|_| PersistenceError::Version {
                found: s.to_string(),
                expected: VERSION.to_string(),
            })
        };

        let file_version = parse(found)?;
        let first = parse(FIRST_VERSION)?;
        let current = parse(VERSION)?;

        if file_version < first || file_version > current {
            return Err(PersistenceError::Version {
                found: found.to_string(),
                expected: VERSION.to_string(),
            });
        }

        Ok(())
    }

    /// Reads the count property; absent means an empty list, anything
    /// negative or non-numeric is an error.
    fn entry_count(props: &PropertyList, prefix: &str) -> PersistenceResult<usize> {
        let key = format!("{prefix}.count");
        let Some(raw) = props.get(&key) else {
            return Ok(0);
        };

        let count: i64 = raw.parse().map_err(|_| PersistenceError::Malformed {
            key: key.clone(),
            reason: format!("count {raw:?} is not a valid number"),
        })?;

        usize::try_from(count).map_err(|_| PersistenceError::Malformed {
            key,
            reason: format!("count {count} is negative"),
        })
    }

    fn read_entry(&self, props: &PropertyList, index: usize) -> PersistenceResult<EndpointDescriptor> {
        let base = format!("{}.{index}", self.kind.prefix());

        let name = props.require(&format!("{base}.name"))?.to_string();
        let host = props.require(&format!("{base}.host"))?.to_string();
        let port: u16 = props.require_parsed(&format!("{base}.port"))?;
        let username = props.get(&format!("{base}.username")).unwrap_or_default();
        let password = props.get(&format!("{base}.password")).unwrap_or_default();

        let credentials = if password.is_empty() {
            Credentials::with_username(username)
        } else {
            Credentials::with_password(username, password)
        };

        Ok(
            EndpointDescriptor::new(name, self.kind.endpoint_kind(), host, port)
                .with_credentials(credentials),
        )
    }
}
