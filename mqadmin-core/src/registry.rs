//! In-memory registry of configured endpoints
//!
//! This module provides the `ConnectionRegistry`, the ordered set of
//! endpoint descriptors the console knows about, addressed by name.

use crate::models::EndpointDescriptor;

/// Ordered, name-keyed collection of endpoint descriptors
///
/// Entries keep insertion order because the registry file format is
/// positional. Access is single-threaded by design, matching the
/// UI-thread confinement of the console; callers that share a registry
/// across threads must wrap it in their own lock.
///
/// There is no global instance. Construct a registry (usually via
/// `RegistryStore::load`) and pass it to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionRegistry {
    entries: Vec<EndpointDescriptor>,
}

impl ConnectionRegistry {
    /// Creates an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces the entry with the matching name
    ///
    /// Replacement is last-write-wins and keeps the entry's original
    /// position; nothing of the old descriptor survives. Never fails.
    pub fn add(&mut self, descriptor: EndpointDescriptor) {
        match self.position(&descriptor.name) {
            Some(idx) => self.entries[idx] = descriptor,
            None => self.entries.push(descriptor),
        }
    }

    /// Removes the entry with the given name
    ///
    /// A no-op when the name is absent. The original console silently
    /// ignored this case and callers depend on that; boundaries that
    /// want to surface it check `exists` first.
    pub fn remove(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.entries.remove(idx);
        }
    }

    /// Returns true if an entry with the given name exists
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Gets an entry by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Gets a mutable reference to an entry by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut EndpointDescriptor> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    /// Iterates over all entries in insertion order
    ///
    /// The iterator is restartable; repeated calls have no side effects.
    pub fn list(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        self.entries.iter()
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records the last known connection state for a named entry
    ///
    /// The flag is advisory, pushed by the external connection layer.
    /// A no-op when the name is absent.
    pub fn set_connected(&mut self, name: &str, connected: bool) {
        if let Some(entry) = self.get_mut(name) {
            entry.connected = connected;
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl FromIterator<EndpointDescriptor> for ConnectionRegistry {
    fn from_iter<I: IntoIterator<Item = EndpointDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for descriptor in iter {
            registry.add(descriptor);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Credentials, EndpointDescriptor};

    fn broker(name: &str, host: &str, port: u16) -> EndpointDescriptor {
        EndpointDescriptor::new_broker(name, host).with_port(port)
    }

    #[test]
    fn test_add_then_exists() {
        let mut registry = ConnectionRegistry::new();
        registry.add(broker("broker1", "localhost", 7676));
        assert!(registry.exists("broker1"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_duplicate_replaces_entirely() {
        let mut registry = ConnectionRegistry::new();
        registry.add(
            broker("broker1", "localhost", 7676)
                .with_credentials(Credentials::with_password("admin", "old")),
        );
        registry.add(broker("broker1", "10.0.0.9", 9999));

        assert_eq!(registry.len(), 1);
        let entry = registry.get("broker1").unwrap();
        assert_eq!(entry.host, "10.0.0.9");
        assert_eq!(entry.port, 9999);
        // Old credentials are not retained
        assert!(entry.credentials.is_empty());
    }

    #[test]
    fn test_replace_preserves_position() {
        let mut registry = ConnectionRegistry::new();
        registry.add(broker("a", "h1", 1));
        registry.add(broker("b", "h2", 2));
        registry.add(broker("c", "h3", 3));

        registry.add(broker("b", "elsewhere", 4));

        let names: Vec<_> = registry.list().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(registry.get("b").unwrap().host, "elsewhere");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = ConnectionRegistry::new();
        registry.add(broker("broker1", "localhost", 7676));

        registry.remove("no-such-broker");

        assert_eq!(registry.len(), 1);
        assert!(registry.exists("broker1"));
    }

    #[test]
    fn test_remove_present() {
        let mut registry = ConnectionRegistry::new();
        registry.add(broker("broker1", "localhost", 7676));
        registry.remove("broker1");
        assert!(registry.is_empty());
        assert!(!registry.exists("broker1"));
    }

    #[test]
    fn test_list_keeps_insertion_order_and_restarts() {
        let mut registry = ConnectionRegistry::new();
        registry.add(broker("z", "h1", 1));
        registry.add(broker("a", "h2", 2));
        registry.add(broker("m", "h3", 3));

        let first: Vec<_> = registry.list().map(|e| e.name.clone()).collect();
        let second: Vec<_> = registry.list().map(|e| e.name.clone()).collect();
        assert_eq!(first, ["z", "a", "m"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_connected_is_advisory() {
        let mut registry = ConnectionRegistry::new();
        registry.add(broker("broker1", "localhost", 7676));

        registry.set_connected("broker1", true);
        assert!(registry.get("broker1").unwrap().connected);

        // Absent name is ignored, matching remove semantics
        registry.set_connected("ghost", true);
        assert!(!registry.exists("ghost"));
    }
}
