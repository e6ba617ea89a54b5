//! Tree node kinds and their capability table.

use crate::models::EndpointDescriptor;

/// The kinds of node shown in the console tree
///
/// One closed enum covers the whole taxonomy: the two collection roots,
/// the configured endpoints beneath them, and the per-broker leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of the configured broker list
    BrokerListRoot,
    /// A configured broker entry
    Broker,
    /// Services of a connected broker
    ServiceList,
    /// A single broker service
    Service,
    /// Destinations of a connected broker
    DestinationList,
    /// A single destination (queue or topic)
    Destination,
    /// Log list of a connected broker
    LogList,
    /// A single broker log
    Log,
    /// Root of the configured object-store list
    ObjStoreListRoot,
    /// A configured object store entry
    ObjStore,
    /// Administered objects within an object store
    ObjStoreDestinationList,
}

/// Operator actions the console can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AdminAction {
    Add = 1 << 0,
    Delete = 1 << 1,
    Properties = 1 << 2,
    Connect = 1 << 3,
    Disconnect = 1 << 4,
    Pause = 1 << 5,
    Resume = 1 << 6,
    Restart = 1 << 7,
    Shutdown = 1 << 8,
    Purge = 1 << 9,
    Refresh = 1 << 10,
    QueryBroker = 1 << 11,
}

/// Set of allowed actions, stored as a bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet(u32);

impl ActionSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a slice of actions
    #[must_use]
    pub const fn of(actions: &[AdminAction]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < actions.len() {
            bits |= actions[i] as u32;
            i += 1;
        }
        Self(bits)
    }

    /// Returns true if the set allows the given action
    #[must_use]
    pub const fn allows(self, action: AdminAction) -> bool {
        self.0 & (action as u32) != 0
    }

    /// Returns the union of two sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if no action is allowed
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Icons the console renders next to tree nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    CollectionRoot,
    Broker,
    BrokerDisconnected,
    Service,
    Destination,
    Log,
    ObjStore,
    ObjStoreDisconnected,
}

/// Static description of a node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCapabilities {
    /// Default label for nodes of this kind
    pub label: &'static str,
    /// Icon shown when the underlying endpoint is reachable (or has no state)
    pub icon: IconId,
    /// Actions the operator may issue on this node
    pub actions: ActionSet,
}

/// Returns the capability record for a node kind
///
/// Pure function over the closed `NodeKind` set; this table replaces the
/// per-subclass label/icon/action-mask overrides of the original console.
#[must_use]
pub const fn capabilities(kind: NodeKind) -> NodeCapabilities {
    match kind {
        NodeKind::BrokerListRoot => NodeCapabilities {
            label: "Brokers",
            icon: IconId::CollectionRoot,
            actions: ActionSet::of(&[AdminAction::Add, AdminAction::Refresh]),
        },
        NodeKind::Broker => NodeCapabilities {
            label: "Broker",
            icon: IconId::Broker,
            actions: ActionSet::of(&[
                AdminAction::Delete,
                AdminAction::Properties,
                AdminAction::Connect,
                AdminAction::Disconnect,
                AdminAction::Pause,
                AdminAction::Resume,
                AdminAction::Restart,
                AdminAction::Shutdown,
                AdminAction::QueryBroker,
            ]),
        },
        NodeKind::ServiceList => NodeCapabilities {
            label: "Services",
            icon: IconId::CollectionRoot,
            actions: ActionSet::of(&[AdminAction::Refresh]),
        },
        NodeKind::Service => NodeCapabilities {
            label: "Service",
            icon: IconId::Service,
            actions: ActionSet::of(&[
                AdminAction::Properties,
                AdminAction::Pause,
                AdminAction::Resume,
            ]),
        },
        NodeKind::DestinationList => NodeCapabilities {
            label: "Destinations",
            icon: IconId::CollectionRoot,
            actions: ActionSet::of(&[AdminAction::Add, AdminAction::Refresh]),
        },
        NodeKind::Destination => NodeCapabilities {
            label: "Destination",
            icon: IconId::Destination,
            actions: ActionSet::of(&[
                AdminAction::Delete,
                AdminAction::Properties,
                AdminAction::Pause,
                AdminAction::Resume,
                AdminAction::Purge,
            ]),
        },
        NodeKind::LogList => NodeCapabilities {
            label: "Logs",
            icon: IconId::CollectionRoot,
            actions: ActionSet::of(&[AdminAction::Refresh]),
        },
        NodeKind::Log => NodeCapabilities {
            label: "Log",
            icon: IconId::Log,
            actions: ActionSet::of(&[AdminAction::Properties]),
        },
        NodeKind::ObjStoreListRoot => NodeCapabilities {
            label: "Object Stores",
            icon: IconId::CollectionRoot,
            actions: ActionSet::of(&[AdminAction::Add, AdminAction::Refresh]),
        },
        NodeKind::ObjStore => NodeCapabilities {
            label: "Object Store",
            icon: IconId::ObjStore,
            actions: ActionSet::of(&[
                AdminAction::Delete,
                AdminAction::Properties,
                AdminAction::Connect,
                AdminAction::Disconnect,
            ]),
        },
        NodeKind::ObjStoreDestinationList => NodeCapabilities {
            label: "Destinations",
            icon: IconId::CollectionRoot,
            actions: ActionSet::of(&[AdminAction::Add, AdminAction::Refresh]),
        },
    }
}

/// Formats the tree label for a configured endpoint
///
/// Appends the advisory connection state, e.g. `broker1 (disconnected)`.
#[must_use]
pub fn endpoint_label(endpoint: &EndpointDescriptor) -> String {
    let state = if endpoint.connected {
        "connected"
    } else {
        "disconnected"
    };
    format!("{} ({state})", endpoint.name)
}
