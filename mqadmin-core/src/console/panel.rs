//! Inspector panel kinds and their node dispatch table.

use super::node::NodeKind;

/// The inspector panels the console can show
///
/// A closed enumeration with a static dispatch table; panels are looked
/// up by node kind, never by class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Tabular list of configured brokers
    BrokerList,
    /// Details of one broker
    BrokerInspector,
    /// Tabular list of a broker's services
    ServiceList,
    /// Details of one service
    ServiceInspector,
    /// Tabular list of a broker's destinations
    DestinationList,
    /// Details of one destination
    DestinationInspector,
    /// Tabular list of broker logs
    LogList,
    /// Contents of one log
    LogInspector,
    /// Tabular list of configured object stores
    ObjStoreList,
    /// Details of one object store
    ObjStoreInspector,
    /// Administered objects of one object store
    ObjStoreDestinationList,
}

impl PanelKind {
    /// Returns the panel shown when a node of the given kind is selected
    #[must_use]
    pub const fn for_node(kind: NodeKind) -> Self {
        match kind {
            NodeKind::BrokerListRoot => Self::BrokerList,
            NodeKind::Broker => Self::BrokerInspector,
            NodeKind::ServiceList => Self::ServiceList,
            NodeKind::Service => Self::ServiceInspector,
            NodeKind::DestinationList => Self::DestinationList,
            NodeKind::Destination => Self::DestinationInspector,
            NodeKind::LogList => Self::LogList,
            NodeKind::Log => Self::LogInspector,
            NodeKind::ObjStoreListRoot => Self::ObjStoreList,
            NodeKind::ObjStore => Self::ObjStoreInspector,
            NodeKind::ObjStoreDestinationList => Self::ObjStoreDestinationList,
        }
    }

    /// Title shown in the inspector header
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BrokerList => "Brokers",
            Self::BrokerInspector => "Broker",
            Self::ServiceList => "Services",
            Self::ServiceInspector => "Service",
            Self::DestinationList => "Destinations",
            Self::DestinationInspector => "Destination",
            Self::LogList => "Logs",
            Self::LogInspector => "Log",
            Self::ObjStoreList => "Object Stores",
            Self::ObjStoreInspector => "Object Store",
            Self::ObjStoreDestinationList => "Destinations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_covers_entry_nodes() {
        assert_eq!(PanelKind::for_node(NodeKind::Broker), PanelKind::BrokerInspector);
        assert_eq!(PanelKind::for_node(NodeKind::ObjStore), PanelKind::ObjStoreInspector);
        assert_eq!(
            PanelKind::for_node(NodeKind::BrokerListRoot),
            PanelKind::BrokerList
        );
    }

    #[test]
    fn test_titles_non_empty() {
        for kind in [
            NodeKind::BrokerListRoot,
            NodeKind::Broker,
            NodeKind::ServiceList,
            NodeKind::Service,
            NodeKind::DestinationList,
            NodeKind::Destination,
            NodeKind::LogList,
            NodeKind::Log,
            NodeKind::ObjStoreListRoot,
            NodeKind::ObjStore,
            NodeKind::ObjStoreDestinationList,
        ] {
            assert!(!PanelKind::for_node(kind).title().is_empty());
        }
    }
}
