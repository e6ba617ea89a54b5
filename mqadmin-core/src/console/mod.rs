//! Presentation model for the console tree and inspector
//!
//! A read-only facade over registry entries and their advisory connection
//! state. Node behavior (label, icon, allowed actions, inspector panel) is
//! data computed by pure functions over a closed set of node kinds; there
//! is no per-node dispatch hierarchy and no reflective panel lookup.

mod node;
mod panel;

pub use node::{
    capabilities, endpoint_label, AdminAction, ActionSet, IconId, NodeCapabilities, NodeKind,
};
pub use panel::PanelKind;
