//! Notifications emitted by nodes and the bubbling protocol.
//!
//! A node reacts to an [`Interaction`] by producing a [`NodeEvent`]. The event
//! travels back up through every ancestor until the tree consumes it or lets
//! it through to the host.

use std::fmt;

use crate::node::NodeId;

/// Kind of notification a node emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Select,
    Toggle,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User input a host routes to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Click on the icon or the name.
    Select,
    /// Click on the twisty control.
    Toggle,
}

/// A bubbling notification.
///
/// `detail` identifies the node of origin. Hosts may construct events with
/// no detail or with an id that is not mounted; the tree treats those as
/// carrying no node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeEvent {
    pub kind: EventKind,
    pub detail: Option<NodeId>,
}

impl NodeEvent {
    pub fn new(kind: EventKind, detail: Option<NodeId>) -> Self {
        Self { kind, detail }
    }

    pub fn select(node: NodeId) -> Self {
        Self::new(EventKind::Select, Some(node))
    }

    pub fn toggle(node: NodeId) -> Self {
        Self::new(EventKind::Toggle, Some(node))
    }
}

/// What happens to an event after a consumer has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Keep bubbling towards the host.
    Continue,
    /// The consumer terminated the event.
    Stop,
}
