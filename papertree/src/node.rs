//! The recursive node state machine.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};

use crate::event::{Interaction, NodeEvent};
use crate::marker::Marker;
use crate::record::{Children, NodeRecord};

/// Identity of a mounted node. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__node_{}", self.0)
    }
}

/// One rendered tree entry.
///
/// A node derives its open state and child list from the record it was given
/// and never writes back to that record. Child nodes exist only while the
/// node is open; closing drops them together with any state they held.
#[derive(Debug)]
pub struct TreeNode {
    id: NodeId,
    /// Record currently assigned to this node.
    data: NodeRecord,
    /// Record the parent last handed down. Data assigned later, e.g. by a
    /// toggle listener, is not overwritten until the parent's record changes.
    supplied: NodeRecord,
    /// Child records, replaced whenever a record with `children` arrives.
    derived_children: Children,
    open: bool,
    /// Visual flag, written only by the owning tree.
    selected: bool,
    /// Mounted child nodes, one per derived child while open.
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Mount a node for `record`.
    pub fn new(record: NodeRecord) -> Self {
        let mut node = Self {
            id: NodeId::new(),
            data: NodeRecord::default(),
            supplied: record.clone(),
            derived_children: Arc::from(Vec::new()),
            open: false,
            selected: false,
            children: Vec::new(),
        };
        node.set_data(record);
        node
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &NodeRecord {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Icon identifier, `"folder"` when the record has none.
    pub fn icon(&self) -> &str {
        self.data.icon_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Child records this node renders when open.
    pub fn derived_children(&self) -> &[NodeRecord] {
        &self.derived_children
    }

    /// Mounted child nodes. Empty while closed.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [TreeNode] {
        &mut self.children
    }

    /// Ids of the mounted direct children.
    pub fn get_children(&self) -> Vec<NodeId> {
        self.children.iter().map(TreeNode::id).collect()
    }

    pub fn marker(&self) -> Marker {
        Marker::derive(self.open, self.derived_children.len())
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Assign a new record.
    ///
    /// Present `children` always replace the derived list; absent `children`
    /// keep the previous one. A truthy `open` forces the node open, a falsy
    /// one never closes it. Emits nothing.
    pub fn set_data(&mut self, record: NodeRecord) {
        if let Some(children) = &record.children {
            self.derived_children = Arc::clone(children);
        }
        if record.opens() {
            self.open = true;
        }
        debug!(
            "{} data '{}' (open={}, children={})",
            self.id,
            record.name,
            self.open,
            self.derived_children.len()
        );
        self.data = record;
        self.sync_children();
    }

    /// Emit a select notification for this node. Local state is untouched.
    pub fn select(&self) -> NodeEvent {
        debug!("{} select", self.id);
        NodeEvent::select(self.id)
    }

    /// Flip the open state.
    ///
    /// A node opens only if it is closed and its current record has children;
    /// every other case closes it.
    pub fn toggle(&mut self) -> NodeEvent {
        self.open = !self.open && self.data.has_children();
        debug!("{} toggle -> open={}", self.id, self.open);
        self.sync_children();
        NodeEvent::toggle(self.id)
    }

    /// Route an interaction to the node with id `target` and bubble the
    /// resulting event back up to this node. `None` if `target` is not
    /// mounted under this node.
    pub fn dispatch(&mut self, target: NodeId, interaction: Interaction) -> Option<NodeEvent> {
        if self.id == target {
            return Some(match interaction {
                Interaction::Select => self.select(),
                Interaction::Toggle => self.toggle(),
            });
        }

        let event = self
            .children
            .iter_mut()
            .find_map(|child| child.dispatch(target, interaction))?;
        Some(self.on_bubble(event))
    }

    /// Ancestors pass events through unchanged.
    fn on_bubble(&self, event: NodeEvent) -> NodeEvent {
        trace!("{} bubbles {} from {:?}", self.id, event.kind, event.detail);
        event
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Find a mounted node by id in this subtree (including self).
    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Bring mounted children in line with `open` and the derived list.
    ///
    /// Children are matched by position. A child only receives its record
    /// again when it differs from the one last handed to it.
    fn sync_children(&mut self) {
        if !self.open {
            if !self.children.is_empty() {
                trace!("{} unmounting {} children", self.id, self.children.len());
                self.children.clear();
            }
            return;
        }

        let records = Arc::clone(&self.derived_children);
        self.children.truncate(records.len());
        for (index, record) in records.iter().enumerate() {
            match self.children.get_mut(index) {
                Some(child) if child.supplied == *record => {}
                Some(child) => {
                    child.supplied = record.clone();
                    child.set_data(record.clone());
                }
                None => self.children.push(TreeNode::new(record.clone())),
            }
        }
    }
}
