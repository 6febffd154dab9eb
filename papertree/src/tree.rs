//! Root container enforcing single selection.

use std::fmt;
use std::ops::Deref;

use log::debug;

use crate::event::{EventKind, Interaction, NodeEvent, Propagation};
use crate::node::{NodeId, TreeNode};
use crate::record::{Action, NodeRecord};
use crate::walk;

/// Host callback for selection changes. Receives the new selection.
pub type SelectListener = Box<dyn FnMut(Option<NodeId>)>;

/// Host callback for toggles. Receives the toggled node so the host can
/// assign new data to it, e.g. to populate children lazily.
pub type ToggleListener = Box<dyn FnMut(&mut NodeMut<'_>)>;

/// A mounted node as seen by a toggle listener. Reads like the node and
/// allows assigning new data, nothing else.
pub struct NodeMut<'a> {
    node: &'a mut TreeNode,
}

impl NodeMut<'_> {
    pub fn set_data(&mut self, data: NodeRecord) {
        self.node.set_data(data);
    }
}

impl Deref for NodeMut<'_> {
    type Target = TreeNode;

    fn deref(&self) -> &TreeNode {
        self.node
    }
}

/// A tree with exactly one root node.
///
/// The tree is the terminal consumer of `select` events: after each one is
/// handled at most one mounted node carries the selected flag. `toggle`
/// events pass through to the registered toggle listeners.
///
/// # Example
///
/// ```
/// use papertree::{Interaction, NodeRecord, PaperTree};
///
/// let mut tree = PaperTree::new(
///     NodeRecord::new("root").children(vec![NodeRecord::new("a"), NodeRecord::new("b")]),
/// );
/// let root = tree.root().id();
/// tree.interact(root, Interaction::Toggle);
///
/// let a = tree.root().children()[0].id();
/// tree.interact(a, Interaction::Select);
/// assert_eq!(tree.selected(), Some(a));
/// ```
pub struct PaperTree {
    root: TreeNode,
    actions: Vec<Action>,
    selected: Option<NodeId>,
    select_listeners: Vec<SelectListener>,
    toggle_listeners: Vec<ToggleListener>,
}

impl PaperTree {
    pub fn new(data: NodeRecord) -> Self {
        Self {
            root: TreeNode::new(data),
            actions: Vec::new(),
            selected: None,
            select_listeners: Vec::new(),
            toggle_listeners: Vec::new(),
        }
    }

    /// Set the actions available on every node.
    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    pub fn set_actions(&mut self, actions: Vec<Action>) {
        self.actions = actions;
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Actions forwarded to the node `id`. Every live node gets the same list.
    pub fn node_actions(&self, id: NodeId) -> Option<&[Action]> {
        self.root.contains(id).then_some(self.actions.as_slice())
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Assign a new record to the root node.
    pub fn set_data(&mut self, data: NodeRecord) {
        self.root.set_data(data);
        self.prune_selection();
    }

    /// Assign a new record to the mounted node `id`. Returns `false` when
    /// `id` is not mounted.
    pub fn set_node_data(&mut self, id: NodeId, data: NodeRecord) -> bool {
        let Some(node) = self.root.find_mut(id) else {
            debug!("data for unmounted {id} ignored");
            return false;
        };
        node.set_data(data);
        self.prune_selection();
        true
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn on_select(&mut self, listener: impl FnMut(Option<NodeId>) + 'static) {
        self.select_listeners.push(Box::new(listener));
    }

    pub fn on_toggle(&mut self, listener: impl FnMut(&mut NodeMut<'_>) + 'static) {
        self.toggle_listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Route a user interaction to `target` and handle the bubbled event.
    /// Returns `None` when `target` is not mounted.
    pub fn interact(&mut self, target: NodeId, interaction: Interaction) -> Option<Propagation> {
        let Some(event) = self.root.dispatch(target, interaction) else {
            debug!("interaction {interaction:?} for unmounted {target}");
            return None;
        };
        Some(self.handle(event))
    }

    /// Handle an event that bubbled up from the root node.
    pub fn handle(&mut self, event: NodeEvent) -> Propagation {
        match event.kind {
            EventKind::Select => {
                self.select_node(event.detail);
                Propagation::Stop
            }
            EventKind::Toggle => {
                self.notify_toggle(event.detail);
                self.prune_selection();
                Propagation::Continue
            }
        }
    }

    fn select_node(&mut self, detail: Option<NodeId>) {
        let previous = self.selected.take();
        if let Some(prev) = previous
            && let Some(node) = self.root.find_mut(prev)
        {
            node.set_selected(false);
        }

        match detail.and_then(|id| self.root.find_mut(id)) {
            Some(node) => {
                // Selecting the selected node again deselects it.
                let now_selected = previous != Some(node.id());
                node.set_selected(now_selected);
                self.selected = now_selected.then_some(node.id());
            }
            None => {
                if let Some(id) = detail {
                    debug!("select from unmounted {id}, clearing selection");
                }
            }
        }

        debug!("selection {:?} -> {:?}", previous, self.selected);
        self.notify_select();
    }

    /// Drop a selection whose node was unmounted and tell the listeners.
    fn prune_selection(&mut self) {
        if let Some(id) = self.selected
            && !self.root.contains(id)
        {
            debug!("selected {id} unmounted, clearing selection");
            self.selected = None;
            self.notify_select();
        }
    }

    fn notify_select(&mut self) {
        for listener in &mut self.select_listeners {
            listener(self.selected);
        }
    }

    fn notify_toggle(&mut self, detail: Option<NodeId>) {
        let Some(node) = detail.and_then(|id| self.root.find_mut(id)) else {
            debug!("toggle without a mounted node: {detail:?}");
            return;
        };
        let mut node = NodeMut { node };
        for listener in &mut self.toggle_listeners {
            listener(&mut node);
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The selected node. Cleared as soon as that node is unmounted.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.selected.and_then(|id| self.root.find(id))
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.root.find(id).is_some_and(TreeNode::is_selected)
    }

    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        self.root.find(id)
    }

    /// Mounted parent of `id`. `None` for the root.
    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        walk::parent_of(&self.root, id)
    }

    /// Ids of every mounted node, root first, pre-order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        walk::pre_order(&self.root).map(|(_, node)| node.id()).collect()
    }

    /// Find the first mounted node whose names along the path from the root
    /// match `path`. The root's own name is not part of the path.
    pub fn find_by_path(&self, path: &[&str]) -> Option<&TreeNode> {
        path.iter().try_fold(&self.root, |node, name| {
            node.children().iter().find(|child| child.name() == *name)
        })
    }
}

impl fmt::Debug for PaperTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaperTree")
            .field("root", &self.root)
            .field("actions", &self.actions)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
