use std::cell::RefCell;
use std::rc::Rc;

use papertree::{EventKind, Interaction, NodeEvent, NodeId, NodeRecord, PaperTree, Propagation};

fn open_tree() -> PaperTree {
    PaperTree::new(
        NodeRecord::new("root").open(true).children(vec![
            NodeRecord::new("a")
                .open(true)
                .children(vec![NodeRecord::new("a1"), NodeRecord::new("a2")]),
            NodeRecord::new("b"),
        ]),
    )
}

fn id_of(tree: &PaperTree, path: &[&str]) -> NodeId {
    tree.find_by_path(path).expect("node mounted").id()
}

fn selected_count(tree: &PaperTree) -> usize {
    tree.node_ids()
        .into_iter()
        .filter(|id| tree.is_selected(*id))
        .count()
}

// ============================================================================
// Single selection
// ============================================================================

#[test]
fn test_select_marks_node() {
    let mut tree = open_tree();
    let a1 = id_of(&tree, &["a", "a1"]);

    assert_eq!(tree.interact(a1, Interaction::Select), Some(Propagation::Stop));
    assert_eq!(tree.selected(), Some(a1));
    assert!(tree.is_selected(a1));
    assert_eq!(selected_count(&tree), 1);
}

#[test]
fn test_selecting_another_node_moves_selection() {
    let mut tree = open_tree();
    let a1 = id_of(&tree, &["a", "a1"]);
    let b = id_of(&tree, &["b"]);

    tree.interact(a1, Interaction::Select);
    tree.interact(b, Interaction::Select);

    assert!(!tree.is_selected(a1));
    assert!(tree.is_selected(b));
    assert_eq!(tree.selected(), Some(b));
    assert_eq!(selected_count(&tree), 1);
}

#[test]
fn test_reselect_deselects() {
    let mut tree = open_tree();
    let a2 = id_of(&tree, &["a", "a2"]);

    tree.interact(a2, Interaction::Select);
    tree.interact(a2, Interaction::Select);

    assert!(!tree.is_selected(a2));
    assert_eq!(tree.selected(), None);
    assert_eq!(selected_count(&tree), 0);

    // A third click selects again.
    tree.interact(a2, Interaction::Select);
    assert!(tree.is_selected(a2));
}

#[test]
fn test_root_can_be_selected() {
    let mut tree = open_tree();
    let root = tree.root().id();

    tree.interact(root, Interaction::Select);
    assert!(tree.root().is_selected());
}

#[test]
fn test_select_does_not_change_open_state() {
    let mut tree = open_tree();
    let a = id_of(&tree, &["a"]);

    tree.interact(a, Interaction::Select);
    assert!(tree.find(a).unwrap().is_open());
}

// ============================================================================
// Malformed notifications
// ============================================================================

#[test]
fn test_select_without_detail_clears_selection() {
    let mut tree = open_tree();
    let b = id_of(&tree, &["b"]);
    tree.interact(b, Interaction::Select);

    let result = tree.handle(NodeEvent::new(EventKind::Select, None));

    assert_eq!(result, Propagation::Stop);
    assert_eq!(tree.selected(), None);
    assert!(!tree.is_selected(b));
}

#[test]
fn test_select_from_foreign_node_clears_selection() {
    let mut tree = open_tree();
    let b = id_of(&tree, &["b"]);
    tree.interact(b, Interaction::Select);

    let stranger = PaperTree::new(NodeRecord::new("other")).root().id();
    tree.handle(NodeEvent::select(stranger));

    assert_eq!(tree.selected(), None);
    assert_eq!(selected_count(&tree), 0);
}

#[test]
fn test_interaction_with_unmounted_target_is_ignored() {
    let mut tree = open_tree();
    let stranger = PaperTree::new(NodeRecord::new("other")).root().id();

    assert_eq!(tree.interact(stranger, Interaction::Select), None);
    assert_eq!(tree.selected(), None);
}

// ============================================================================
// Unmounting the selection
// ============================================================================

#[test]
fn test_collapsing_ancestor_drops_selection() {
    let mut tree = open_tree();
    let a = id_of(&tree, &["a"]);
    let a1 = id_of(&tree, &["a", "a1"]);

    tree.interact(a1, Interaction::Select);
    tree.interact(a, Interaction::Toggle);

    assert!(tree.find(a1).is_none());
    assert_eq!(tree.selected(), None);

    // Re-expanding mounts fresh, unselected nodes.
    tree.interact(a, Interaction::Toggle);
    let fresh = id_of(&tree, &["a", "a1"]);
    assert_ne!(fresh, a1);
    assert!(!tree.is_selected(fresh));
    assert_eq!(selected_count(&tree), 0);
}

// ============================================================================
// Listeners
// ============================================================================

#[test]
fn test_select_listener_sees_each_change() {
    let mut tree = open_tree();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    tree.on_select(move |selected| sink.borrow_mut().push(selected));

    let b = id_of(&tree, &["b"]);
    tree.interact(b, Interaction::Select);
    tree.interact(b, Interaction::Select);

    assert_eq!(*seen.borrow(), vec![Some(b), None]);
}

#[test]
fn test_select_listener_told_when_selection_unmounts() {
    let mut tree = open_tree();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    tree.on_select(move |selected| sink.borrow_mut().push(selected));

    let a = id_of(&tree, &["a"]);
    let a1 = id_of(&tree, &["a", "a1"]);
    tree.interact(a1, Interaction::Select);
    tree.interact(a, Interaction::Toggle);
    assert_eq!(*seen.borrow(), vec![Some(a1), None]);

    // Collapsing again with nothing selected stays quiet.
    tree.interact(a, Interaction::Toggle);
    tree.interact(a, Interaction::Toggle);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_select_listener_told_when_reassign_unmounts() {
    let mut tree = open_tree();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    tree.on_select(move |selected| sink.borrow_mut().push(selected));

    let b = id_of(&tree, &["b"]);
    tree.interact(b, Interaction::Select);
    tree.set_data(NodeRecord::new("root").children(vec![NodeRecord::new("a")]));

    assert!(tree.find(b).is_none());
    assert_eq!(tree.selected(), None);
    assert_eq!(*seen.borrow(), vec![Some(b), None]);
}

#[test]
fn test_set_node_data_by_id() {
    let mut tree = open_tree();
    let b = id_of(&tree, &["b"]);
    tree.interact(b, Interaction::Select);

    assert!(tree.set_node_data(b, NodeRecord::new("b2").icon("file")));
    let node = tree.find(b).unwrap();
    assert_eq!(node.name(), "b2");
    assert_eq!(node.icon(), "file");
    assert_eq!(tree.selected(), Some(b));

    let stranger = PaperTree::new(NodeRecord::new("other")).root().id();
    assert!(!tree.set_node_data(stranger, NodeRecord::new("x")));
}

#[test]
fn test_actions_forwarded_to_every_node() {
    let actions = vec![
        papertree::Action::new("Rename", "rename"),
        papertree::Action::new("Delete", "delete"),
    ];
    let tree = open_tree().with_actions(actions.clone());

    for id in tree.node_ids() {
        assert_eq!(tree.node_actions(id), Some(actions.as_slice()));
    }

    let stranger = PaperTree::new(NodeRecord::new("other")).root().id();
    assert_eq!(tree.node_actions(stranger), None);
}

#[test]
fn test_get_parent() {
    let tree = open_tree();
    let a = id_of(&tree, &["a"]);
    let a2 = id_of(&tree, &["a", "a2"]);

    assert_eq!(tree.get_parent(a2), Some(a));
    assert_eq!(tree.get_parent(a), Some(tree.root().id()));
    assert_eq!(tree.get_parent(tree.root().id()), None);
    assert_eq!(tree.find(a).unwrap().get_children(), vec![id_of(&tree, &["a", "a1"]), a2]);
}
