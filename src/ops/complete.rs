use crate::model::node::NodeId;
use crate::model::tree::TaskTree;

/// Set a node's completion flag and cascade through the tree.
///
/// Every child currently attached is driven to completed, even when `value`
/// is `false`; marking a node incomplete never reverts its descendants. When
/// `value` is `true` the node's parent is asked to collapse, which is how
/// completion bubbles upward through fully finished branches.
pub fn set_completed(tree: &mut TaskTree, id: NodeId, value: bool) {
    tree.node_mut(id).completed = value;

    let children = tree.node(id).children.clone();
    for child in children {
        set_completed(tree, child, true);
    }

    if value && let Some(parent) = tree.node(id).parent {
        collapse_completed(tree, parent);
    }
}

/// Prune a node whose children have all finished: the child list is emptied
/// and the node itself is marked completed, which recurses upward. A single
/// incomplete child blocks the collapse and leaves the node untouched.
pub fn collapse_completed(tree: &mut TaskTree, id: NodeId) {
    let all_done = tree
        .node(id)
        .children
        .iter()
        .all(|&child| tree.node(child).completed);

    if all_done {
        let node = tree.node_mut(id);
        node.children.clear();
        node.is_parent = false;
        set_completed(tree, id, true);
    }
}
