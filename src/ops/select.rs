use std::cmp::Ordering;

use crate::model::node::NodeId;
use crate::model::tree::TaskTree;

/// Error type for next-task selection
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("no eligible task: every branch under the node is completed")]
    NoEligibleTask,
}

/// Pick the task to work on next from the subtree under `id`.
///
/// A leaf is always its own recommendation, completed or not; callers are
/// expected to check the flag. A parent recurses into each incomplete child
/// in order and keeps the candidate due soonest, breaking exact schedule
/// ties in favor of the candidate that has had more children attached over
/// its lifetime (the larger unexplored subtree).
pub fn choose_task(tree: &TaskTree, id: NodeId) -> Result<NodeId, SelectError> {
    if !tree.node(id).is_parent() {
        return Ok(id);
    }

    let mut best: Option<NodeId> = None;
    for &child in &tree.node(id).children {
        if tree.node(child).is_completed() {
            continue;
        }
        let candidate = choose_task(tree, child)?;
        best = Some(match best {
            None => candidate,
            Some(current) => prefer(tree, current, candidate),
        });
    }
    best.ok_or(SelectError::NoEligibleTask)
}

fn prefer(tree: &TaskTree, current: NodeId, candidate: NodeId) -> NodeId {
    match tree.node(candidate).schedule_cmp(tree.node(current)) {
        Ordering::Less => candidate,
        Ordering::Equal
            if tree.node(candidate).children_added() > tree.node(current).children_added() =>
        {
            candidate
        }
        _ => current,
    }
}
