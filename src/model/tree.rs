use serde::{Deserialize, Serialize};

use crate::model::date::DueDate;
use crate::model::node::{NodeId, TaskNode};

/// Arena-backed task tree.
///
/// Every node lives in one owning vector; parent and child links are
/// [`NodeId`] indexes into it, so the parent back-reference never owns
/// anything. Nodes detached by collapse or re-subdivision simply become
/// unreachable slots: they ride through snapshots untouched and are
/// never visible from the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTree {
    nodes: Vec<TaskNode>,
    root: NodeId,
}

impl TaskTree {
    /// Create a tree holding a single root task.
    pub fn new(category: impl Into<String>, due: DueDate) -> Self {
        TaskTree {
            nodes: vec![TaskNode::new(category, due)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TaskNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TaskNode {
        &mut self.nodes[id.0]
    }

    /// Place a detached node into the arena and hand back its id. The node
    /// is not reachable from the root until attached with [`add_child`].
    ///
    /// [`add_child`]: TaskTree::add_child
    pub fn insert(&mut self, node: TaskNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Attach `child` under `parent`.
    ///
    /// Adding work reopens a completed parent. If the child is due strictly
    /// before everything the parent has seen so far, the parent's
    /// earliest-child aggregate takes over the child's own aggregate. The
    /// update looks one level down only: it is never recomputed when
    /// children finish or are pruned, so the aggregate can only ever be
    /// pulled earlier.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        let child_due = self.node(child).due;
        let child_earliest = self.node(child).earliest_due;
        self.node_mut(child).parent = Some(parent);

        let node = self.node_mut(parent);
        node.children.push(child);
        node.children_added += 1;
        node.is_parent = true;
        node.completed = false;
        if child_due < node.earliest_due {
            node.earliest_due = child_earliest;
        }
    }

    /// Child at `index`, or `None` past the end. Hosts enumerate children by
    /// counting up until this returns `None`.
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// Number of children currently attached.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }
}
