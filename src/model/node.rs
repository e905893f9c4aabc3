use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::date::DueDate;

/// Handle to a node stored in a [`TaskTree`] arena.
///
/// [`TaskTree`]: crate::model::tree::TaskTree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

/// A single task: its own deadline, the earliest deadline seen among its
/// direct children, completion state, and an optional bulk work range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    pub(crate) category: String,
    pub(crate) due: DueDate,
    /// Earliest due date among this node and the children added so far.
    /// Pulled earlier when a child is added, never recomputed on removal.
    pub(crate) earliest_due: DueDate,
    pub(crate) completed: bool,
    pub(crate) is_parent: bool,
    /// How many children were ever attached explicitly; never decremented,
    /// not even when the child list is pruned.
    pub(crate) children_added: u32,
    /// Total number of discrete work items for a bulk task (0 = not bulk).
    pub(crate) task_count: u32,
    pub(crate) starting_index: u32,
    pub(crate) ending_index: u32,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl TaskNode {
    /// Create a fresh leaf task. Its earliest-child aggregate starts equal
    /// to its own due date.
    pub fn new(category: impl Into<String>, due: DueDate) -> Self {
        TaskNode {
            category: category.into(),
            due,
            earliest_due: due,
            completed: false,
            is_parent: false,
            children_added: 0,
            task_count: 0,
            starting_index: 0,
            ending_index: 0,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn due(&self) -> DueDate {
        self.due
    }

    /// Formatted due date for display, e.g. `2024 MARCH 15, 3:05 pm`.
    pub fn due_string(&self) -> String {
        self.due.formatted()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_parent(&self) -> bool {
        self.is_parent
    }

    pub fn task_count(&self) -> u32 {
        self.task_count
    }

    pub fn set_task_count(&mut self, task_count: u32) {
        self.task_count = task_count;
    }

    pub fn starting_index(&self) -> u32 {
        self.starting_index
    }

    pub fn set_starting_index(&mut self, starting_index: u32) {
        self.starting_index = starting_index;
    }

    pub fn ending_index(&self) -> u32 {
        self.ending_index
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn children_added(&self) -> u32 {
        self.children_added
    }

    /// Which node has work due first.
    ///
    /// Compares the earliest-child aggregate field by field, then the node's
    /// own due date as the tie-break, ten fields in all. `Less` means this
    /// node's nearest upcoming deadline comes sooner.
    pub fn schedule_cmp(&self, other: &TaskNode) -> Ordering {
        (self.earliest_due, self.due).cmp(&(other.earliest_due, other.due))
    }
}

impl fmt::Display for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}
