use chrono::{Duration, NaiveDateTime};

use crate::model::date::DueDate;
use crate::model::node::{NodeId, TaskNode};
use crate::model::tree::TaskTree;

/// Spread a bulk task over the days remaining before its deadline, or
/// recurse through structural parents re-planning each incomplete child.
///
/// Returns the effective due date: the deadline of the last day bucket
/// emitted, threaded forward so a following sibling starts planning where
/// this task's schedule ends. A node with nothing to subdivide (no bulk
/// items, or due today or earlier) reports its own deadline unchanged.
pub fn subdivide(tree: &mut TaskTree, id: NodeId, starting_point: NaiveDateTime) -> NaiveDateTime {
    // A bulk node that was already subdivided: fast-forward the starting
    // index past the leading run of completed day buckets, then discard the
    // old buckets so the remainder is re-planned from scratch.
    if tree.node(id).task_count > 0 && !tree.node(id).children.is_empty() {
        let children = tree.node(id).children.clone();
        for child in children {
            if tree.node(child).completed {
                let resume = tree.node(child).ending_index + 1;
                tree.node_mut(id).starting_index = resume;
            } else {
                break;
            }
        }
        let node = tree.node_mut(id);
        node.children.clear();
        node.is_parent = false;
    }

    // Still a parent: a structural container. Thread the starting point
    // through each incomplete child in order.
    if tree.node(id).is_parent {
        let children = tree.node(id).children.clone();
        let mut point = starting_point;
        for child in children {
            if !tree.node(child).completed {
                point = subdivide(tree, child, point);
            }
        }
        return point;
    }

    let deadline = tree.node(id).due.to_naive();
    let num_of_days = (deadline - starting_point).num_days();

    let task_count = tree.node(id).task_count;
    if task_count == 0 || num_of_days <= 0 {
        return deadline;
    }

    let tasks_per_day = f64::from(task_count) / num_of_days as f64;
    let mut day_count: i64 = 0;
    let mut new_time = deadline;

    let mut i = f64::from(tree.node(id).starting_index);
    while i < f64::from(task_count) {
        let mut end = i + tasks_per_day;
        if end as u32 == i as u32 {
            // Tomorrow is still on the same work item: no bucket today.
            day_count += 1;
            i += tasks_per_day;
            continue;
        }
        // The boundary item belongs to the next bucket.
        end -= 1.0;
        if end >= f64::from(task_count) {
            end = f64::from(task_count - 1);
        }

        let start_index = i as u32;
        let end_index = end as u32;
        let category = if end_index == start_index {
            format!("{}: {}", tree.node(id).category, start_index)
        } else {
            format!("{}: {} - {}", tree.node(id).category, start_index, end_index)
        };

        new_time = starting_point + Duration::days(day_count);
        let mut bucket = TaskNode::new(category, DueDate::from(new_time));
        bucket.starting_index = start_index;
        bucket.ending_index = end_index;
        bucket.parent = Some(id);
        let bucket_id = tree.insert(bucket);

        // Buckets attach directly: the earliest-child aggregate and the
        // lifetime child counter of the bulk node stay untouched.
        let node = tree.node_mut(id);
        node.children.push(bucket_id);
        node.is_parent = true;

        day_count += 1;
        i += tasks_per_day;
    }

    new_time
}
