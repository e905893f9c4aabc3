use std::fmt::Write;

use crate::model::node::NodeId;
use crate::model::tree::TaskTree;

/// Render the whole tree as a tab-indented outline, one task per line.
pub fn render_tree(tree: &TaskTree) -> String {
    let mut out = String::new();
    render_node(tree, tree.root(), 0, &mut out);
    out
}

fn render_node(tree: &TaskTree, id: NodeId, indent: usize, out: &mut String) {
    let node = tree.node(id);
    let due = node.due();
    let _ = writeln!(
        out,
        "{}{}: due {} {} {} - {}:{:02}",
        "\t".repeat(indent),
        node.category(),
        due.year(),
        due.month(),
        due.day(),
        due.hour(),
        due.minute()
    );

    // Enumerate by index until the not-found indicator, the way hosts do.
    let mut index = 0;
    while let Some(child) = tree.child_at(id, index) {
        render_node(tree, child, indent + 1, out);
        index += 1;
    }
}

/// Render one task's details the way the info pane shows them.
pub fn render_details(tree: &TaskTree, id: NodeId) -> String {
    let node = tree.node(id);
    let completed = if node.is_completed() { "YES" } else { "NO" };
    format!(
        "Task: {}\nDue: {}\nSub-task count: {}\nCompleted: {}\n",
        node, // display label: the category
        node.due_string(),
        node.task_count(),
        completed
    )
}
