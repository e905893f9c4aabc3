use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use tempfile::NamedTempFile;

use crate::model::date::DueDate;
use crate::model::tree::TaskTree;

/// Error type for snapshot persistence
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("could not write snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read a snapshot file. Returns `None` when the file is missing or does
/// not decode; the host starts fresh on any trouble.
pub fn read_snapshot(path: &Path) -> Option<TaskTree> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write the whole tree to `path`, going through a sibling temp file so a
/// crash mid-write cannot truncate the previous snapshot.
pub fn write_snapshot(path: &Path, tree: &TaskTree) -> Result<(), SnapshotError> {
    let content = serde_json::to_string_pretty(tree)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| SnapshotError::Io(e.error))?;
    Ok(())
}

/// Load the tree from `path`, or start a fresh one: a single root labeled
/// "Task List", due right now.
pub fn load_or_init(path: &Path) -> TaskTree {
    read_snapshot(path)
        .unwrap_or_else(|| TaskTree::new("Task List", DueDate::from(Local::now().naive_local())))
}
