use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};

use crate::cli::commands::{AddArgs, Cli, Commands, PathArgs, SubdivideArgs};
use crate::cli::output;
use crate::io::snapshot;
use crate::model::date::{DateError, DueDate};
use crate::model::node::{NodeId, TaskNode};
use crate::model::tree::TaskTree;
use crate::ops::select::SelectError;
use crate::ops::{complete, select, subdivide};

/// Error type for host-level command handling
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no task at path '{0}'")]
    BadPath(String),
    #[error("invalid due date: {0}")]
    BadDateInput(#[from] chrono::ParseError),
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Snapshot(#[from] snapshot::SnapshotError),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = PathBuf::from(&cli.file);
    match cli.command.unwrap_or(Commands::List) {
        Commands::List => cmd_list(&file),
        Commands::Show(args) => cmd_show(&file, args),
        Commands::Next => cmd_next(&file),
        Commands::Add(args) => cmd_add(&file, args),
        Commands::Toggle(args) => cmd_toggle(&file, args),
        Commands::Subdivide(args) => cmd_subdivide(&file, args),
    }?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(file: &Path) -> Result<(), HostError> {
    let tree = snapshot::load_or_init(file);
    print!("{}", output::render_tree(&tree));
    Ok(())
}

fn cmd_show(file: &Path, args: PathArgs) -> Result<(), HostError> {
    let tree = snapshot::load_or_init(file);
    let id = resolve_path(&tree, &args.path)?;
    print!("{}", output::render_details(&tree, id));
    Ok(())
}

fn cmd_next(file: &Path) -> Result<(), HostError> {
    let tree = snapshot::load_or_init(file);
    let id = select::choose_task(&tree, tree.root())?;
    let node = tree.node(id);
    println!("Next task: {} (due {})", node, node.due_string());
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(file: &Path, args: AddArgs) -> Result<(), HostError> {
    let mut tree = snapshot::load_or_init(file);
    let parent = resolve_path(&tree, &args.under)?;

    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")?;
    let hour = to_military(args.hour, args.pm);
    let due = DueDate::new(date.year(), date.month(), date.day(), hour, args.minute)?;

    let mut node = TaskNode::new(args.category.clone(), due);
    // The bulk range runs from the starting offset up through the count, so
    // the offset folds into the total.
    node.set_task_count(args.count + args.start);
    node.set_starting_index(args.start);

    let id = tree.insert(node);
    tree.add_child(parent, id);
    snapshot::write_snapshot(file, &tree)?;

    println!("added '{}' (due {})", args.category, due.formatted());
    Ok(())
}

fn cmd_toggle(file: &Path, args: PathArgs) -> Result<(), HostError> {
    let mut tree = snapshot::load_or_init(file);
    let id = resolve_path(&tree, &args.path)?;
    let value = !tree.node(id).is_completed();
    complete::set_completed(&mut tree, id, value);
    snapshot::write_snapshot(file, &tree)?;

    let state = if value { "completed" } else { "reopened" };
    println!("{} '{}'", state, tree.node(id));
    Ok(())
}

fn cmd_subdivide(file: &Path, args: SubdivideArgs) -> Result<(), HostError> {
    let mut tree = snapshot::load_or_init(file);
    let id = resolve_path(&tree, &args.path)?;
    let effective = subdivide::subdivide(&mut tree, id, Local::now().naive_local());
    snapshot::write_snapshot(file, &tree)?;

    println!("planned through {}", DueDate::from(effective).formatted());
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a 12-hour clock reading to 0-23. Noon/midnight first: an input
/// of 12 means 0, and the PM flag then adds 12.
fn to_military(hour: u32, pm: bool) -> u32 {
    let hour = if hour == 12 { 0 } else { hour };
    if pm { hour + 12 } else { hour }
}

/// Walk a dot-separated child-index path down from the root.
fn resolve_path(tree: &TaskTree, path: &str) -> Result<NodeId, HostError> {
    let mut id = tree.root();
    if path.is_empty() {
        return Ok(id);
    }
    for part in path.split('.') {
        let index: usize = part
            .parse()
            .map_err(|_| HostError::BadPath(path.to_string()))?;
        id = tree
            .child_at(id, index)
            .ok_or_else(|| HostError::BadPath(path.to_string()))?;
    }
    Ok(id)
}
