use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "st",
    about = concat!("[st] stint v", env!("CARGO_PKG_VERSION"), " - your deadlines, one tree"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snapshot file to operate on
    #[arg(long = "file", global = true, default_value = "tasktree.json")]
    pub file: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the whole task tree (default)
    List,
    /// Show one task's details
    Show(PathArgs),
    /// Add a task under a parent
    Add(AddArgs),
    /// Pick the task to work on next
    Next,
    /// Toggle a task's completion, cascading through the tree
    Toggle(PathArgs),
    /// Re-plan bulk tasks into day buckets, starting today
    Subdivide(SubdivideArgs),
}

/// Tasks are addressed by dot-separated child indexes from the root:
/// `""` is the root, `2` its third child, `2.0` that child's first child.
#[derive(Args)]
pub struct PathArgs {
    /// Task path
    pub path: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub category: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Due hour on a 12-hour clock (1-12)
    #[arg(long, default_value = "12")]
    pub hour: u32,
    /// Due minute
    #[arg(long, default_value = "0")]
    pub minute: u32,
    /// Afternoon
    #[arg(long)]
    pub pm: bool,
    /// Parent task path (root if omitted)
    #[arg(long, default_value = "")]
    pub under: String,
    /// Number of bulk work items
    #[arg(long, default_value = "0")]
    pub count: u32,
    /// Index of the first bulk work item
    #[arg(long, default_value = "0")]
    pub start: u32,
}

#[derive(Args)]
pub struct SubdivideArgs {
    /// Task path (root if omitted)
    #[arg(default_value = "")]
    pub path: String,
}
