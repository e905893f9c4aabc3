pub mod date;
pub mod node;
pub mod tree;

pub use date::*;
pub use node::*;
pub use tree::*;
