//! Pipeline nodes that transform a collection of contigs.

pub mod sort_node;
pub use sort_node::*;

pub mod unplaced_node;
pub use unplaced_node::*;

pub mod rename_node;
pub use rename_node::*;

pub mod table_rename_node;
pub use table_rename_node::*;

pub mod revcomp_node;
pub use revcomp_node::*;
