// ABOUTME: Partition tree model for the mondrian layout editor.
// ABOUTME: Implements splitting, removal with collapse, and render walks.

mod render;
mod tree;

pub use render::{leaf_rects, walk, Renderer};
pub use tree::{PartitionTree, Region, RegionId, SplitAxis, TreeError};
