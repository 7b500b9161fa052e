// ABOUTME: Rendering contract between the partition tree and UI collaborators.
// ABOUTME: Walks the tree depth-first, computing bounds and control visibility.

use std::collections::HashMap;

use mondrian_core::Rect;

use crate::tree::{Region, RegionId, SplitAxis};

/// Every split divides its bounds into equal halves
const SPLIT_FRACTION: f32 = 0.5;

/// Receiver for a depth-first render pass over the tree.
///
/// Implementations draw cells however they like; the walk supplies each
/// region's bounds and whether its remove control should be offered.
pub trait Renderer {
    /// A leaf cell at its computed bounds
    fn leaf(&mut self, region: &Region, bounds: Rect, show_remove: bool);

    /// A split container, reported before its two children
    fn container(&mut self, region: &Region, bounds: Rect, axis: SplitAxis, show_remove: bool);
}

/// Drive a renderer over the whole tree, starting from the full canvas
pub fn walk<R: Renderer>(tree: &Region, renderer: &mut R) {
    walk_region(tree, tree, None, Rect::full(), renderer);
}

fn walk_region<R: Renderer>(
    root: &Region,
    region: &Region,
    parent_id: Option<&RegionId>,
    bounds: Rect,
    renderer: &mut R,
) {
    let show_remove = root.should_show_remove(region.id(), parent_id);
    match region {
        Region::Leaf { .. } => renderer.leaf(region, bounds, show_remove),
        Region::Split {
            id,
            axis,
            first,
            second,
        } => {
            renderer.container(region, bounds, *axis, show_remove);
            let (first_bounds, second_bounds) = match axis {
                SplitAxis::Horizontal => bounds.split_horizontal(SPLIT_FRACTION),
                SplitAxis::Vertical => bounds.split_vertical(SPLIT_FRACTION),
            };
            walk_region(root, first, Some(id), first_bounds, renderer);
            walk_region(root, second, Some(id), second_bounds, renderer);
        }
    }
}

/// Get all leaves with their normalized layout rectangles
pub fn leaf_rects(tree: &Region) -> HashMap<RegionId, Rect> {
    let mut collector = RectCollector {
        rects: HashMap::new(),
    };
    walk(tree, &mut collector);
    collector.rects
}

impl crate::tree::PartitionTree {
    /// Get all leaves with their layout rectangles in the current snapshot
    pub fn leaf_rects(&self) -> HashMap<RegionId, Rect> {
        leaf_rects(&self.snapshot())
    }
}

struct RectCollector {
    rects: HashMap<RegionId, Rect>,
}

impl Renderer for RectCollector {
    fn leaf(&mut self, region: &Region, bounds: Rect, _show_remove: bool) {
        self.rects.insert(region.id().clone(), bounds);
    }

    fn container(&mut self, _region: &Region, _bounds: Rect, _axis: SplitAxis, _show_remove: bool) {
    }
}
