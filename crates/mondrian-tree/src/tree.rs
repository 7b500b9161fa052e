// ABOUTME: Binary tree structure for recursive canvas partitioning.
// ABOUTME: Supports splitting, removal with collapse, and visibility queries.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Stable string identifier for regions.
///
/// The root is `"root"`; splitting a region `id` names its children
/// `"{id}-1"` and `"{id}-2"`, so ids stay stable across re-splits of other
/// regions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id given to the initial root leaf
    pub fn root() -> Self {
        Self("root".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic child id (`"{self}-1"` or `"{self}-2"`)
    fn child(&self, index: u8) -> Self {
        Self(format!("{}-{}", self.0, index))
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Orientation along which a split arranges its two children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Children sit side by side
    Horizontal,
    /// Children are stacked top to bottom
    Vertical,
}

impl SplitAxis {
    pub fn label(&self) -> &'static str {
        match self {
            SplitAxis::Horizontal => "horizontal",
            SplitAxis::Vertical => "vertical",
        }
    }
}

/// A node in the partition tree.
///
/// Leaves are editable cells; splits hold exactly two children, so a split
/// can never be left with one child (collapse replaces it with the survivor
/// instead) or zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    Leaf {
        id: RegionId,
    },
    Split {
        id: RegionId,
        axis: SplitAxis,
        first: Box<Region>,
        second: Box<Region>,
    },
}

impl Region {
    pub fn id(&self) -> &RegionId {
        match self {
            Region::Leaf { id } | Region::Split { id, .. } => id,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Region::Leaf { .. })
    }

    pub fn axis(&self) -> Option<SplitAxis> {
        match self {
            Region::Leaf { .. } => None,
            Region::Split { axis, .. } => Some(*axis),
        }
    }

    pub fn child_count(&self) -> usize {
        match self {
            Region::Leaf { .. } => 0,
            Region::Split { .. } => 2,
        }
    }

    /// Depth-first search for a region by id
    pub fn find(&self, target: &RegionId) -> Option<&Region> {
        if self.id() == target {
            return Some(self);
        }
        match self {
            Region::Leaf { .. } => None,
            Region::Split { first, second, .. } => {
                first.find(target).or_else(|| second.find(target))
            }
        }
    }

    /// Find the region whose child list contains `target`
    pub fn find_parent(&self, target: &RegionId) -> Option<&Region> {
        match self {
            Region::Leaf { .. } => None,
            Region::Split { first, second, .. } => {
                if first.id() == target || second.id() == target {
                    Some(self)
                } else {
                    first
                        .find_parent(target)
                        .or_else(|| second.find_parent(target))
                }
            }
        }
    }

    /// Leaf ids in depth-first order
    pub fn leaves(&self) -> Vec<RegionId> {
        let mut result = Vec::new();
        collect_leaves(self, &mut result);
        result
    }

    /// Total number of regions in the subtree
    pub fn region_count(&self) -> usize {
        match self {
            Region::Leaf { .. } => 1,
            Region::Split { first, second, .. } => 1 + first.region_count() + second.region_count(),
        }
    }

    /// Pure split: returns a new tree with `target` (if it is a leaf) turned
    /// into a split of the given axis holding two fresh leaf children.
    /// Unknown or already-split targets yield an equal tree.
    pub fn split(&self, target: &RegionId, axis: SplitAxis) -> Region {
        split_region(self, target, axis)
    }

    /// Pure removal: returns the new tree, or `None` when the root itself
    /// was targeted. Removing one child of a split collapses the split to
    /// the surviving child's entire subtree.
    pub fn remove(&self, target: &RegionId) -> Option<Region> {
        remove_region(self, target)
    }

    /// Whether the remove control is offered for `id`.
    ///
    /// Split regions always show it. A leaf with no parent is the lone root
    /// and hides it. A leaf with a parent shows it iff the parent has more
    /// than one child; an unknown parent id fails open.
    pub fn should_show_remove(&self, id: &RegionId, parent_id: Option<&RegionId>) -> bool {
        match self.find(id) {
            Some(Region::Split { .. }) => true,
            _ => match parent_id {
                None => false,
                Some(parent_id) => match self.find(parent_id) {
                    Some(parent) => parent.child_count() > 1,
                    None => true,
                },
            },
        }
    }

    /// Check the one invariant the type system cannot enforce: global id
    /// uniqueness
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        check_unique_ids(self, &mut seen)
    }
}

fn collect_leaves(region: &Region, out: &mut Vec<RegionId>) {
    match region {
        Region::Leaf { id } => out.push(id.clone()),
        Region::Split { first, second, .. } => {
            collect_leaves(first, out);
            collect_leaves(second, out);
        }
    }
}

fn check_unique_ids(region: &Region, seen: &mut HashSet<RegionId>) -> Result<(), TreeError> {
    if !seen.insert(region.id().clone()) {
        return Err(TreeError::DuplicateId(region.id().clone()));
    }
    match region {
        Region::Leaf { .. } => Ok(()),
        Region::Split { first, second, .. } => {
            check_unique_ids(first, seen)?;
            check_unique_ids(second, seen)
        }
    }
}

fn split_region(region: &Region, target: &RegionId, axis: SplitAxis) -> Region {
    match region {
        Region::Leaf { id } if id == target => Region::Split {
            id: id.clone(),
            axis,
            first: Box::new(Region::Leaf { id: id.child(1) }),
            second: Box::new(Region::Leaf { id: id.child(2) }),
        },
        Region::Leaf { id } => Region::Leaf { id: id.clone() },
        // A split matching the target is not re-split; recursion continues
        // into its children
        Region::Split {
            id,
            axis: existing,
            first,
            second,
        } => Region::Split {
            id: id.clone(),
            axis: *existing,
            first: Box::new(split_region(first, target, axis)),
            second: Box::new(split_region(second, target, axis)),
        },
    }
}

fn remove_region(region: &Region, target: &RegionId) -> Option<Region> {
    if region.id() == target {
        return None;
    }
    match region {
        Region::Leaf { id } => Some(Region::Leaf { id: id.clone() }),
        Region::Split {
            id,
            axis,
            first,
            second,
        } => match (remove_region(first, target), remove_region(second, target)) {
            (Some(first), Some(second)) => Some(Region::Split {
                id: id.clone(),
                axis: *axis,
                first: Box::new(first),
                second: Box::new(second),
            }),
            // Collapse: the survivor replaces this split entirely
            (Some(survivor), None) | (None, Some(survivor)) => Some(survivor),
            // Unreachable while ids are unique; treated as absent anyway
            (None, None) => None,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("duplicate region id: {0}")]
    DuplicateId(RegionId),
}

/// Owner of the current partition tree snapshot.
///
/// Mutations build a full new tree and atomically replace the snapshot, so
/// readers holding a previous `Arc` always see a consistent tree.
#[derive(Debug, Clone)]
pub struct PartitionTree {
    snapshot: Arc<Region>,
}

impl PartitionTree {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Region::Leaf {
                id: RegionId::root(),
            }),
        }
    }

    /// Current tree snapshot
    pub fn snapshot(&self) -> Arc<Region> {
        Arc::clone(&self.snapshot)
    }

    /// Split the given leaf, returning the ids of the two new children.
    /// Returns `None` (leaving the tree untouched) when the target is
    /// missing or already split.
    pub fn split(&mut self, target: &RegionId, axis: SplitAxis) -> Option<(RegionId, RegionId)> {
        match self.snapshot.find(target) {
            Some(region) if region.is_leaf() => {}
            _ => return None,
        }
        let next = self.snapshot.split(target, axis);
        debug_assert!(next.validate().is_ok());
        self.snapshot = Arc::new(next);
        Some((target.child(1), target.child(2)))
    }

    /// Remove the given region, collapsing its parent onto the sibling.
    /// Returns false (leaving the tree untouched) when the target is missing
    /// or is the root itself.
    pub fn remove(&mut self, target: &RegionId) -> bool {
        if self.snapshot.find(target).is_none() {
            return false;
        }
        match self.snapshot.remove(target) {
            Some(next) => {
                debug_assert!(next.validate().is_ok());
                self.snapshot = Arc::new(next);
                true
            }
            // The root is never removed out from under the session
            None => false,
        }
    }

    pub fn should_show_remove(&self, id: &RegionId, parent_id: Option<&RegionId>) -> bool {
        self.snapshot.should_show_remove(id, parent_id)
    }

    /// Get all leaf ids in depth-first order
    pub fn leaves(&self) -> Vec<RegionId> {
        self.snapshot.leaves()
    }

    pub fn region_count(&self) -> usize {
        self.snapshot.region_count()
    }
}

impl Default for PartitionTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> RegionId {
        RegionId::new(raw)
    }

    #[test]
    fn new_tree_is_single_root_leaf() {
        let tree = PartitionTree::new();
        let snapshot = tree.snapshot();
        assert!(snapshot.is_leaf());
        assert_eq!(snapshot.id(), &RegionId::root());
        assert_eq!(tree.region_count(), 1);
    }

    #[test]
    fn split_creates_two_leaf_children() {
        let mut tree = PartitionTree::new();
        let children = tree.split(&id("root"), SplitAxis::Vertical);
        assert_eq!(children, Some((id("root-1"), id("root-2"))));

        let snapshot = tree.snapshot();
        assert_eq!(snapshot.axis(), Some(SplitAxis::Vertical));
        assert_eq!(tree.leaves(), vec![id("root-1"), id("root-2")]);
        assert!(snapshot.find(&id("root-1")).unwrap().is_leaf());
        assert!(snapshot.find(&id("root-2")).unwrap().is_leaf());
    }

    #[test]
    fn split_missing_id_is_noop() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Horizontal);
        let before = tree.snapshot();

        assert_eq!(tree.split(&id("nonexistent"), SplitAxis::Vertical), None);
        assert_eq!(*tree.snapshot(), *before);
    }

    #[test]
    fn split_internal_region_is_noop() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Horizontal);
        let before = tree.snapshot();

        // "root" now names a split; only leaves can be split again
        assert_eq!(tree.split(&id("root"), SplitAxis::Vertical), None);
        assert_eq!(*tree.snapshot(), *before);
    }

    #[test]
    fn pure_split_on_missing_id_returns_equal_tree() {
        let tree = PartitionTree::new();
        let snapshot = tree.snapshot();
        let rebuilt = snapshot.split(&id("nonexistent"), SplitAxis::Horizontal);
        assert_eq!(rebuilt, *snapshot);
    }

    #[test]
    fn remove_collapses_to_sibling() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Vertical);
        tree.split(&id("root-1"), SplitAxis::Horizontal);
        assert_eq!(
            tree.leaves(),
            vec![id("root-1-1"), id("root-1-2"), id("root-2")]
        );

        assert!(tree.remove(&id("root-1-1")));

        // root-1 collapsed onto root-1-2, which keeps its own id
        let snapshot = tree.snapshot();
        assert_eq!(tree.leaves(), vec![id("root-1-2"), id("root-2")]);
        assert_eq!(snapshot.axis(), Some(SplitAxis::Vertical));
        assert!(snapshot.find(&id("root-1")).is_none());
        assert!(snapshot.find(&id("root-1-2")).unwrap().is_leaf());
    }

    #[test]
    fn collapse_preserves_surviving_subtree() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Vertical);
        tree.split(&id("root-2"), SplitAxis::Horizontal);
        tree.split(&id("root-2-1"), SplitAxis::Vertical);

        let survivor_before = tree.snapshot().find(&id("root-2")).unwrap().clone();
        assert!(tree.remove(&id("root-1")));

        // The whole surviving subtree was promoted to the root unchanged
        assert_eq!(*tree.snapshot(), survivor_before);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Horizontal);
        let before = tree.snapshot();

        assert!(!tree.remove(&id("nonexistent")));
        assert_eq!(*tree.snapshot(), *before);
    }

    #[test]
    fn remove_root_is_protected() {
        let mut tree = PartitionTree::new();
        let before = tree.snapshot();

        assert!(!tree.remove(&RegionId::root()));
        assert_eq!(*tree.snapshot(), *before);
        assert_eq!(tree.region_count(), 1);
    }

    #[test]
    fn remove_internal_region_drops_whole_subtree() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Vertical);
        tree.split(&id("root-1"), SplitAxis::Horizontal);

        assert!(tree.remove(&id("root-1")));

        // root collapses onto root-2; the subtree under root-1 is gone
        let snapshot = tree.snapshot();
        assert!(snapshot.is_leaf());
        assert_eq!(snapshot.id(), &id("root-2"));
    }

    #[test]
    fn visibility_hidden_for_lone_root() {
        let tree = PartitionTree::new();
        assert!(!tree.should_show_remove(&RegionId::root(), None));
    }

    #[test]
    fn visibility_shown_for_leaf_with_sibling() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Horizontal);
        assert!(tree.should_show_remove(&id("root-1"), Some(&id("root"))));
        assert!(tree.should_show_remove(&id("root-2"), Some(&id("root"))));
    }

    #[test]
    fn visibility_shown_for_internal_region() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Horizontal);
        // The root is now a split and its control is unconditional
        assert!(tree.should_show_remove(&RegionId::root(), None));
    }

    #[test]
    fn visibility_fails_open_on_unknown_parent() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Horizontal);
        assert!(tree.should_show_remove(&id("root-1"), Some(&id("nonexistent"))));
    }

    #[test]
    fn old_snapshots_survive_mutation() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Vertical);
        let old = tree.snapshot();

        tree.split(&id("root-1"), SplitAxis::Horizontal);
        tree.remove(&id("root-2"));

        // The earlier snapshot still describes the tree as it was
        assert_eq!(old.leaves(), vec![id("root-1"), id("root-2")]);
        assert!(old.validate().is_ok());
    }

    #[test]
    fn invariants_hold_across_operation_sequence() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Vertical);
        tree.split(&id("root-1"), SplitAxis::Horizontal);
        tree.split(&id("root-1-2"), SplitAxis::Vertical);
        tree.remove(&id("root-1-2-1"));
        tree.split(&id("root-2"), SplitAxis::Horizontal);
        tree.remove(&id("root-1"));
        tree.remove(&id("nonexistent"));

        let snapshot = tree.snapshot();
        assert!(snapshot.validate().is_ok());
        // Every split still has exactly two children and every leaf none
        for leaf in tree.leaves() {
            let region = snapshot.find(&leaf).unwrap();
            assert_eq!(region.child_count(), 0);
            assert_eq!(region.axis(), None);
        }
    }

    #[test]
    fn end_to_end_scenario() {
        let mut tree = PartitionTree::new();

        tree.split(&id("root"), SplitAxis::Vertical);
        assert_eq!(tree.leaves(), vec![id("root-1"), id("root-2")]);

        tree.split(&id("root-1"), SplitAxis::Horizontal);
        assert_eq!(
            tree.leaves(),
            vec![id("root-1-1"), id("root-1-2"), id("root-2")]
        );

        tree.remove(&id("root-1-1"));

        let snapshot = tree.snapshot();
        assert_eq!(snapshot.id(), &id("root"));
        assert_eq!(snapshot.axis(), Some(SplitAxis::Vertical));
        assert_eq!(tree.leaves(), vec![id("root-1-2"), id("root-2")]);
        assert_eq!(tree.region_count(), 3);
    }

    #[test]
    fn validate_detects_duplicate_ids() {
        let malformed = Region::Split {
            id: id("root"),
            axis: SplitAxis::Horizontal,
            first: Box::new(Region::Leaf { id: id("twin") }),
            second: Box::new(Region::Leaf { id: id("twin") }),
        };
        assert_eq!(
            malformed.validate(),
            Err(TreeError::DuplicateId(id("twin")))
        );
    }

    #[test]
    fn find_parent_locates_direct_parent_only() {
        let mut tree = PartitionTree::new();
        tree.split(&id("root"), SplitAxis::Vertical);
        tree.split(&id("root-1"), SplitAxis::Horizontal);
        let snapshot = tree.snapshot();

        assert_eq!(
            snapshot.find_parent(&id("root-1-1")).unwrap().id(),
            &id("root-1")
        );
        assert_eq!(
            snapshot.find_parent(&id("root-2")).unwrap().id(),
            &id("root")
        );
        assert!(snapshot.find_parent(&RegionId::root()).is_none());
    }
}
