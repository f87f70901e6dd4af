//! Child bookkeeping for controls that host other controls.

use palisade_core::geometry::Point;

use crate::id::ControlId;
use crate::layout::Layout;

/// Children and layout of a container control.
///
/// `children` keeps insertion order (what layouts and focus traversal see).
/// `z_order` is a permutation of the same ids where the position is the
/// z-index: index 0 is painted last and hit-tested first. Topmost children
/// always form a prefix of `z_order`.
pub struct ContainerState {
    pub(crate) children: Vec<ControlId>,
    pub(crate) z_order: Vec<ControlId>,
    pub(crate) layout: Box<dyn Layout>,
    pub(crate) force_padding: Point,
}

impl ContainerState {
    pub(crate) fn new(layout: Box<dyn Layout>) -> Self {
        Self {
            children: Vec::new(),
            z_order: Vec::new(),
            layout,
            force_padding: Point::ZERO,
        }
    }

    pub fn children(&self) -> &[ControlId] {
        &self.children
    }

    /// Children from top (z-index 0) to bottom.
    pub fn z_order(&self) -> &[ControlId] {
        &self.z_order
    }

    pub fn z_index(&self, child: ControlId) -> Option<usize> {
        self.z_order.iter().position(|&c| c == child)
    }

    pub fn layout(&self) -> &dyn Layout {
        self.layout.as_ref()
    }

    /// Extra offset applied to all children when drawing and hit-testing.
    pub fn force_padding(&self) -> Point {
        self.force_padding
    }

    pub fn contains(&self, child: ControlId) -> bool {
        self.children.contains(&child)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert `child` at the top of the non-topmost run (or at the very top if
    /// it is topmost itself).
    pub(crate) fn push(&mut self, child: ControlId, topmost_run: usize, topmost: bool) {
        debug_assert!(!self.contains(child));
        self.children.push(child);
        let z = if topmost { 0 } else { topmost_run };
        self.z_order.insert(z, child);
    }

    pub(crate) fn detach(&mut self, child: ControlId) -> bool {
        let Some(index) = self.children.iter().position(|&c| c == child) else {
            return false;
        };
        self.children.remove(index);
        self.z_order.retain(|&c| c != child);
        true
    }
}
