//! The tick-driven layout and draw passes.

use std::time::Duration;

use palisade_core::Surface;
use palisade_core::geometry::{Dimension, Point, Rect};
use palisade_core::profiling::{profile_function, profile_scope};

use super::RootPanel;
use crate::control::{DrawCx, Snapshot};
use crate::flags::ControlFlags;
use crate::id::ControlId;
use crate::tree::ControlNode;

/// Upper bound on layout passes per tick when hooks keep requesting more.
const MAX_LAYOUT_PASSES: usize = 8;

impl RootPanel {
    /// Advance timers, run a pending layout pass and repaint if anything
    /// visible is dirty. Returns `false` when nothing was drawn.
    pub fn tick(&mut self, dt: Duration, surface: &mut dyn Surface) -> bool {
        profile_function!();
        palisade_core::profiling::new_frame();

        let size = surface.size();
        if self.tree.state(self.root).dimension() != size {
            self.resize(size);
        }

        if let Some(owner) = self.hover_timer.advance(dt) {
            if self.hovered == Some(owner) {
                self.show_tooltip(owner);
            }
        }

        if self.needs_layout {
            let mut passes = 0;
            while self.needs_layout && passes < MAX_LAYOUT_PASSES {
                self.needs_layout = false;
                self.do_layout();
                passes += 1;
            }
            if self.needs_layout {
                tracing::warn!(passes, "layout did not settle, retrying next tick");
            }
            self.redraw(self.root);
            self.hover_stale = true;
        }
        if self.hover_stale {
            self.update_hover();
        }

        if !self.any_dirty() {
            tracing::trace!("nothing to draw");
            return false;
        }
        self.draw(surface);
        true
    }

    /// Lay out the whole tree and every floating control now.
    pub fn do_layout(&mut self) {
        profile_scope!("layout");
        self.layout_subtree(self.root);

        let floating: Vec<(ControlId, bool)> =
            self.floating.iter().map(|(&id, &managed)| (id, managed)).collect();
        for (id, managed) in floating {
            if managed {
                let best = self.best_dimension(id);
                self.set_dimension(id, best);
            }
            self.layout_subtree(id);
        }
        tracing::trace!(controls = self.tree.len(), "layout pass done");
    }

    fn layout_subtree(&mut self, id: ControlId) {
        let Some(container) = self.tree.container(id) else {
            return;
        };
        let children = container.children.clone();
        let items: Vec<_> = children.iter().map(|&c| self.layout_item(c)).collect();
        let size = self.tree.state(id).dimension();
        let placements = match self.tree.container(id) {
            Some(container) => container.layout.control_bounds(&items, size),
            None => return,
        };
        for (child, bounds) in placements {
            self.set_bounds(child, bounds);
        }
        for child in children {
            // A bounds hook may have detached a sibling.
            if self.tree.contains(child) && self.tree.parent(child) == Some(id) {
                self.layout_subtree(child);
            }
        }
    }

    /// Whether any visible control (regular or floating) needs repainting.
    pub fn any_dirty(&self) -> bool {
        self.subtree_dirty(self.root) || self.floating.keys().any(|&id| self.subtree_dirty(id))
    }

    fn subtree_dirty(&self, id: ControlId) -> bool {
        let state = self.tree.state(id);
        if !state.is_visible() {
            return false;
        }
        state.is_dirty() || self.tree.children(id).iter().any(|&c| self.subtree_dirty(c))
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        profile_scope!("draw");
        let area = surface.bounds();
        surface.clear(area);
        if self.config.outline_width > 0.0 {
            surface.stroke_rect(area, self.config.outline_width, self.config.outline_color);
        }

        self.paint(self.root, true, surface);

        self.clamp_floating(area.dimension());
        let floating: Vec<ControlId> = self.floating.keys().copied().collect();
        for id in floating {
            self.paint(id, true, surface);
        }
    }

    /// Shift managed floating controls back inside the surface.
    fn clamp_floating(&mut self, size: Dimension) {
        let managed: Vec<ControlId> = self
            .floating
            .iter()
            .filter(|&(_, &managed)| managed)
            .map(|(&id, _)| id)
            .collect();
        for id in managed {
            let bounds = self.tree.state(id).bounds;
            let x = bounds.x.min(size.width - bounds.width).max(0.0);
            let y = bounds.y.min(size.height - bounds.height).max(0.0);
            if x != bounds.x || y != bounds.y {
                // Position only; the subtree was already laid out.
                self.apply_bounds(id, Rect::from_parts(Point::new(x, y), bounds.dimension()));
            }
        }
    }

    fn draw_snapshot(&self, enabled: bool) -> Snapshot {
        Snapshot {
            pointer: self.pointer,
            modifiers: self.modifiers,
            origin: Point::ZERO,
            enabled,
            hovered: self.hovered,
            focused: self.focused,
            captured: self.captured,
        }
    }

    /// Paint `id` at its bounds, children from the bottom of the z-order up.
    /// Clears the dirty flag of every visited control.
    fn paint(&mut self, id: ControlId, parent_enabled: bool, surface: &mut dyn Surface) {
        let state = self.tree.state(id);
        if !state.is_visible() {
            for control in self.tree.subtree(id) {
                self.tree.state_mut(control).flags.remove(ControlFlags::DIRTY);
            }
            return;
        }
        let bounds = state.bounds;
        let enabled = parent_enabled && state.is_self_enabled();
        let snapshot = self.draw_snapshot(enabled);

        surface.save();
        surface.translate(bounds.x, bounds.y);
        {
            let ControlNode { state, widget, .. } = self.tree.node_mut(id);
            widget.draw_background(&mut DrawCx::new(id, state, snapshot), surface);
        }

        if let Some(container) = self.tree.container(id) {
            let offset = container.force_padding;
            let count = container.z_order.len();
            surface.save();
            surface.clip(Rect::from_parts(Point::ZERO, bounds.dimension()));
            surface.translate(offset.x, offset.y);
            for index in (0..count).rev() {
                let child = self
                    .tree
                    .container(id)
                    .and_then(|c| c.z_order.get(index).copied());
                if let Some(child) = child {
                    self.paint(child, enabled, surface);
                }
            }
            surface.restore();
        }

        let ControlNode { state, widget, .. } = self.tree.node_mut(id);
        widget.draw(&mut DrawCx::new(id, state, snapshot), surface);
        state.flags.remove(ControlFlags::DIRTY);
        surface.restore();
    }
}
