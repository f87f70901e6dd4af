//! The top-level container bound to a drawing surface and an input source.
//!
//! The root panel owns every control (attached or not) in a generational
//! arena. On top of the regular tree it tracks hover, focus and mouse capture,
//! a list of floating controls (tooltips, menus, dropdowns) that bypass the
//! layout, and the `needs_layout` flag consumed by [`RootPanel::tick`].
//!
//! ```
//! use palisade_ui::prelude::*;
//!
//! let mut ui = RootPanel::new(LinearLayout::vertical().with_padding(4.0));
//! let label = ui.create(Panel::new().with_preferred(Dimension::new(80.0, 20.0)));
//! ui.add(ui.root(), label);
//! assert_eq!(ui.best_dimension(ui.root()), Dimension::new(80.0, 20.0));
//! ```

mod focus;
mod frame;
mod input;
mod options;

use std::any::Any;
use std::collections::VecDeque;

use indexmap::IndexMap;
use palisade_core::geometry::{Dimension, Point, Rect};

use crate::config::RootConfig;
use crate::container::ContainerState;
use crate::control::{
    Control, ControlState, EventCx, Panel, Request, Snapshot, TooltipAttachment,
};
use crate::event::{Modifiers, PointerEvent};
use crate::flags::ControlFlags;
use crate::id::ControlId;
use crate::layout::{Layout, LayoutHint, LayoutItem};
use crate::tooltip::{HoverTimer, ShownTooltip};
use crate::tree::{ControlNode, UiTree};

/// Singleton root of a control tree.
pub struct RootPanel {
    tree: UiTree,
    root: ControlId,
    hovered: Option<ControlId>,
    focused: Option<ControlId>,
    captured: Option<ControlId>,
    /// Hover must be re-resolved at the next opportunity.
    hover_stale: bool,
    /// Floating controls in insertion order, flagged with whether the root
    /// manages their size.
    floating: IndexMap<ControlId, bool>,
    needs_layout: bool,
    pointer: Point,
    pointer_inside: bool,
    modifiers: Modifiers,
    cursor: String,
    hover_timer: HoverTimer,
    tooltip: Option<ShownTooltip>,
    requests: VecDeque<Request>,
    applying: bool,
    config: RootConfig,
}

impl RootPanel {
    pub fn new(layout: impl Layout) -> Self {
        Self::with_config(layout, RootConfig::default())
    }

    pub fn with_config(layout: impl Layout, config: RootConfig) -> Self {
        let mut tree = UiTree::default();
        let root = tree.insert(ControlNode {
            state: ControlState::default(),
            widget: Box::new(Panel::new()),
            container: Some(ContainerState::new(Box::new(layout))),
        });
        tracing::debug!(root = %root, "created root panel");

        Self {
            tree,
            root,
            hovered: None,
            focused: None,
            captured: None,
            hover_stale: false,
            floating: IndexMap::new(),
            needs_layout: true,
            pointer: Point::ZERO,
            pointer_inside: false,
            modifiers: Modifiers::empty(),
            cursor: config.default_cursor.clone(),
            hover_timer: HoverTimer::default(),
            tooltip: None,
            requests: VecDeque::new(),
            applying: false,
            config,
        }
    }

    pub fn root(&self) -> ControlId {
        self.root
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    /// Number of live controls, including the root and detached ones.
    pub fn control_count(&self) -> usize {
        self.tree.len()
    }

    // Creation and destruction

    /// Create a detached leaf control.
    pub fn create(&mut self, widget: impl Control) -> ControlId {
        self.insert(Box::new(widget), None)
    }

    /// Create a detached container control. The layout is fixed once the
    /// first child is added.
    pub fn create_container(&mut self, widget: impl Control, layout: impl Layout) -> ControlId {
        self.insert(
            Box::new(widget),
            Some(ContainerState::new(Box::new(layout))),
        )
    }

    fn insert(&mut self, widget: Box<dyn Control>, container: Option<ContainerState>) -> ControlId {
        let id = self.tree.insert(ControlNode {
            state: ControlState::default(),
            widget,
            container,
        });
        tracing::trace!(control = %id, "created control");
        id
    }

    /// Free a detached control and its whole subtree.
    pub fn destroy(&mut self, id: ControlId) {
        assert!(id != self.root, "the root panel cannot be destroyed");
        assert!(
            self.tree.parent(id).is_none(),
            "control {} is still attached and cannot be destroyed",
            id
        );
        for control in self.tree.subtree(id) {
            self.tree.remove(control);
        }
        tracing::debug!(control = %id, "destroyed control");
    }

    /// Whether `id` still refers to a live control.
    pub fn contains(&self, id: ControlId) -> bool {
        self.tree.contains(id)
    }

    /// Replace a childless container's layout.
    pub fn set_layout(&mut self, id: ControlId, layout: impl Layout) {
        let container = self.container_mut_or_panic(id);
        assert!(
            container.is_empty(),
            "the layout of container {} cannot change once children were added",
            id
        );
        container.layout = Box::new(layout);
        self.relayout(id);
    }

    // Accessors

    pub fn state(&self, id: ControlId) -> &ControlState {
        self.tree.state(id)
    }

    /// Local presentation state. Hierarchy and geometry go through the panel.
    pub fn state_mut(&mut self, id: ControlId) -> &mut ControlState {
        self.tree.state_mut(id)
    }

    pub fn container(&self, id: ControlId) -> Option<&ContainerState> {
        self.tree.container(id)
    }

    pub fn widget<W: Control>(&self, id: ControlId) -> Option<&W> {
        let widget: &dyn Any = &*self.tree.node(id).widget;
        widget.downcast_ref::<W>()
    }

    pub fn widget_mut<W: Control>(&mut self, id: ControlId) -> Option<&mut W> {
        let widget: &mut dyn Any = &mut *self.tree.node_mut(id).widget;
        widget.downcast_mut::<W>()
    }

    pub fn layout<L: Layout>(&self, id: ControlId) -> Option<&L> {
        let layout: &dyn Any = &*self.tree.container(id)?.layout;
        layout.downcast_ref::<L>()
    }

    pub fn parent(&self, id: ControlId) -> Option<ControlId> {
        self.tree.parent(id)
    }

    /// Children in insertion order.
    pub fn children(&self, id: ControlId) -> &[ControlId] {
        self.tree.children(id)
    }

    /// Whether `id` is reachable from the root (regular tree or floating).
    pub fn is_attached(&self, id: ControlId) -> bool {
        self.tree.is_ancestor_or_self(self.root, id)
    }

    pub fn hovered(&self) -> Option<ControlId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    pub fn captured(&self) -> Option<ControlId> {
        self.captured
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    // Hierarchy

    /// Attach `child` to `parent` with no layout hint.
    pub fn add(&mut self, parent: ControlId, child: ControlId) {
        self.add_with_hint(parent, child, LayoutHint::None);
    }

    /// Attach `child` to `parent`. The child lands on top of its non-topmost
    /// siblings.
    pub fn add_with_hint(&mut self, parent: ControlId, child: ControlId, hint: impl Into<LayoutHint>) {
        assert!(child != self.root, "the root panel cannot be added to a container");
        assert!(
            self.tree.container(parent).is_some(),
            "control {} is not a container",
            parent
        );
        if let Some(existing) = self.tree.parent(child) {
            panic!("control {} already has parent {}", child, existing);
        }
        assert!(
            !self.tree.is_ancestor_or_self(child, parent),
            "adding {} to {} would create a cycle",
            child,
            parent
        );

        let topmost = self.tree.state(child).is_topmost();
        let run = self.topmost_run(parent, None);
        let container = self.container_mut_or_panic(parent);
        container.layout.add(child, hint.into());
        container.push(child, run, topmost);
        self.tree.state_mut(child).parent = Some(parent);

        tracing::debug!(parent = %parent, child = %child, "attached control");
        self.relayout(parent);
    }

    /// Detach `child` from `parent`. Returns `false` if it was not a child.
    ///
    /// For the root, floating controls are searched first.
    pub fn remove_child(&mut self, parent: ControlId, child: ControlId) -> bool {
        if parent == self.root && self.floating.contains_key(&child) {
            self.remove_floating(child);
            return true;
        }
        let Some(container) = self.tree.container_mut(parent) else {
            return false;
        };
        if !container.detach(child) {
            return false;
        }
        container.layout.remove(child);
        self.tree.state_mut(child).parent = None;

        tracing::debug!(parent = %parent, child = %child, "detached control");
        self.notify_detached(child);
        self.redraw(parent);
        self.relayout(parent);
        true
    }

    /// Detach `id` from whatever holds it.
    pub fn remove(&mut self, id: ControlId) -> bool {
        match self.tree.parent(id) {
            Some(parent) => self.remove_child(parent, id),
            None => false,
        }
    }

    pub fn remove_all(&mut self, parent: ControlId) {
        while let Some(&first) = self.tree.children(parent).first() {
            self.remove_child(parent, first);
        }
    }

    /// Move `child` to z-index `z` among its siblings. Non-topmost children
    /// never move above the topmost ones.
    pub fn set_child_z_order(&mut self, parent: ControlId, child: ControlId, z: usize) {
        let container = self
            .tree
            .container(parent)
            .unwrap_or_else(|| panic!("control {} is not a container", parent));
        assert!(
            container.contains(child),
            "control {} is not a child of {}",
            child,
            parent
        );
        assert!(
            z < container.len(),
            "z-order {} out of range for the {} children of {}",
            z,
            container.len(),
            parent
        );

        let run = self.topmost_run(parent, Some(child));
        let target = if self.tree.state(child).is_topmost() {
            z.min(run)
        } else {
            z.max(run)
        };
        let container = self.container_mut_or_panic(parent);
        container.z_order.retain(|&c| c != child);
        container.z_order.insert(target, child);
        self.redraw(parent);
    }

    /// Length of the topmost prefix of `parent`'s z-order, ignoring `skip`.
    fn topmost_run(&self, parent: ControlId, skip: Option<ControlId>) -> usize {
        self.tree.container(parent).map_or(0, |container| {
            container
                .z_order
                .iter()
                .filter(|&&c| Some(c) != skip)
                .take_while(|&&c| self.tree.state(c).is_topmost())
                .count()
        })
    }

    fn container_mut_or_panic(&mut self, id: ControlId) -> &mut ContainerState {
        match self.tree.container_mut(id) {
            Some(container) => container,
            None => panic!("control {} is not a container", id),
        }
    }

    /// Fire `on_detached` across the subtree and drop every root reference
    /// into it.
    fn notify_detached(&mut self, id: ControlId) {
        let subtree = self.tree.subtree(id);
        let inside = |c: Option<ControlId>| c.is_some_and(|c| subtree.contains(&c));

        if inside(self.hovered) {
            self.hovered = None;
            self.hover_stale = true;
        }
        if inside(self.focused) {
            self.focused = None;
        }
        if inside(self.captured) {
            tracing::debug!(control = ?self.captured, "capture dropped by detach");
            self.captured = None;
            self.hover_stale = true;
        }
        if inside(self.hover_timer.owner()) {
            self.hover_timer.cancel();
        }
        if inside(self.tooltip.map(|t| t.owner)) {
            self.hide_tooltip();
        }

        for control in subtree {
            self.dispatch(control, |widget, cx| widget.on_detached(cx));
        }
    }

    // Floating controls

    /// Show a detached control above the regular tree, positioned in root
    /// coordinates. Managed controls are sized to their best dimension and
    /// kept inside the surface.
    pub fn add_floating(&mut self, id: ControlId, manage: bool) {
        assert!(id != self.root, "the root panel cannot float");
        if let Some(existing) = self.tree.parent(id) {
            panic!("control {} already has parent {}", id, existing);
        }
        self.floating.insert(id, manage);
        self.tree.state_mut(id).parent = Some(self.root);
        self.redraw(id);
        self.relayout(self.root);
        tracing::debug!(control = %id, manage, "added floating control");
    }

    fn remove_floating(&mut self, id: ControlId) {
        if self.floating.shift_remove(&id).is_none() {
            return;
        }
        self.tree.state_mut(id).parent = None;
        if self.tooltip.is_some_and(|t| t.control == id) {
            self.tooltip = None;
        }
        tracing::debug!(control = %id, "removed floating control");
        self.notify_detached(id);
        self.redraw(self.root);
    }

    pub fn is_floating(&self, id: ControlId) -> bool {
        self.floating.contains_key(&id)
    }

    /// Floating controls, oldest first.
    pub fn floating(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.floating.keys().copied()
    }

    // Geometry

    pub fn bounds(&self, id: ControlId) -> Rect {
        self.tree.state(id).bounds
    }

    /// Set bounds relative to the parent's content origin. Identical bounds
    /// are a no-op; otherwise `on_bounds_changed` fires and a layout pass is
    /// scheduled.
    pub fn set_bounds(&mut self, id: ControlId, bounds: Rect) {
        if self.apply_bounds(id, bounds) {
            self.relayout(id);
        }
    }

    /// Store new bounds and notify the widget. Returns whether they changed.
    fn apply_bounds(&mut self, id: ControlId, bounds: Rect) -> bool {
        assert!(bounds.is_valid(), "invalid bounds {} for control {}", bounds, id);
        assert!(
            id != self.root || bounds.position() == Point::ZERO,
            "the root panel must stay at the origin, got {}",
            bounds
        );
        let old = self.tree.state(id).bounds;
        if old == bounds {
            return false;
        }
        self.tree.state_mut(id).bounds = bounds;
        self.dispatch(id, |widget, cx| widget.on_bounds_changed(cx, old));
        true
    }

    pub fn set_position(&mut self, id: ControlId, position: Point) {
        let dimension = self.tree.state(id).dimension();
        self.set_bounds(id, Rect::from_parts(position, dimension));
    }

    pub fn set_dimension(&mut self, id: ControlId, dimension: Dimension) {
        let position = self.tree.state(id).position();
        self.set_bounds(id, Rect::from_parts(position, dimension));
    }

    /// Resize the root. [`RootPanel::tick`] does this from the surface size.
    pub fn resize(&mut self, size: Dimension) {
        self.set_bounds(self.root, Rect::from_parts(Point::ZERO, size));
    }

    /// Preferred size: the layout's answer for containers, the widget's for
    /// leaves.
    pub fn best_dimension(&self, id: ControlId) -> Dimension {
        let node = self.tree.node(id);
        let best = match &node.container {
            Some(container) => {
                let items: Vec<_> = container
                    .children
                    .iter()
                    .map(|&child| self.layout_item(child))
                    .collect();
                container.layout.best_dimension(&items)
            }
            None => node.widget.best_dimension(&node.state),
        };
        assert!(
            best.is_valid(),
            "control {} reported invalid best dimension {}",
            id,
            best
        );
        best
    }

    pub fn maximum_dimension(&self, id: ControlId) -> Option<Dimension> {
        let node = self.tree.node(id);
        let maximum = node.widget.maximum_dimension(&node.state);
        if let Some(max) = maximum {
            assert!(
                max.is_valid(),
                "control {} reported invalid maximum dimension {}",
                id,
                max
            );
        }
        maximum
    }

    /// Shift a container's children when drawing and hit-testing.
    pub fn set_force_padding(&mut self, id: ControlId, offset: Point) {
        assert!(id != self.root, "the root panel has no force padding");
        assert!(
            offset.is_finite(),
            "invalid force padding {} for control {}",
            offset,
            id
        );
        let container = self.container_mut_or_panic(id);
        if container.force_padding != offset {
            container.force_padding = offset;
            self.redraw(id);
        }
    }

    /// Convert a point relative to `id`'s top-left corner into root
    /// coordinates. A control without a parent is the origin.
    pub fn local_to_absolute(&self, id: ControlId, point: Point) -> Point {
        let mut point = point;
        let mut current = id;
        while let Some(parent) = self.tree.parent(current) {
            point += self.tree.state(current).position();
            if let Some(container) = self.tree.container(parent) {
                point += container.force_padding;
            }
            current = parent;
        }
        point
    }

    pub fn absolute_to_local(&self, id: ControlId, point: Point) -> Point {
        point - self.local_to_absolute(id, Point::ZERO)
    }

    // Flags

    /// Mark for repaint. Dirtiness is discovered by the next tick.
    pub fn redraw(&mut self, id: ControlId) {
        self.tree.state_mut(id).redraw();
    }

    /// Schedule a layout pass, if `id` is attached to the root.
    pub fn relayout(&mut self, id: ControlId) {
        if self.needs_layout || !self.is_attached(id) {
            return;
        }
        tracing::trace!(control = %id, "layout requested");
        self.needs_layout = true;
    }

    pub fn set_visible(&mut self, id: ControlId, visible: bool) {
        if self.tree.state(id).is_visible() == visible {
            return;
        }
        self.tree.state_mut(id).flags.set(ControlFlags::VISIBLE, visible);
        self.redraw(id);
        if let Some(parent) = self.tree.parent(id) {
            self.redraw(parent);
        }
        self.hover_stale = true;
    }

    pub fn set_enabled(&mut self, id: ControlId, enabled: bool) {
        if self.tree.state(id).is_self_enabled() == enabled {
            return;
        }
        self.tree.state_mut(id).flags.set(ControlFlags::ENABLED, enabled);
        self.redraw(id);
    }

    /// Effective enablement: own flag and every ancestor's.
    pub fn is_enabled(&self, id: ControlId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if !self.tree.state(c).is_self_enabled() {
                return false;
            }
            current = self.tree.parent(c);
        }
        true
    }

    pub fn set_transparent(&mut self, id: ControlId, transparent: bool) {
        self.tree.state_mut(id).set_transparent(transparent);
    }

    /// Topmost children sit above every non-topmost sibling.
    pub fn set_topmost(&mut self, id: ControlId, topmost: bool) {
        if self.tree.state(id).is_topmost() == topmost {
            return;
        }
        self.tree.state_mut(id).flags.set(ControlFlags::TOPMOST, topmost);
        let Some(parent) = self.tree.parent(id) else {
            return;
        };
        if self.is_floating(id) {
            return;
        }
        let run = self.topmost_run(parent, Some(id));
        let container = self.container_mut_or_panic(parent);
        container.z_order.retain(|&c| c != id);
        container.z_order.insert(if topmost { 0 } else { run }, id);
        self.redraw(parent);
    }

    // Hit-testing and lookup

    /// Deepest visible control under `point` (root coordinates). Floating
    /// controls win, newest first, then the regular tree in z-order.
    pub fn find_control(&self, point: Point, include_transparent: bool) -> Option<ControlId> {
        let tooltip = self.tooltip.map(|t| t.control);
        self.floating
            .keys()
            .rev()
            .filter(|&&id| Some(id) != tooltip)
            .find_map(|&id| self.hit_test(id, point, include_transparent))
            .or_else(|| self.hit_test(self.root, point, include_transparent))
    }

    /// `point` is relative to the parent's content origin.
    fn hit_test(&self, id: ControlId, point: Point, include_transparent: bool) -> Option<ControlId> {
        let node = self.tree.node(id);
        if !node.state.is_visible() || !node.state.bounds.contains(point) {
            return None;
        }
        if let Some(container) = &node.container {
            let local = point - node.state.position() - container.force_padding;
            let hit = container
                .z_order
                .iter()
                .find_map(|&child| self.hit_test(child, local, include_transparent));
            if hit.is_some() {
                return hit;
            }
        }
        (include_transparent || !node.state.is_transparent()).then_some(id)
    }

    /// First control with the given user id in the regular tree, then among
    /// floating controls.
    pub fn find_id(&self, name: &str) -> Option<ControlId> {
        self.find_id_in(self.root, name).or_else(|| {
            self.floating
                .keys()
                .find_map(|&id| self.find_id_in(id, name))
        })
    }

    /// Search `start`'s subtree, children (in z-order) before the container.
    pub fn find_id_in(&self, start: ControlId, name: &str) -> Option<ControlId> {
        let node = self.tree.node(start);
        if let Some(container) = &node.container {
            if let Some(found) = container
                .z_order
                .iter()
                .find_map(|&child| self.find_id_in(child, name))
            {
                return Some(found);
            }
        }
        (node.state.id() == name).then_some(start)
    }

    // Tooltips

    /// Attach a detached control as `id`'s tooltip, shown after the hover
    /// delay at `position` (root coordinates) or next to the pointer.
    pub fn set_tooltip(&mut self, id: ControlId, tooltip: Option<ControlId>, position: Option<Point>) {
        if let Some(control) = tooltip {
            assert!(control != id, "control {} cannot be its own tooltip", id);
            assert!(
                self.tree.parent(control).is_none(),
                "tooltip control {} must be detached",
                control
            );
        }
        if self.tooltip.is_some_and(|t| t.owner == id) {
            self.hide_tooltip();
        }
        if self.hover_timer.owner() == Some(id) {
            self.hover_timer.cancel();
        }
        self.tree.state_mut(id).tooltip =
            tooltip.map(|control| TooltipAttachment { control, position });
        if tooltip.is_some() && self.hovered == Some(id) {
            self.hover_timer.start(id, self.config.tooltip_delay);
        }
    }

    /// Currently displayed tooltip control.
    pub fn shown_tooltip(&self) -> Option<ControlId> {
        self.tooltip.map(|t| t.control)
    }

    fn show_tooltip(&mut self, owner: ControlId) {
        let Some(attachment) = self.tree.state(owner).tooltip else {
            return;
        };
        let control = attachment.control;
        if !self.tree.contains(control) || self.tree.parent(control).is_some() {
            tracing::warn!(owner = %owner, tooltip = %control, "tooltip control unavailable");
            return;
        }
        let position = attachment
            .position
            .unwrap_or(self.pointer + self.config.tooltip_offset);
        self.add_floating(control, true);
        self.set_position(control, position);
        self.tooltip = Some(ShownTooltip { owner, control });
        tracing::debug!(owner = %owner, tooltip = %control, "showing tooltip");
    }

    fn hide_tooltip(&mut self) {
        if let Some(shown) = self.tooltip.take() {
            tracing::debug!(owner = %shown.owner, "hiding tooltip");
            self.remove_floating(shown.control);
        }
    }

    // Dispatch plumbing

    fn snapshot(&self, id: ControlId) -> Snapshot {
        Snapshot {
            pointer: self.pointer,
            modifiers: self.modifiers,
            origin: self.local_to_absolute(id, Point::ZERO),
            enabled: self.is_enabled(id),
            hovered: self.hovered,
            focused: self.focused,
            captured: self.captured,
        }
    }

    fn pointer_event(&self, id: ControlId) -> PointerEvent {
        PointerEvent {
            position: self.pointer,
            local: self.absolute_to_local(id, self.pointer),
            modifiers: self.modifiers,
        }
    }

    /// Run a hook on `id` then apply whatever it requested.
    fn dispatch<R>(
        &mut self,
        id: ControlId,
        hook: impl FnOnce(&mut dyn Control, &mut EventCx<'_>) -> R,
    ) -> R {
        let snapshot = self.snapshot(id);
        let node = self.tree.node_mut(id);
        let mut cx = EventCx::new(id, &mut node.state, &mut self.requests, snapshot);
        let result = hook(&mut *node.widget, &mut cx);
        self.apply_requests();
        result
    }

    fn apply_requests(&mut self) {
        if self.applying {
            return;
        }
        self.applying = true;
        while let Some(request) = self.requests.pop_front() {
            match request {
                Request::Relayout(id) => self.relayout(id),
                Request::SetBounds(id, bounds) => self.set_bounds(id, bounds),
                Request::CaptureMouse(id) => self.capture_mouse(id),
                Request::ReleaseMouse(id) => self.release_mouse(id),
                Request::Focus(id) => self.set_focus(Some(id)),
                Request::Blur(id) => {
                    if self.focused == Some(id) {
                        self.set_focus(None);
                    }
                }
                Request::ForcePadding(id, offset) => self.set_force_padding(id, offset),
            }
        }
        self.applying = false;
    }

    fn layout_item(&self, id: ControlId) -> LayoutItem {
        LayoutItem {
            id,
            best: self.best_dimension(id),
            maximum: self.maximum_dimension(id),
            bounds: self.tree.state(id).bounds,
        }
    }
}
