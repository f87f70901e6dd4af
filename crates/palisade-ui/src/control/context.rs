use std::collections::VecDeque;

use palisade_core::geometry::{Point, Rect};

use super::ControlState;
use crate::event::Modifiers;
use crate::id::ControlId;

/// Deferred tree mutation requested from inside a hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Request {
    Relayout(ControlId),
    SetBounds(ControlId, Rect),
    CaptureMouse(ControlId),
    ReleaseMouse(ControlId),
    Focus(ControlId),
    Blur(ControlId),
    ForcePadding(ControlId, Point),
}

/// Root panel state copied at dispatch time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Snapshot {
    pub pointer: Point,
    pub modifiers: Modifiers,
    /// Absolute position of the control's top-left corner.
    pub origin: Point,
    pub enabled: bool,
    pub hovered: Option<ControlId>,
    pub focused: Option<ControlId>,
    pub captured: Option<ControlId>,
}

/// Handed to every event hook.
///
/// Gives mutable access to the receiving control's own [`ControlState`].
/// Anything touching the rest of the tree (capture, focus, layout) is queued
/// and applied by the root panel as soon as the hook returns.
pub struct EventCx<'a> {
    id: ControlId,
    state: &'a mut ControlState,
    requests: &'a mut VecDeque<Request>,
    snapshot: Snapshot,
}

impl<'a> EventCx<'a> {
    pub(crate) fn new(
        id: ControlId,
        state: &'a mut ControlState,
        requests: &'a mut VecDeque<Request>,
        snapshot: Snapshot,
    ) -> Self {
        Self {
            id,
            state,
            requests,
            snapshot,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn state(&self) -> &ControlState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut ControlState {
        self.state
    }

    pub fn redraw(&mut self) {
        self.state.redraw();
    }

    /// Schedule a layout pass before the next draw.
    pub fn relayout(&mut self) {
        self.requests.push_back(Request::Relayout(self.id));
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.requests.push_back(Request::SetBounds(self.id, bounds));
    }

    /// Route all pointer move/up events to this control until released.
    ///
    /// Panics when applied if another control already holds the capture.
    pub fn capture_mouse(&mut self) {
        self.requests.push_back(Request::CaptureMouse(self.id));
    }

    /// Panics when applied if this control does not hold the capture.
    pub fn release_mouse(&mut self) {
        self.requests.push_back(Request::ReleaseMouse(self.id));
    }

    pub fn focus(&mut self) {
        self.requests.push_back(Request::Focus(self.id));
    }

    pub fn blur(&mut self) {
        self.requests.push_back(Request::Blur(self.id));
    }

    /// Shift this container's children, e.g. while a pressable widget is held down.
    pub fn set_force_padding(&mut self, offset: Point) {
        self.requests.push_back(Request::ForcePadding(self.id, offset));
    }

    /// Last known pointer position, surface-relative.
    pub fn pointer(&self) -> Point {
        self.snapshot.pointer
    }

    /// Last known pointer position relative to this control's top-left corner.
    pub fn local_pointer(&self) -> Point {
        self.snapshot.pointer - self.snapshot.origin
    }

    pub fn modifiers(&self) -> Modifiers {
        self.snapshot.modifiers
    }

    /// Effective enablement, including ancestors.
    pub fn is_enabled(&self) -> bool {
        self.snapshot.enabled
    }

    // The following reflect the state when the hook was entered.

    pub fn is_hovered(&self) -> bool {
        self.snapshot.hovered == Some(self.id)
    }

    pub fn is_focused(&self) -> bool {
        self.snapshot.focused == Some(self.id)
    }

    pub fn is_captured(&self) -> bool {
        self.snapshot.captured == Some(self.id)
    }
}

/// Handed to the draw hooks. Drawing happens in control-local coordinates.
pub struct DrawCx<'a> {
    id: ControlId,
    state: &'a ControlState,
    snapshot: Snapshot,
}

impl<'a> DrawCx<'a> {
    pub(crate) fn new(id: ControlId, state: &'a ControlState, snapshot: Snapshot) -> Self {
        Self {
            id,
            state,
            snapshot,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn state(&self) -> &ControlState {
        self.state
    }

    /// The control's own area: origin at zero, size of its bounds.
    pub fn local_bounds(&self) -> Rect {
        Rect::from_parts(Point::ZERO, self.state.dimension())
    }

    pub fn is_enabled(&self) -> bool {
        self.snapshot.enabled
    }

    pub fn is_hovered(&self) -> bool {
        self.snapshot.hovered == Some(self.id)
    }

    pub fn is_focused(&self) -> bool {
        self.snapshot.focused == Some(self.id)
    }

    pub fn is_captured(&self) -> bool {
        self.snapshot.captured == Some(self.id)
    }
}
