//! Input routing: hover, capture, focus and per-event dispatch.

use palisade_core::geometry::Point;
use palisade_core::math::Vec2;
use palisade_core::profiling::profile_function;

use super::RootPanel;
use crate::event::{EventResult, HandleStatus, InputEvent, Key, KeyEvent, Modifiers, WheelEvent};
use crate::id::ControlId;

impl RootPanel {
    /// Feed one platform event. Exactly one target is resolved before any
    /// hook runs.
    pub fn handle_input(&mut self, event: InputEvent) -> HandleStatus {
        profile_function!();
        match event {
            InputEvent::PointerMove(position) => self.pointer_move(position),
            InputEvent::PointerDown(position) => self.pointer_down(position),
            InputEvent::PointerUp(position) => self.pointer_up(position),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::DoubleClick(position) => self.double_click(position),
            InputEvent::Wheel { delta } => self.wheel(delta),
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::KeyPress(ch) => self.key_press(ch),
            InputEvent::FocusGained => HandleStatus::ignored(),
            InputEvent::FocusLost => self.focus_lost(),
        }
    }

    // Capture

    /// Route every pointer move/up to `id` until [`RootPanel::release_mouse`].
    ///
    /// Panics if `id` is not attached or another control holds the capture.
    pub fn capture_mouse(&mut self, id: ControlId) {
        assert!(
            self.is_attached(id),
            "control {} must be attached to capture the mouse",
            id
        );
        if let Some(holder) = self.captured {
            panic!(
                "control {} cannot capture the mouse: already captured by {}",
                id, holder
            );
        }
        self.captured = Some(id);
        tracing::debug!(control = %id, "mouse captured");
        self.update_cursor();
    }

    /// Panics unless `id` holds the capture. Hover is re-resolved from the
    /// current pointer position at the next pointer event or tick.
    pub fn release_mouse(&mut self, id: ControlId) {
        assert!(
            self.captured == Some(id),
            "control {} released a mouse capture it does not hold (held by {:?})",
            id,
            self.captured
        );
        self.captured = None;
        self.hover_stale = true;
        tracing::debug!(control = %id, "mouse released");
        self.update_cursor();
    }

    // Focus

    /// Move keyboard focus. No-op if `target` is already focused or declines
    /// focus. The previous control is blurred before the new one is focused.
    pub fn set_focus(&mut self, target: Option<ControlId>) {
        if target == self.focused {
            return;
        }
        if let Some(id) = target {
            assert!(
                self.is_attached(id),
                "control {} must be attached to receive focus",
                id
            );
            let node = self.tree.node(id);
            if !node.widget.accepts_focus(&node.state) {
                return;
            }
        }

        let previous = self.focused;
        self.focused = target;
        tracing::debug!(from = ?previous, to = ?target, "focus changed");

        // Requests raised by either hook wait until both have run.
        let outer = std::mem::replace(&mut self.applying, true);
        if let Some(previous) = previous {
            self.redraw(previous);
            self.dispatch(previous, |widget, cx| widget.on_blur(cx, target));
        }
        if let Some(target) = target {
            self.redraw(target);
            self.dispatch(target, |widget, cx| widget.on_focus(cx, previous));
        }
        self.applying = outer;
        self.apply_requests();
    }

    /// Cursor name for the current pointer state.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    pub(super) fn update_cursor(&mut self) {
        let cursor = self
            .captured
            .or(self.hovered)
            .and_then(|id| self.tree.state(id).cursor())
            .unwrap_or(&self.config.default_cursor);
        if cursor != self.cursor {
            self.cursor = cursor.to_string();
        }
    }

    // Hover

    /// Re-resolve the hovered control from the pointer. Hover is frozen while
    /// the mouse is captured.
    pub(super) fn update_hover(&mut self) {
        if self.captured.is_some() {
            return;
        }
        self.hover_stale = false;
        let candidate = if self.pointer_inside {
            self.find_control(self.pointer, false)
        } else {
            None
        };
        self.set_hovered(candidate);
        self.update_cursor();
    }

    fn set_hovered(&mut self, candidate: Option<ControlId>) {
        if candidate == self.hovered {
            return;
        }
        let old = self.hovered;
        self.hovered = candidate;
        tracing::trace!(from = ?old, to = ?candidate, "hover changed");

        if let Some(old) = old {
            if self.hover_timer.owner() == Some(old) {
                self.hover_timer.cancel();
            }
            if self.tooltip.is_some_and(|t| t.owner == old) {
                self.hide_tooltip();
            }
            if self.tree.contains(old) && self.captured.is_none_or(|c| c == old) {
                let event = self.pointer_event(old);
                self.dispatch(old, |widget, cx| widget.on_mouse_leave(cx, &event));
            }
        }
        if let Some(new) = candidate {
            if self.tree.state(new).tooltip().is_some() {
                self.hover_timer.start(new, self.config.tooltip_delay);
            }
            if self.captured.is_none_or(|c| c == new) {
                let event = self.pointer_event(new);
                self.dispatch(new, |widget, cx| widget.on_mouse_enter(cx, &event));
            }
        }
    }

    /// Control receiving pointer events: the capture holder, else the hovered one.
    fn pointer_target(&self) -> Option<ControlId> {
        self.captured.or(self.hovered)
    }

    fn track_pointer(&mut self, position: Point) {
        self.pointer = position;
        self.pointer_inside = true;
        self.update_hover();
    }

    fn pointer_move(&mut self, position: Point) -> HandleStatus {
        let hovered_before = self.hovered;
        self.track_pointer(position);

        if let Some(hovered) = self.hovered {
            let has_tooltip = self.tree.state(hovered).tooltip().is_some();
            if has_tooltip && hovered_before == Some(hovered) && self.tooltip.is_none() {
                self.hover_timer.start(hovered, self.config.tooltip_delay);
            }
        }

        let Some(target) = self.pointer_target() else {
            return HandleStatus::ignored();
        };
        let event = self.pointer_event(target);
        self.dispatch(target, |widget, cx| widget.on_mouse_move(cx, &event));
        HandleStatus::consumed()
    }

    fn pointer_down(&mut self, position: Point) -> HandleStatus {
        self.track_pointer(position);
        self.hover_timer.cancel();
        self.hide_tooltip();

        let Some(target) = self.pointer_target() else {
            return HandleStatus::ignored();
        };
        if !self.is_enabled(target) {
            return HandleStatus::handled();
        }
        self.set_focus(Some(target));
        let event = self.pointer_event(target);
        self.dispatch(target, |widget, cx| widget.on_mouse_down(cx, &event));
        HandleStatus::consumed()
    }

    fn pointer_up(&mut self, position: Point) -> HandleStatus {
        self.track_pointer(position);
        let Some(target) = self.pointer_target() else {
            return HandleStatus::ignored();
        };
        if !self.is_enabled(target) {
            return HandleStatus::handled();
        }
        let event = self.pointer_event(target);
        self.dispatch(target, |widget, cx| widget.on_mouse_up(cx, &event));
        HandleStatus::consumed()
    }

    fn double_click(&mut self, position: Point) -> HandleStatus {
        self.track_pointer(position);
        let Some(target) = self.pointer_target() else {
            return HandleStatus::ignored();
        };
        if !self.is_enabled(target) {
            return HandleStatus::handled();
        }
        let event = self.pointer_event(target);
        self.dispatch(target, |widget, cx| widget.on_double_click(cx, &event));
        HandleStatus::consumed()
    }

    fn pointer_leave(&mut self) -> HandleStatus {
        self.pointer_inside = false;
        self.update_hover();
        HandleStatus::handled()
    }

    /// Offered to the pointer target first, then up the parent chain until
    /// some control handles it.
    fn wheel(&mut self, delta: Vec2) -> HandleStatus {
        let mut current = self.pointer_target();
        while let Some(id) = current {
            if self.is_enabled(id) {
                let event = WheelEvent {
                    delta,
                    position: self.pointer,
                    local: self.absolute_to_local(id, self.pointer),
                    modifiers: self.modifiers,
                };
                let result = self.dispatch(id, |widget, cx| widget.on_mouse_wheel(cx, &event));
                if result.is_handled() {
                    return HandleStatus::consumed();
                }
            }
            current = self.tree.parent(id);
        }
        HandleStatus::ignored()
    }

    fn focused_enabled(&self) -> Option<ControlId> {
        self.focused.filter(|&id| self.is_enabled(id))
    }

    fn key_down(&mut self, event: KeyEvent) -> HandleStatus {
        if let Some(modifier) = event.key.modifier() {
            self.modifiers.insert(modifier);
        }
        let result = match self.focused_enabled() {
            Some(id) => self.dispatch(id, |widget, cx| widget.on_key_down(cx, &event)),
            None => EventResult::Ignored,
        };
        if result.is_handled() {
            return HandleStatus::consumed();
        }
        if event.key == Key::Tab {
            if self.modifiers.shift() {
                self.focus_previous();
            } else {
                self.focus_next();
            }
            return HandleStatus::consumed();
        }
        if event.key.modifier().is_some() {
            HandleStatus::handled()
        } else {
            HandleStatus::ignored()
        }
    }

    fn key_up(&mut self, event: KeyEvent) -> HandleStatus {
        if let Some(modifier) = event.key.modifier() {
            self.modifiers.remove(modifier);
        }
        let result = match self.focused_enabled() {
            Some(id) => self.dispatch(id, |widget, cx| widget.on_key_up(cx, &event)),
            None => EventResult::Ignored,
        };
        if result.is_handled() {
            HandleStatus::consumed()
        } else if event.key.modifier().is_some() {
            HandleStatus::handled()
        } else {
            HandleStatus::ignored()
        }
    }

    fn key_press(&mut self, ch: char) -> HandleStatus {
        let result = match self.focused_enabled() {
            Some(id) => self.dispatch(id, |widget, cx| widget.on_key_press(cx, ch)),
            None => EventResult::Ignored,
        };
        if result.is_handled() {
            HandleStatus::consumed()
        } else {
            HandleStatus::ignored()
        }
    }

    /// Key-up events may never arrive once the platform focus is gone, so
    /// modifiers are reset here.
    fn focus_lost(&mut self) -> HandleStatus {
        self.modifiers = Modifiers::empty();
        self.set_focus(None);
        HandleStatus::handled()
    }
}
