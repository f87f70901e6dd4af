//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use palisade_test_utils::MockSurface;
use palisade_ui::prelude::*;

/// Shared, ordered record of hook invocations: `"name:hook"`.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, name: &str, hook: &str) {
        self.0.borrow_mut().push(format!("{}:{}", name, hook));
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Return and clear the recorded entries.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Widget that logs every hook. Builders make it capture the pointer, handle
/// keys, grow when resized or pull focus back when blurred.
pub struct Recorder {
    name: &'static str,
    log: EventLog,
    best: Dimension,
    maximum: Option<Dimension>,
    fill: Option<Color>,
    capture_on_down: bool,
    wheel: EventResult,
    keys: EventResult,
    grow_to: Option<f32>,
    refocus_on_blur: bool,
    pub last_pointer: Option<PointerEvent>,
}

impl Recorder {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            log: log.clone(),
            best: Dimension::ZERO,
            maximum: None,
            fill: None,
            capture_on_down: false,
            wheel: EventResult::Handled,
            keys: EventResult::Ignored,
            grow_to: None,
            refocus_on_blur: false,
            last_pointer: None,
        }
    }

    pub fn best(mut self, width: f32, height: f32) -> Self {
        self.best = Dimension::new(width, height);
        self
    }

    pub fn maximum(mut self, width: f32, height: f32) -> Self {
        self.maximum = Some(Dimension::new(width, height));
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Capture on press, release on the next release.
    pub fn capturing(mut self) -> Self {
        self.capture_on_down = true;
        self
    }

    pub fn wheel(mut self, result: EventResult) -> Self {
        self.wheel = result;
        self
    }

    pub fn handles_keys(mut self) -> Self {
        self.keys = EventResult::Handled;
        self
    }

    /// On the first bounds change, raise the best height and ask for layout.
    pub fn grow_to(mut self, height: f32) -> Self {
        self.grow_to = Some(height);
        self
    }

    /// Ask for focus again from inside `on_blur`.
    pub fn refocus_on_blur(mut self) -> Self {
        self.refocus_on_blur = true;
        self
    }
}

impl Control for Recorder {
    fn best_dimension(&self, _state: &ControlState) -> Dimension {
        self.best
    }

    fn maximum_dimension(&self, _state: &ControlState) -> Option<Dimension> {
        self.maximum
    }

    fn on_mouse_enter(&mut self, _cx: &mut EventCx<'_>, event: &PointerEvent) {
        self.last_pointer = Some(*event);
        self.log.push(self.name, "enter");
    }

    fn on_mouse_leave(&mut self, _cx: &mut EventCx<'_>, _event: &PointerEvent) {
        self.log.push(self.name, "leave");
    }

    fn on_mouse_move(&mut self, _cx: &mut EventCx<'_>, event: &PointerEvent) {
        self.last_pointer = Some(*event);
        self.log.push(self.name, "move");
    }

    fn on_mouse_down(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) {
        self.last_pointer = Some(*event);
        self.log.push(self.name, "down");
        if self.capture_on_down {
            cx.capture_mouse();
        }
    }

    fn on_mouse_up(&mut self, cx: &mut EventCx<'_>, _event: &PointerEvent) {
        self.log.push(self.name, "up");
        if self.capture_on_down && cx.is_captured() {
            cx.release_mouse();
        }
    }

    fn on_double_click(&mut self, _cx: &mut EventCx<'_>, _event: &PointerEvent) {
        self.log.push(self.name, "double_click");
    }

    fn on_mouse_wheel(&mut self, _cx: &mut EventCx<'_>, _event: &WheelEvent) -> EventResult {
        self.log.push(self.name, "wheel");
        self.wheel
    }

    fn on_key_down(&mut self, _cx: &mut EventCx<'_>, _event: &KeyEvent) -> EventResult {
        self.log.push(self.name, "key_down");
        self.keys
    }

    fn on_key_up(&mut self, _cx: &mut EventCx<'_>, _event: &KeyEvent) -> EventResult {
        self.log.push(self.name, "key_up");
        self.keys
    }

    fn on_key_press(&mut self, _cx: &mut EventCx<'_>, _ch: char) -> EventResult {
        self.log.push(self.name, "key_press");
        self.keys
    }

    fn on_focus(&mut self, _cx: &mut EventCx<'_>, _previous: Option<ControlId>) {
        self.log.push(self.name, "focus");
    }

    fn on_blur(&mut self, cx: &mut EventCx<'_>, _next: Option<ControlId>) {
        self.log.push(self.name, "blur");
        if self.refocus_on_blur {
            cx.focus();
        }
    }

    fn on_bounds_changed(&mut self, cx: &mut EventCx<'_>, _old: Rect) {
        self.log.push(self.name, "bounds");
        if let Some(height) = self.grow_to.take() {
            self.best.height = height;
            cx.relayout();
        }
    }

    fn on_detached(&mut self, _cx: &mut EventCx<'_>) {
        self.log.push(self.name, "detached");
    }

    fn draw_background(&mut self, cx: &mut DrawCx<'_>, surface: &mut dyn Surface) {
        if let Some(color) = self.fill {
            surface.fill_rect(cx.local_bounds(), color);
        }
    }

    fn draw(&mut self, cx: &mut DrawCx<'_>, surface: &mut dyn Surface) {
        self.log.push(self.name, "draw");
        base::draw(cx, surface);
    }
}

/// Root panel with an absolute root layout sized to `width` x `height`.
pub fn absolute_root(width: f32, height: f32) -> (RootPanel, MockSurface) {
    let mut surface = MockSurface::new(width, height);
    let mut ui = RootPanel::new(AbsoluteLayout::new());
    ui.tick(Duration::ZERO, &mut surface);
    surface.clear_calls();
    (ui, surface)
}

/// Create a recorder leaf at `bounds` under `parent`.
pub fn place(ui: &mut RootPanel, parent: ControlId, recorder: Recorder, bounds: Rect) -> ControlId {
    let id = ui.create(recorder);
    ui.add(parent, id);
    ui.set_bounds(id, bounds);
    id
}

/// Run one tick with no elapsed time.
pub fn settle(ui: &mut RootPanel, surface: &mut MockSurface) -> bool {
    ui.tick(Duration::ZERO, surface)
}
