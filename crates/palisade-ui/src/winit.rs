//! Translation of `winit` window events into [`InputEvent`]s.
//!
//! ```ignore
//! let mut input = WinitInput::new(window.scale_factor(), ui.config());
//! for event in input.translate(&window_event) {
//!     ui.handle_input(event);
//! }
//! ```

use std::time::{Duration, Instant};

use palisade_core::geometry::Point;
use palisade_core::math::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

use crate::config::RootConfig;
use crate::event::{InputEvent, Key, KeyEvent};

/// Pixels scrolled per wheel line.
const LINE_HEIGHT: f32 = 20.0;

/// Detects double-clicks from successive presses.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    distance: f32,
    last: Option<(Instant, Point)>,
}

impl ClickTracker {
    pub fn new(interval: Duration, distance: f32) -> Self {
        Self {
            interval,
            distance,
            last: None,
        }
    }

    /// Record a press. Returns `true` if it completes a double-click; the
    /// press after a double-click starts a new sequence.
    pub fn press(&mut self, at: Instant, position: Point) -> bool {
        let double = self.last.is_some_and(|(time, origin)| {
            at.saturating_duration_since(time) <= self.interval
                && origin.distance(position) <= self.distance
        });
        self.last = if double { None } else { Some((at, position)) };
        double
    }
}

/// Stateful adapter from `winit` to the root panel's input model.
#[derive(Debug, Clone)]
pub struct WinitInput {
    scale_factor: f64,
    position: Point,
    clicks: ClickTracker,
}

impl WinitInput {
    pub fn new(scale_factor: f64, config: &RootConfig) -> Self {
        Self {
            scale_factor,
            position: Point::ZERO,
            clicks: ClickTracker::new(config.double_click_interval, config.double_click_distance),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Translate one window event. Most events map to zero or one input
    /// event; a press completing a double-click yields both.
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<InputEvent> {
        self.translate_at(event, Instant::now())
    }

    pub fn translate_at(&mut self, event: &WindowEvent, now: Instant) -> Vec<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Point::new(
                    (position.x / self.scale_factor) as f32,
                    (position.y / self.scale_factor) as f32,
                );
                vec![InputEvent::PointerMove(self.position)]
            }
            WindowEvent::CursorLeft { .. } => vec![InputEvent::PointerLeave],
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let mut events = vec![InputEvent::PointerDown(self.position)];
                    if self.clicks.press(now, self.position) {
                        events.push(InputEvent::DoubleClick(self.position));
                    }
                    events
                }
                ElementState::Released => vec![InputEvent::PointerUp(self.position)],
            },
            WindowEvent::MouseInput { .. } => Vec::new(),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y) * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => Vec2::new(
                        (pos.x / self.scale_factor) as f32,
                        (pos.y / self.scale_factor) as f32,
                    ),
                };
                // winit reports positive y when scrolling up
                vec![InputEvent::Wheel {
                    delta: Vec2::new(-delta.x, -delta.y),
                }]
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = KeyEvent {
                    key: map_key(&event.logical_key),
                    repeat: event.repeat,
                };
                match event.state {
                    ElementState::Pressed => {
                        let mut events = vec![InputEvent::KeyDown(key)];
                        if let Some(text) = &event.text {
                            events.extend(
                                text.chars()
                                    .filter(|c| !c.is_control())
                                    .map(InputEvent::KeyPress),
                            );
                        }
                        events
                    }
                    ElementState::Released => vec![InputEvent::KeyUp(key)],
                }
            }
            WindowEvent::Focused(true) => vec![InputEvent::FocusGained],
            WindowEvent::Focused(false) => vec![InputEvent::FocusLost],
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                Vec::new()
            }
            WindowEvent::Resized(_)
            | WindowEvent::Moved(_)
            | WindowEvent::RedrawRequested
            | WindowEvent::CloseRequested
            | WindowEvent::CursorEntered { .. }
            | WindowEvent::ModifiersChanged(_)
            | WindowEvent::Occluded(_)
            | WindowEvent::TouchpadPressure { .. } => Vec::new(),
            unknown => {
                tracing::warn!("unhandled window event: {:?}", unknown);
                Vec::new()
            }
        }
    }
}

/// Map a logical winit key to the toolkit's key model.
pub fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => match named {
            NamedKey::Shift => Key::Shift,
            NamedKey::Control => Key::Control,
            NamedKey::Alt => Key::Alt,
            NamedKey::Enter => Key::Enter,
            NamedKey::Escape => Key::Escape,
            NamedKey::Tab => Key::Tab,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Delete => Key::Delete,
            NamedKey::Space => Key::Space,
            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,
            NamedKey::Home => Key::Home,
            NamedKey::End => Key::End,
            NamedKey::PageUp => Key::PageUp,
            NamedKey::PageDown => Key::PageDown,
            other => Key::Other(format!("{:?}", other)),
        },
        WinitKey::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::Character(ch),
                _ => Key::Other(text.to_string()),
            }
        }
        other => Key::Other(format!("{:?}", other)),
    }
}
