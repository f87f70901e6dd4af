//! Input events fed into the root panel and the event payloads handed to controls.

use bitflags::bitflags;
use palisade_core::geometry::Point;
use palisade_core::math::Vec2;

/// Raw input from the platform, in surface-relative coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove(Point),
    /// Left button pressed.
    PointerDown(Point),
    /// Left button released.
    PointerUp(Point),
    /// Pointer left the surface.
    PointerLeave,
    DoubleClick(Point),
    /// Wheel delta in pixels, positive `y` scrolls down.
    Wheel { delta: Vec2 },
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    /// A printable character was produced.
    KeyPress(char),
    /// The surface gained platform focus.
    FocusGained,
    /// The surface lost platform focus.
    FocusLost,
}

bitflags! {
    /// Outcome of feeding an [`InputEvent`] to the root panel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// Returned by hooks that may let an event continue (wheel, keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    Handled,
    #[default]
    Ignored,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self == EventResult::Handled
    }
}

bitflags! {
    /// Keyboard modifier state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
    }
}

impl Modifiers {
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn ctrl(self) -> bool {
        self.contains(Self::CONTROL)
    }

    pub fn alt(self) -> bool {
        self.contains(Self::ALT)
    }
}

/// Logical key identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    Shift,
    Control,
    Alt,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    /// Anything else, by platform name.
    Other(String),
}

impl Key {
    /// The modifier bit this key drives, if it is a modifier key.
    pub fn modifier(&self) -> Option<Modifiers> {
        match self {
            Key::Shift => Some(Modifiers::SHIFT),
            Key::Control => Some(Modifiers::CONTROL),
            Key::Alt => Some(Modifiers::ALT),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Key auto-repeat.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, repeat: false }
    }
}

/// Pointer payload delivered to control hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Surface-relative position.
    pub position: Point,
    /// Position relative to the receiving control's top-left corner.
    pub local: Point,
    pub modifiers: Modifiers,
}

/// Wheel payload delivered to control hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta: Vec2,
    pub position: Point,
    pub local: Point,
    pub modifiers: Modifiers,
}
