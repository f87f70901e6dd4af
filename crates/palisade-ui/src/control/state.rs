use palisade_core::geometry::{Insets, Point, Rect};
use palisade_core::{Color, Dimension};

use crate::flags::ControlFlags;
use crate::id::ControlId;

/// Tooltip attached to a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipAttachment {
    /// Detached control shown as a floating control after the hover delay.
    pub control: ControlId,
    /// Explicit root-relative position. `None` places it relative to the pointer.
    pub position: Option<Point>,
}

/// State shared by every control regardless of its widget type.
///
/// Hierarchy and geometry are owned by the root panel; widgets read them here
/// and request changes through [`EventCx`](super::EventCx).
#[derive(Debug, Clone)]
pub struct ControlState {
    pub(crate) id: String,
    pub(crate) bounds: Rect,
    pub(crate) parent: Option<ControlId>,
    pub(crate) flags: ControlFlags,
    pub(crate) borders: Insets,
    pub(crate) border_color: Color,
    pub(crate) font: Option<String>,
    pub(crate) cursor: Option<String>,
    pub(crate) tooltip: Option<TooltipAttachment>,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            id: String::new(),
            bounds: Rect::ZERO,
            parent: None,
            flags: ControlFlags::DEFAULT,
            borders: Insets::ZERO,
            border_color: Color::BLACK,
            font: None,
            cursor: None,
            tooltip: None,
        }
    }
}

impl ControlState {
    /// User-assigned identifier. Not required to be unique.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Bounds relative to the parent's content origin.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn position(&self) -> Point {
        self.bounds.position()
    }

    pub fn dimension(&self) -> Dimension {
        self.bounds.dimension()
    }

    pub fn parent(&self) -> Option<ControlId> {
        self.parent
    }

    pub fn flags(&self) -> ControlFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(ControlFlags::VISIBLE)
    }

    /// Own enablement flag only. See [`RootPanel::is_enabled`](crate::RootPanel::is_enabled)
    /// for the effective value.
    pub fn is_self_enabled(&self) -> bool {
        self.flags.contains(ControlFlags::ENABLED)
    }

    pub fn is_transparent(&self) -> bool {
        self.flags.contains(ControlFlags::TRANSPARENT)
    }

    pub fn is_topmost(&self) -> bool {
        self.flags.contains(ControlFlags::TOPMOST)
    }

    pub fn is_dirty(&self) -> bool {
        self.flags.contains(ControlFlags::DIRTY)
    }

    /// Mark for repaint on the next draw pass.
    pub fn redraw(&mut self) {
        self.flags.insert(ControlFlags::DIRTY);
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.flags.set(ControlFlags::FOCUSABLE, focusable);
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.flags.set(ControlFlags::TRANSPARENT, transparent);
    }

    pub fn borders(&self) -> Insets {
        self.borders
    }

    pub fn set_borders(&mut self, borders: Insets) {
        assert!(borders.is_valid(), "invalid borders {:?}", borders);
        if self.borders != borders {
            self.borders = borders;
            self.redraw();
        }
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        if self.border_color != color {
            self.border_color = color;
            self.redraw();
        }
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn set_font(&mut self, font: Option<String>) {
        if self.font != font {
            self.font = font;
            self.redraw();
        }
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn set_cursor(&mut self, cursor: Option<String>) {
        self.cursor = cursor;
    }

    pub fn tooltip(&self) -> Option<TooltipAttachment> {
        self.tooltip
    }
}
