//! Default behaviour widgets call explicitly when extending a hook.
//!
//! ```ignore
//! fn draw(&mut self, cx: &mut DrawCx<'_>, surface: &mut dyn Surface) {
//!     surface.fill_rect(cx.local_bounds(), self.fill);
//!     base::draw(cx, surface);
//! }
//! ```

use palisade_core::Surface;
use palisade_core::geometry::Rect;

use super::DrawCx;
use crate::event::{EventResult, WheelEvent};

/// Paints the configured per-edge borders inside the control's local bounds.
pub fn draw(cx: &mut DrawCx<'_>, surface: &mut dyn Surface) {
    let borders = cx.state().borders();
    if borders.is_zero() {
        return;
    }
    let color = cx.state().border_color();
    let Rect { width, height, .. } = cx.local_bounds();

    if borders.top > 0.0 {
        surface.fill_rect(Rect::new(0.0, 0.0, width, borders.top), color);
    }
    if borders.bottom > 0.0 {
        surface.fill_rect(
            Rect::new(0.0, (height - borders.bottom).max(0.0), width, borders.bottom),
            color,
        );
    }
    if borders.left > 0.0 {
        surface.fill_rect(Rect::new(0.0, 0.0, borders.left, height), color);
    }
    if borders.right > 0.0 {
        surface.fill_rect(
            Rect::new((width - borders.right).max(0.0), 0.0, borders.right, height),
            color,
        );
    }
}

/// Wheel events stop at the first control by default so the page underneath
/// does not scroll.
pub fn on_mouse_wheel(_event: &WheelEvent) -> EventResult {
    EventResult::Handled
}
