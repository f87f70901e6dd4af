//! The control contract every widget implements.
//!
//! A control is a [`ControlState`] owned by the root panel plus a boxed
//! [`Control`] implementation carrying the widget's own data and behaviour.
//! Every hook has a default, so a widget only overrides what it needs. A
//! widget that wants to extend a default instead of replacing it calls the
//! matching function in [`base`] explicitly.

pub mod base;
mod context;
mod panel;
mod state;

use std::any::Any;

use palisade_core::Surface;
use palisade_core::geometry::{Dimension, Rect};

use crate::event::{EventResult, KeyEvent, PointerEvent, WheelEvent};
use crate::flags::ControlFlags;
use crate::id::ControlId;
use crate::options::{OptionError, OptionResult, OptionValue};

pub use context::{DrawCx, EventCx};
pub(crate) use context::{Request, Snapshot};
pub use panel::Panel;
pub use state::{ControlState, TooltipAttachment};

/// Widget behaviour plugged into the control tree.
///
/// Widgets never hold references to other controls. They address the rest of
/// the tree through [`ControlId`] and the request methods on [`EventCx`].
#[allow(unused_variables)]
pub trait Control: Any {
    /// Unconstrained preferred size. Must be finite and non-negative.
    ///
    /// Containers ignore this and ask their layout instead.
    fn best_dimension(&self, state: &ControlState) -> Dimension {
        Dimension::ZERO
    }

    /// Upper bound honoured by the border layout's center region.
    fn maximum_dimension(&self, state: &ControlState) -> Option<Dimension> {
        None
    }

    /// Whether this control may receive keyboard focus.
    fn accepts_focus(&self, state: &ControlState) -> bool {
        state.flags().contains(ControlFlags::FOCUSABLE)
    }

    fn on_mouse_enter(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) {}

    fn on_mouse_leave(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) {}

    fn on_mouse_move(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) {}

    fn on_mouse_down(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) {}

    fn on_mouse_up(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) {}

    fn on_double_click(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) {}

    /// Returning [`EventResult::Ignored`] passes the wheel event to the parent.
    fn on_mouse_wheel(&mut self, cx: &mut EventCx<'_>, event: &WheelEvent) -> EventResult {
        base::on_mouse_wheel(event)
    }

    fn on_key_down(&mut self, cx: &mut EventCx<'_>, event: &KeyEvent) -> EventResult {
        EventResult::Ignored
    }

    fn on_key_up(&mut self, cx: &mut EventCx<'_>, event: &KeyEvent) -> EventResult {
        EventResult::Ignored
    }

    fn on_key_press(&mut self, cx: &mut EventCx<'_>, ch: char) -> EventResult {
        EventResult::Ignored
    }

    fn on_focus(&mut self, cx: &mut EventCx<'_>, previous: Option<ControlId>) {}

    fn on_blur(&mut self, cx: &mut EventCx<'_>, next: Option<ControlId>) {}

    /// Called after the bounds actually changed.
    fn on_bounds_changed(&mut self, cx: &mut EventCx<'_>, old: Rect) {}

    /// Called once per removal from a parent, on the removed control and on
    /// every descendant.
    fn on_detached(&mut self, cx: &mut EventCx<'_>) {}

    /// Painted before a container's children.
    fn draw_background(&mut self, cx: &mut DrawCx<'_>, surface: &mut dyn Surface) {}

    /// Painted after a container's children. The default draws the borders.
    fn draw(&mut self, cx: &mut DrawCx<'_>, surface: &mut dyn Surface) {
        base::draw(cx, surface);
    }

    /// Widget-specific named options.
    fn set_option(
        &mut self,
        state: &mut ControlState,
        name: &str,
        value: &OptionValue,
    ) -> OptionResult {
        Err(OptionError::unknown(name))
    }
}
