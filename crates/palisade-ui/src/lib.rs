//! Palisade UI - retained-mode control tree for a single 2D surface.
//!
//! The kernel of the toolkit: a tree of [`Control`]s owned by a
//! [`RootPanel`], pluggable [`Layout`] strategies computing child geometry, and
//! the event dispatch core handling hover, focus, mouse capture, floating
//! controls and dirty-driven redraw.
//!
//! # Quick Start
//!
//! ```
//! use palisade_ui::prelude::*;
//!
//! let mut ui = RootPanel::new(LinearLayout::vertical().with_padding(5.0));
//! let first = ui.create(Panel::new().with_preferred(Dimension::new(40.0, 10.0)));
//! let second = ui.create(Panel::new().with_preferred(Dimension::new(60.0, 20.0)));
//! ui.add(ui.root(), first);
//! ui.add(ui.root(), second);
//!
//! ui.resize(Dimension::new(200.0, 100.0));
//! ui.do_layout();
//! assert_eq!(ui.bounds(second), Rect::new(0.0, 15.0, 60.0, 20.0));
//! ```
//!
//! Concrete widgets implement [`Control`]; containers are created with
//! [`RootPanel::create_container`]. Feed platform input through
//! [`RootPanel::handle_input`] and call [`RootPanel::tick`] at a fixed
//! interval to run pending layout and repaint dirty controls.

pub mod config;
pub mod container;
pub mod control;
pub mod event;
pub mod flags;
pub mod id;
pub mod layout;
pub mod options;
mod root_panel;
mod tooltip;
mod tree;
#[cfg(feature = "winit")]
pub mod winit;

pub use config::RootConfig;
pub use container::ContainerState;
pub use control::{Control, ControlState, DrawCx, EventCx, Panel};
pub use event::{EventResult, HandleStatus, InputEvent, Key, KeyEvent, Modifiers, PointerEvent, WheelEvent};
pub use flags::ControlFlags;
pub use id::ControlId;
pub use layout::{
    AbsoluteLayout, Alignment, BorderLayout, GridLayout, Layout, LayoutHint, LayoutItem,
    LinearLayout, Region,
};
pub use options::{OptionError, OptionResult, OptionValue};
pub use root_panel::RootPanel;

pub use palisade_core::{Color, Dimension, Insets, Point, Rect, Surface};

/// Everything needed to build and drive a control tree.
pub mod prelude {
    pub use crate::control::base;
    pub use crate::{
        AbsoluteLayout, Alignment, BorderLayout, Color, Control, ControlId, ControlState,
        Dimension, DrawCx, EventCx, EventResult, GridLayout, HandleStatus, InputEvent, Insets,
        Key, KeyEvent, Layout, LayoutHint, LinearLayout, Modifiers, OptionValue, Panel, Point,
        PointerEvent, Rect, Region, RootConfig, RootPanel, Surface, WheelEvent,
    };
}
