//! Layout strategies.
//!
//! A container owns exactly one [`Layout`]. Each pass the root panel builds a
//! [`LayoutItem`] per child (in insertion order) and asks the layout for the
//! container's preferred size or for concrete child bounds at its current
//! size. Layouts keep no per-pass state, only their options and whatever
//! per-child metadata `add`/`remove` register.

mod absolute;
mod border;
mod grid;
mod linear;

use std::any::Any;
use std::fmt;

use palisade_core::geometry::{Dimension, Rect};

use crate::id::ControlId;
use crate::options::{OptionError, OptionResult, OptionValue};

pub use absolute::AbsoluteLayout;
pub use border::{BorderLayout, Region};
pub use grid::GridLayout;
pub use linear::{Axis, LinearLayout};

/// What a layout sees of one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutItem {
    pub id: ControlId,
    pub best: Dimension,
    pub maximum: Option<Dimension>,
    /// Current bounds, relative to the container's content origin.
    pub bounds: Rect,
}

/// Layout-specific placement hint given when a child is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutHint {
    #[default]
    None,
    Region(Region),
}

impl From<Region> for LayoutHint {
    fn from(region: Region) -> Self {
        LayoutHint::Region(region)
    }
}

/// Placement of a stack or a child along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left or top.
    #[default]
    Start,
    Center,
    /// Right or bottom.
    End,
}

impl Alignment {
    /// Offset of an item inside `free` pixels of slack.
    pub fn offset(self, free: f32) -> f32 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => free / 2.0,
            Alignment::End => free,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "left" | "top" | "start" => Some(Alignment::Start),
            "center" | "middle" => Some(Alignment::Center),
            "right" | "bottom" | "end" => Some(Alignment::End),
            _ => None,
        }
    }

    pub(crate) fn from_option(name: &str, value: &OptionValue) -> Result<Self, OptionError> {
        let text = value.as_text(name)?;
        Self::parse(text).ok_or_else(|| OptionError::InvalidValue {
            name: name.to_string(),
            value: text.to_string(),
        })
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Start => write!(f, "start"),
            Alignment::Center => write!(f, "center"),
            Alignment::End => write!(f, "end"),
        }
    }
}

/// Geometry strategy of a container.
#[allow(unused_variables)]
pub trait Layout: Any {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Preferred container size for these children.
    fn best_dimension(&self, items: &[LayoutItem]) -> Dimension;

    /// Bounds of every managed child for a container of `size`.
    fn control_bounds(&self, items: &[LayoutItem], size: Dimension) -> Vec<(ControlId, Rect)>;

    /// A child was added. Panics if the hint is unusable for this layout.
    fn add(&mut self, id: ControlId, hint: LayoutHint) {}

    fn remove(&mut self, id: ControlId) {}

    fn set_option(&mut self, name: &str, value: &OptionValue) -> OptionResult {
        Err(OptionError::unknown(name))
    }
}

/// Validity check shared by every layout.
pub(crate) fn assert_placement(layout: &str, id: ControlId, rect: Rect) {
    assert!(
        rect.is_valid() && rect.x >= 0.0 && rect.y >= 0.0,
        "{} layout produced invalid bounds {} for control {}",
        layout,
        rect,
        id
    );
}
