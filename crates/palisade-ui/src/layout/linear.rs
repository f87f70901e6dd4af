use palisade_core::geometry::{Dimension, Rect};

use super::{Alignment, Layout, LayoutItem, assert_placement};
use crate::id::ControlId;
use crate::options::{OptionError, OptionResult, OptionValue};

/// Stacking direction of a [`LinearLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Split a dimension into (main, cross) lengths.
    fn split(self, dimension: Dimension) -> (f32, f32) {
        match self {
            Axis::Horizontal => (dimension.width, dimension.height),
            Axis::Vertical => (dimension.height, dimension.width),
        }
    }

    fn rect(self, main_pos: f32, cross_pos: f32, main_len: f32, cross_len: f32) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(main_pos, cross_pos, main_len, cross_len),
            Axis::Vertical => Rect::new(cross_pos, main_pos, cross_len, main_len),
        }
    }

    fn dimension(self, main: f32, cross: f32) -> Dimension {
        match self {
            Axis::Horizontal => Dimension::new(main, cross),
            Axis::Vertical => Dimension::new(cross, main),
        }
    }
}

/// Stacks children along one axis in insertion order.
///
/// ```
/// use palisade_ui::layout::{Alignment, LinearLayout};
///
/// let layout = LinearLayout::vertical()
///     .with_padding(5.0)
///     .with_halign(Alignment::Center);
/// assert_eq!(layout.padding(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearLayout {
    axis: Axis,
    margin: f32,
    padding: f32,
    halign: Alignment,
    valign: Alignment,
    expand: bool,
    same_size: bool,
}

impl LinearLayout {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            margin: 0.0,
            padding: 0.0,
            halign: Alignment::Start,
            valign: Alignment::Start,
            expand: false,
            same_size: false,
        }
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        assert!(margin.is_finite() && margin >= 0.0, "invalid margin {}", margin);
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        assert!(padding.is_finite() && padding >= 0.0, "invalid padding {}", padding);
        self.padding = padding;
        self
    }

    pub fn with_halign(mut self, align: Alignment) -> Self {
        self.halign = align;
        self
    }

    pub fn with_valign(mut self, align: Alignment) -> Self {
        self.valign = align;
        self
    }

    /// Children fill the cross axis. Implies same-size.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.set_expand(expand);
        self
    }

    pub fn with_same_size(mut self, same_size: bool) -> Self {
        self.same_size = same_size;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn expand(&self) -> bool {
        self.expand
    }

    pub fn same_size(&self) -> bool {
        self.same_size
    }

    fn set_expand(&mut self, expand: bool) {
        self.expand = expand;
        if expand {
            self.same_size = true;
        }
    }

    /// (main-axis, cross-axis) alignment.
    fn alignments(&self) -> (Alignment, Alignment) {
        match self.axis {
            Axis::Horizontal => (self.halign, self.valign),
            Axis::Vertical => (self.valign, self.halign),
        }
    }

    fn gaps(&self, count: usize) -> f32 {
        count.saturating_sub(1) as f32 * self.padding
    }
}

impl Layout for LinearLayout {
    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }

    fn best_dimension(&self, items: &[LayoutItem]) -> Dimension {
        let (main, cross) = items.iter().fold((0.0f32, 0.0f32), |(main, cross), item| {
            let (m, c) = self.axis.split(item.best);
            (main + m, cross.max(c))
        });
        let margins = 2.0 * self.margin;
        self.axis
            .dimension(main + self.gaps(items.len()) + margins, cross + margins)
    }

    fn control_bounds(&self, items: &[LayoutItem], size: Dimension) -> Vec<(ControlId, Rect)> {
        let (size_main, size_cross) = self.axis.split(size);
        let (best_main, _) = self.axis.split(self.best_dimension(items));
        let (main_align, cross_align) = self.alignments();

        let usable_cross = (size_cross - 2.0 * self.margin).max(0.0);
        let max_cross = items
            .iter()
            .map(|item| self.axis.split(item.best).1)
            .fold(0.0f32, f32::max);
        let main_end = (size_main - self.margin).max(0.0);

        let mut cursor = (self.margin + main_align.offset(size_main - best_main)).max(0.0);
        let mut placed = Vec::with_capacity(items.len());
        for item in items {
            let (pref_main, pref_cross) = self.axis.split(item.best);
            let main_len = pref_main.min((main_end - cursor).max(0.0));
            let cross_len = if self.expand {
                usable_cross
            } else if self.same_size {
                max_cross
            } else {
                pref_cross
            };
            let cross_pos =
                (self.margin + cross_align.offset(usable_cross - cross_len)).max(0.0);

            let rect = self.axis.rect(cursor, cross_pos, main_len, cross_len);
            assert_placement(self.name(), item.id, rect);
            placed.push((item.id, rect));
            cursor += main_len + self.padding;
        }
        placed
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> OptionResult {
        match name {
            "margin" => self.margin = value.as_length(name)?,
            "padding" => self.padding = value.as_length(name)?,
            "halign" => self.halign = Alignment::from_option(name, value)?,
            "valign" => self.valign = Alignment::from_option(name, value)?,
            "expand" => self.set_expand(value.as_bool(name)?),
            "same_size" => self.same_size = value.as_bool(name)?,
            _ => return Err(OptionError::unknown(name)),
        }
        Ok(())
    }
}
