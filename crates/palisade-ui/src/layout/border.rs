use std::fmt;

use palisade_core::alloc::HashMap;
use palisade_core::geometry::{Dimension, Rect};

use super::{Layout, LayoutHint, LayoutItem, assert_placement};
use crate::id::ControlId;
use crate::options::{OptionError, OptionResult, OptionValue};

/// The five slots of a [`BorderLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Top,
    Right,
    Bottom,
    Left,
    Center,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Top,
        Region::Right,
        Region::Bottom,
        Region::Left,
        Region::Center,
    ];

    fn index(self) -> usize {
        match self {
            Region::Top => 0,
            Region::Right => 1,
            Region::Bottom => 2,
            Region::Left => 3,
            Region::Center => 4,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top" | "north" => Some(Region::Top),
            "right" | "east" => Some(Region::Right),
            "bottom" | "south" => Some(Region::Bottom),
            "left" | "west" => Some(Region::Left),
            "center" => Some(Region::Center),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Top => "top",
            Region::Right => "right",
            Region::Bottom => "bottom",
            Region::Left => "left",
            Region::Center => "center",
        };
        f.write_str(name)
    }
}

/// Splits an overflow between two opposing sides.
///
/// With both sides present the first (left/top) gets the floor of half the
/// excess and the second gets the rest, so whole-pixel excesses stay whole.
fn split_excess(excess: f32, first: bool, second: bool) -> (f32, f32) {
    match (first, second) {
        (true, true) => {
            let half = (excess / 2.0).floor();
            (half, excess - half)
        }
        (true, false) => (excess, 0.0),
        (false, true) => (0.0, excess),
        (false, false) => (0.0, 0.0),
    }
}

/// At most one child in each of five regions. The center takes whatever
/// space the sides leave.
#[derive(Debug, Clone, Default)]
pub struct BorderLayout {
    margin: f32,
    padding: f32,
    regions: HashMap<ControlId, Region>,
    slots: [Option<ControlId>; 5],
}

impl BorderLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        assert!(margin.is_finite() && margin >= 0.0, "invalid margin {}", margin);
        self.margin = margin;
        self
    }

    /// Gap between an occupied side and an occupied center.
    pub fn with_padding(mut self, padding: f32) -> Self {
        assert!(padding.is_finite() && padding >= 0.0, "invalid padding {}", padding);
        self.padding = padding;
        self
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn occupant(&self, region: Region) -> Option<ControlId> {
        self.slots[region.index()]
    }

    pub fn region_of(&self, id: ControlId) -> Option<Region> {
        self.regions.get(&id).copied()
    }

    fn find<'a>(&self, items: &'a [LayoutItem], region: Region) -> Option<&'a LayoutItem> {
        let id = self.occupant(region)?;
        items.iter().find(|item| item.id == id)
    }
}

impl Layout for BorderLayout {
    fn name(&self) -> &'static str {
        "border"
    }

    fn best_dimension(&self, items: &[LayoutItem]) -> Dimension {
        let best = |region| {
            self.find(items, region)
                .map(|item| item.best)
                .unwrap_or(Dimension::ZERO)
        };
        let (top, right, bottom, left, center) = (
            best(Region::Top),
            best(Region::Right),
            best(Region::Bottom),
            best(Region::Left),
            best(Region::Center),
        );
        let has = |region| self.occupant(region).is_some();
        let has_center = has(Region::Center);
        let pad = |side| if has_center && has(side) { self.padding } else { 0.0 };

        let middle_width = left.width
            + pad(Region::Left)
            + center.width
            + pad(Region::Right)
            + right.width;
        let width = middle_width.max(top.width).max(bottom.width);
        let height = top.height
            + pad(Region::Top)
            + center.height.max(left.height).max(right.height)
            + pad(Region::Bottom)
            + bottom.height;

        let margins = 2.0 * self.margin;
        Dimension::new(width + margins, height + margins)
    }

    fn control_bounds(&self, items: &[LayoutItem], size: Dimension) -> Vec<(ControlId, Rect)> {
        let m = self.margin;
        let inner_w = (size.width - 2.0 * m).max(0.0);
        let inner_h = (size.height - 2.0 * m).max(0.0);

        let top = self.find(items, Region::Top);
        let right = self.find(items, Region::Right);
        let bottom = self.find(items, Region::Bottom);
        let left = self.find(items, Region::Left);
        let center = self.find(items, Region::Center);
        let pad = |side: Option<&LayoutItem>| {
            if center.is_some() && side.is_some() {
                self.padding
            } else {
                0.0
            }
        };
        let (pad_top, pad_bottom) = (pad(top), pad(bottom));
        let (pad_left, pad_right) = (pad(left), pad(right));

        let mut top_h = top.map_or(0.0, |t| t.best.height.min(inner_h));
        let mut bottom_h = bottom.map_or(0.0, |b| b.best.height.min((inner_h - top_h).max(0.0)));
        let mut left_w = left.map_or(0.0, |l| l.best.width.min(inner_w));
        let mut right_w = right.map_or(0.0, |r| r.best.width.min((inner_w - left_w).max(0.0)));

        let mut middle_h = (inner_h - top_h - bottom_h - pad_top - pad_bottom).max(0.0);
        let mut center_w = (inner_w - left_w - right_w - pad_left - pad_right).max(0.0);

        if let Some(max) = center.and_then(|c| c.maximum) {
            if center_w > max.width && (left.is_some() || right.is_some()) {
                let (l, r) = split_excess(center_w - max.width, left.is_some(), right.is_some());
                left_w += l;
                right_w += r;
                center_w = max.width;
            }
            if middle_h > max.height && (top.is_some() || bottom.is_some()) {
                let (t, b) = split_excess(middle_h - max.height, top.is_some(), bottom.is_some());
                top_h += t;
                bottom_h += b;
                middle_h = max.height;
            }
        }

        let middle_y = m + top_h + pad_top;
        let center_x = m + left_w + pad_left;
        let mut placed = Vec::with_capacity(items.len());
        let mut place = |item: Option<&LayoutItem>, rect: Rect| {
            if let Some(item) = item {
                assert_placement(self.name(), item.id, rect);
                placed.push((item.id, rect));
            }
        };
        place(top, Rect::new(m, m, inner_w, top_h));
        place(left, Rect::new(m, middle_y, left_w, middle_h));
        place(center, Rect::new(center_x, middle_y, center_w, middle_h));
        place(
            right,
            Rect::new(center_x + center_w + pad_right, middle_y, right_w, middle_h),
        );
        place(
            bottom,
            Rect::new(m, middle_y + middle_h + pad_bottom, inner_w, bottom_h),
        );
        placed
    }

    fn add(&mut self, id: ControlId, hint: LayoutHint) {
        let LayoutHint::Region(region) = hint else {
            panic!("border layout needs a region hint for control {}", id);
        };
        if let Some(existing) = self.slots[region.index()] {
            panic!(
                "border layout region {} is already taken by control {} (adding {})",
                region, existing, id
            );
        }
        self.slots[region.index()] = Some(id);
        self.regions.insert(id, region);
    }

    fn remove(&mut self, id: ControlId) {
        if let Some(region) = self.regions.remove(&id) {
            self.slots[region.index()] = None;
        }
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> OptionResult {
        match name {
            "margin" => self.margin = value.as_length(name)?,
            "padding" => self.padding = value.as_length(name)?,
            _ => return Err(OptionError::unknown(name)),
        }
        Ok(())
    }
}
