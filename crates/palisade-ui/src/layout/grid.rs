use palisade_core::geometry::{Dimension, Rect};

use super::{Layout, LayoutItem, assert_placement};
use crate::id::ControlId;
use crate::options::{OptionError, OptionResult, OptionValue};

/// Row-major grid with a fixed column count and equal column widths.
#[derive(Debug, Clone)]
pub struct GridLayout {
    xcount: usize,
    margin: f32,
    hpadding: f32,
    vpadding: f32,
    same_size: bool,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GridLayout {
    pub fn new(xcount: usize) -> Self {
        assert!(xcount >= 1, "grid layout needs at least one column");
        Self {
            xcount,
            margin: 0.0,
            hpadding: 0.0,
            vpadding: 0.0,
            same_size: false,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        assert!(margin.is_finite() && margin >= 0.0, "invalid margin {}", margin);
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, hpadding: f32, vpadding: f32) -> Self {
        assert!(
            hpadding.is_finite() && hpadding >= 0.0 && vpadding.is_finite() && vpadding >= 0.0,
            "invalid grid padding {}x{}",
            hpadding,
            vpadding
        );
        self.hpadding = hpadding;
        self.vpadding = vpadding;
        self
    }

    /// Every row takes the height of the tallest child overall.
    pub fn with_same_size(mut self, same_size: bool) -> Self {
        self.same_size = same_size;
        self
    }

    pub fn xcount(&self) -> usize {
        self.xcount
    }

    fn row_heights(&self, items: &[LayoutItem]) -> Vec<f32> {
        let tallest = items.iter().map(|i| i.best.height).fold(0.0f32, f32::max);
        items
            .chunks(self.xcount)
            .map(|row| {
                if self.same_size {
                    tallest
                } else {
                    row.iter().map(|i| i.best.height).fold(0.0f32, f32::max)
                }
            })
            .collect()
    }
}

impl Layout for GridLayout {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn best_dimension(&self, items: &[LayoutItem]) -> Dimension {
        let margins = 2.0 * self.margin;
        if items.is_empty() {
            return Dimension::new(margins, margins);
        }
        let columns = self.xcount.min(items.len());
        let widest = items.iter().map(|i| i.best.width).fold(0.0f32, f32::max);
        let rows = self.row_heights(items);

        let width = columns as f32 * widest + (columns - 1) as f32 * self.hpadding;
        let height = rows.iter().sum::<f32>() + (rows.len() - 1) as f32 * self.vpadding;
        Dimension::new(width + margins, height + margins)
    }

    fn control_bounds(&self, items: &[LayoutItem], size: Dimension) -> Vec<(ControlId, Rect)> {
        let usable = (size.width - 2.0 * self.margin).max(0.0);
        let gaps = (self.xcount - 1) as f32 * self.hpadding;
        let column_width = ((usable - gaps) / self.xcount as f32).max(0.0);

        let mut placed = Vec::with_capacity(items.len());
        let mut y = self.margin;
        for (row, height) in items.chunks(self.xcount).zip(self.row_heights(items)) {
            for (column, item) in row.iter().enumerate() {
                let x = self.margin + column as f32 * (column_width + self.hpadding);
                let rect = Rect::new(x, y, column_width, height);
                assert_placement(self.name(), item.id, rect);
                placed.push((item.id, rect));
            }
            y += height + self.vpadding;
        }
        placed
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> OptionResult {
        match name {
            "xcount" => {
                let count = value.as_number(name)?;
                if count < 1.0 || count.fract() != 0.0 {
                    return Err(OptionError::InvalidValue {
                        name: name.to_string(),
                        value: count.to_string(),
                    });
                }
                self.xcount = count as usize;
            }
            "margin" => self.margin = value.as_length(name)?,
            "padding" => {
                let padding = value.as_length(name)?;
                self.hpadding = padding;
                self.vpadding = padding;
            }
            "hpadding" => self.hpadding = value.as_length(name)?,
            "vpadding" => self.vpadding = value.as_length(name)?,
            "same_size" => self.same_size = value.as_bool(name)?,
            _ => return Err(OptionError::unknown(name)),
        }
        Ok(())
    }
}
