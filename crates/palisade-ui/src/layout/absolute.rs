use palisade_core::geometry::{Dimension, Rect};

use super::{Layout, LayoutItem};
use crate::id::ControlId;
use crate::options::{OptionError, OptionResult, OptionValue};

/// No automatic placement. Children keep whatever bounds they were given and
/// the preferred size is set explicitly.
#[derive(Debug, Clone, Default)]
pub struct AbsoluteLayout {
    dimension: Dimension,
}

impl AbsoluteLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(dimension: Dimension) -> Self {
        let mut layout = Self::new();
        layout.set_dimension(dimension);
        layout
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn set_dimension(&mut self, dimension: Dimension) {
        assert!(dimension.is_valid(), "invalid absolute layout dimension {}", dimension);
        self.dimension = dimension;
    }
}

impl Layout for AbsoluteLayout {
    fn name(&self) -> &'static str {
        "absolute"
    }

    fn best_dimension(&self, _items: &[LayoutItem]) -> Dimension {
        self.dimension
    }

    fn control_bounds(&self, items: &[LayoutItem], _size: Dimension) -> Vec<(ControlId, Rect)> {
        items.iter().map(|item| (item.id, item.bounds)).collect()
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> OptionResult {
        match name {
            "best_width" => self.dimension.width = value.as_length(name)?,
            "best_height" => self.dimension.height = value.as_length(name)?,
            _ => return Err(OptionError::unknown(name)),
        }
        Ok(())
    }
}
