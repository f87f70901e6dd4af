use palisade_core::geometry::Dimension;
use palisade_core::{Color, Surface};

use super::{Control, ControlState, DrawCx};
use crate::options::{OptionError, OptionResult, OptionValue};

/// Plain control with an optional background fill.
///
/// Used as the root panel's own widget and as the widget of generic
/// containers that only exist to lay out their children.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    background: Option<Color>,
    preferred: Dimension,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Preferred size reported when used as a leaf.
    pub fn with_preferred(mut self, preferred: Dimension) -> Self {
        assert!(preferred.is_valid(), "invalid preferred dimension {}", preferred);
        self.preferred = preferred;
        self
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl Control for Panel {
    fn best_dimension(&self, _state: &ControlState) -> Dimension {
        self.preferred
    }

    fn draw_background(&mut self, cx: &mut DrawCx<'_>, surface: &mut dyn Surface) {
        if let Some(color) = self.background {
            surface.fill_rect(cx.local_bounds(), color);
        }
    }

    fn set_option(
        &mut self,
        state: &mut ControlState,
        name: &str,
        value: &OptionValue,
    ) -> OptionResult {
        match name {
            "background" => {
                self.background = Some(value.as_color(name)?);
                state.redraw();
                Ok(())
            }
            _ => Err(OptionError::unknown(name)),
        }
    }
}
