//! Root panel configuration.

use std::time::Duration;

use palisade_core::Color;
use palisade_core::math::Vec2;

/// Tunables for a [`RootPanel`](crate::RootPanel).
#[derive(Debug, Clone)]
pub struct RootConfig {
    /// Hover time before a control's tooltip is shown.
    pub tooltip_delay: Duration,
    /// Tooltip placement relative to the pointer when no explicit position is given.
    pub tooltip_offset: Vec2,
    /// Cursor reported when neither the captured nor the hovered control names one.
    pub default_cursor: String,
    /// Color of the outline stroked around the whole surface.
    pub outline_color: Color,
    /// Width of the surface outline. Zero disables it.
    pub outline_width: f32,
    /// Maximum time between two presses that still counts as a double-click.
    pub double_click_interval: Duration,
    /// Maximum pointer travel between two presses of a double-click.
    pub double_click_distance: f32,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            tooltip_delay: Duration::from_millis(300),
            tooltip_offset: Vec2::new(0.0, 16.0),
            default_cursor: "default".to_string(),
            outline_color: Color::GRAY,
            outline_width: 1.0,
            double_click_interval: Duration::from_millis(500),
            double_click_distance: 4.0,
        }
    }
}

impl RootConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tooltip_delay(mut self, delay: Duration) -> Self {
        self.tooltip_delay = delay;
        self
    }

    pub fn with_tooltip_offset(mut self, offset: Vec2) -> Self {
        self.tooltip_offset = offset;
        self
    }

    pub fn with_default_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.default_cursor = cursor.into();
        self
    }

    pub fn with_outline(mut self, color: Color, width: f32) -> Self {
        assert!(
            width.is_finite() && width >= 0.0,
            "outline width must be finite and non-negative, got {}",
            width
        );
        self.outline_color = color;
        self.outline_width = width;
        self
    }

    pub fn with_double_click(mut self, interval: Duration, distance: f32) -> Self {
        self.double_click_interval = interval;
        self.double_click_distance = distance;
        self
    }
}
