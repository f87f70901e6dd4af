//! The drawing contract between the control tree and a 2D backend.
//!
//! The kernel only needs a handful of primitives: state save/restore,
//! translation, clipping, clearing and rectangle fill/stroke. Everything a
//! concrete widget draws beyond that is its own business with its backend.
//!
//! The trait is object-safe so controls can draw through `&mut dyn Surface`.

use crate::color::Color;
use crate::geometry::{Dimension, Rect};

/// An opaque 2D drawing context.
pub trait Surface {
    /// Size of the drawable area in logical pixels.
    fn size(&self) -> Dimension;

    /// Push the current transform and clip.
    fn save(&mut self);

    /// Pop the transform and clip pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    /// Move the drawing origin.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Intersect the clip region with `rect` (current coordinates).
    fn clip(&mut self, rect: Rect);

    /// Reset `rect` to the backend's background.
    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline `rect` with a line of `line_width` pixels.
    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color);

    /// Whole drawable area as a rectangle at the origin.
    fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(0.0, 0.0, size.width, size.height)
    }
}
