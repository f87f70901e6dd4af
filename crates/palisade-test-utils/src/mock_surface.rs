//! Recording implementation of [`Surface`].

use palisade_core::geometry::{Dimension, Point, Rect};
use palisade_core::{Color, Surface};

/// Records a drawing call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Clip(Rect),
    Clear(Rect),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, line_width: f32, color: Color },
}

#[derive(Debug, Clone, Copy)]
struct SavedState {
    offset: Point,
    clip: Option<Rect>,
}

/// A surface that records calls and tracks the current transform.
///
/// Besides the raw call log it keeps the absolute position of every filled
/// rectangle, which is usually what a layout or paint-order test wants.
#[derive(Debug, Clone)]
pub struct MockSurface {
    size: Dimension,
    calls: Vec<SurfaceCall>,
    offset: Point,
    clip: Option<Rect>,
    stack: Vec<SavedState>,
    fills: Vec<(Rect, Color)>,
    unbalanced_restores: usize,
}

impl MockSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Dimension::new(width, height),
            calls: Vec::new(),
            offset: Point::ZERO,
            clip: None,
            stack: Vec::new(),
            fills: Vec::new(),
            unbalanced_restores: 0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Dimension::new(width, height);
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Forget recorded calls and fills, keeping the current transform.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.fills.clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn count(&self, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    /// Filled rectangles in absolute coordinates, in paint order.
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.fills.clone()
    }

    /// Absolute rectangles filled with `color`, in paint order.
    pub fn fills_with(&self, color: Color) -> Vec<Rect> {
        self.fills
            .iter()
            .filter(|(_, c)| *c == color)
            .map(|(r, _)| *r)
            .collect()
    }

    /// Current translation relative to the surface origin.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Current clip in absolute coordinates.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Every save was matched by a restore.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.unbalanced_restores == 0
    }
}

fn intersect(a: Rect, b: Rect) -> Rect {
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    Rect::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
}

impl Surface for MockSurface {
    fn size(&self) -> Dimension {
        self.size
    }

    fn save(&mut self) {
        self.calls.push(SurfaceCall::Save);
        self.stack.push(SavedState {
            offset: self.offset,
            clip: self.clip,
        });
    }

    fn restore(&mut self) {
        self.calls.push(SurfaceCall::Restore);
        match self.stack.pop() {
            Some(saved) => {
                self.offset = saved.offset;
                self.clip = saved.clip;
            }
            None => self.unbalanced_restores += 1,
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.calls.push(SurfaceCall::Translate { dx, dy });
        self.offset += Point::new(dx, dy);
    }

    fn clip(&mut self, rect: Rect) {
        self.calls.push(SurfaceCall::Clip(rect));
        let absolute = rect.translate(self.offset);
        self.clip = Some(match self.clip {
            Some(current) => intersect(current, absolute),
            None => absolute,
        });
    }

    fn clear(&mut self, rect: Rect) {
        self.calls.push(SurfaceCall::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(SurfaceCall::FillRect { rect, color });
        self.fills.push((rect.translate(self.offset), color));
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        self.calls.push(SurfaceCall::StrokeRect {
            rect,
            line_width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_transforms() {
        let mut surface = MockSurface::new(100.0, 100.0);
        surface.save();
        surface.translate(10.0, 10.0);
        surface.clip(Rect::new(0.0, 0.0, 50.0, 50.0));
        surface.save();
        surface.translate(5.0, 5.0);
        surface.clip(Rect::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(surface.offset(), Point::new(15.0, 15.0));
        assert_eq!(surface.current_clip(), Some(Rect::new(15.0, 15.0, 45.0, 20.0)));
        surface.restore();
        assert_eq!(surface.offset(), Point::new(10.0, 10.0));
        surface.restore();
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_unbalanced_restore() {
        let mut surface = MockSurface::new(10.0, 10.0);
        surface.restore();
        assert!(!surface.is_balanced());
    }

    #[test]
    fn test_count_and_clear() {
        let mut surface = MockSurface::new(10.0, 10.0);
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        surface.clear(surface.bounds());
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::FillRect { .. })), 1);
        surface.clear_calls();
        assert_eq!(surface.call_count(), 0);
        assert!(surface.fills().is_empty());
    }
}
