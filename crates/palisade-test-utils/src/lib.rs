//! Test utilities for the Palisade toolkit.
//!
//! The main component is [`MockSurface`], a [`Surface`] that draws nothing
//! and records every call so tests can assert on paint order, clipping and
//! whether a frame was drawn at all.
//!
//! # Example
//!
//! ```rust
//! use palisade_core::{Color, Rect, Surface};
//! use palisade_test_utils::{MockSurface, SurfaceCall};
//!
//! let mut surface = MockSurface::new(100.0, 50.0);
//! surface.save();
//! surface.translate(10.0, 5.0);
//! surface.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE);
//! surface.restore();
//!
//! assert_eq!(surface.fills(), vec![(Rect::new(10.0, 5.0, 4.0, 4.0), Color::WHITE)]);
//! assert!(surface.is_balanced());
//! assert_eq!(surface.calls()[0], SurfaceCall::Save);
//! ```

mod mock_surface;

pub use mock_surface::*;
