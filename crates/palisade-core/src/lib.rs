//! Palisade Core
//!
//! Value types and shared plumbing for the Palisade widget toolkit: geometry,
//! colors, the drawing-surface contract, arena storage, logging and profiling.

pub mod alloc;
pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
pub mod surface;

pub use color::Color;
pub use geometry::{Dimension, Insets, Point, Rect};
pub use surface::Surface;
