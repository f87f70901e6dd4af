/// Vector math re-exported from [`glam`].
///
/// The toolkit only needs 2D points and offsets, so [`Vec2`] is the type you
/// will see throughout the public API.
///
/// ```
/// use palisade_core::math::Vec2;
///
/// let cursor = Vec2::new(10.0, 20.0);
/// let local = cursor - Vec2::new(4.0, 4.0);
/// assert_eq!(local, Vec2::new(6.0, 16.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub use glam::{Vec2, vec2};
