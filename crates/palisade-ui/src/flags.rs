//! Per-control state flags.

use bitflags::bitflags;

bitflags! {
    /// Boolean state carried by every control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        /// Painted and hit-tested.
        const VISIBLE     = 0b0000_0001;
        /// Own enablement flag. Effective enablement also needs every ancestor enabled.
        const ENABLED     = 0b0000_0010;
        /// Skipped by hit-testing unless transparent controls are explicitly included.
        /// Not inherited by children.
        const TRANSPARENT = 0b0000_0100;
        /// Needs repaint on the next draw pass.
        const DIRTY       = 0b0000_1000;
        /// Resists being reordered below other siblings.
        const TOPMOST     = 0b0001_0000;
        /// Accepts keyboard focus.
        const FOCUSABLE   = 0b0010_0000;
    }
}

impl ControlFlags {
    /// Flags of a freshly created control.
    pub const DEFAULT: Self = Self::VISIBLE.union(Self::ENABLED).union(Self::DIRTY);
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}
