//! Control handles.

use palisade_core::alloc::IndexSlot;
use std::fmt;

/// Handle to a control living in a [`RootPanel`](crate::RootPanel)'s arena.
///
/// Handles are generational: once a control is destroyed its handle stops
/// resolving, even if the slot is reused by a new control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub(crate) IndexSlot);

impl ControlId {
    pub(crate) fn slot(self) -> IndexSlot {
        self.0
    }

    /// Raw packed value (generation and slot index).
    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0.index(), self.0.generation())
    }
}
