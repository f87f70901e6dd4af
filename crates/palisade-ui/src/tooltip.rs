//! Hover delay before a control's tooltip is shown.

use std::time::Duration;

use crate::id::ControlId;

/// Countdown armed while the pointer rests on a control that has a tooltip.
#[derive(Debug, Clone, Default)]
pub(crate) struct HoverTimer {
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    owner: ControlId,
    remaining: Duration,
}

impl HoverTimer {
    /// Arm (or re-arm) the countdown for `owner`.
    pub fn start(&mut self, owner: ControlId, delay: Duration) {
        self.armed = Some(Armed {
            owner,
            remaining: delay,
        });
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn owner(&self) -> Option<ControlId> {
        self.armed.map(|a| a.owner)
    }

    /// Advance by `dt`. Returns the owner once, when the delay runs out.
    pub fn advance(&mut self, dt: Duration) -> Option<ControlId> {
        let armed = self.armed.as_mut()?;
        armed.remaining = armed.remaining.saturating_sub(dt);
        if armed.remaining.is_zero() {
            let owner = armed.owner;
            self.armed = None;
            return Some(owner);
        }
        None
    }
}

/// A tooltip currently displayed as a floating control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShownTooltip {
    pub owner: ControlId,
    pub control: ControlId,
}
