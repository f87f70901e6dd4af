//! Keyboard focus traversal.

use super::RootPanel;
use crate::id::ControlId;

impl RootPanel {
    /// Visible, enabled controls that accept focus, depth-first in insertion
    /// order. Floating controls come after the regular tree.
    pub fn focus_order(&self) -> Vec<ControlId> {
        let mut order = Vec::new();
        self.collect_focusable(self.root, &mut order);
        for &id in self.floating.keys() {
            self.collect_focusable(id, &mut order);
        }
        order
    }

    fn collect_focusable(&self, id: ControlId, order: &mut Vec<ControlId>) {
        let node = self.tree.node(id);
        if !node.state.is_visible() || !node.state.is_self_enabled() {
            return;
        }
        if node.widget.accepts_focus(&node.state) {
            order.push(id);
        }
        for &child in self.tree.children(id) {
            self.collect_focusable(child, order);
        }
    }

    /// Focus the next control in [`RootPanel::focus_order`], wrapping around.
    pub fn focus_next(&mut self) -> Option<ControlId> {
        self.cycle_focus(true)
    }

    /// Focus the previous control in [`RootPanel::focus_order`], wrapping around.
    pub fn focus_previous(&mut self) -> Option<ControlId> {
        self.cycle_focus(false)
    }

    fn cycle_focus(&mut self, forward: bool) -> Option<ControlId> {
        let order = self.focus_order();
        if order.is_empty() {
            return self.focused;
        }
        let len = order.len();
        let current = self
            .focused
            .and_then(|focused| order.iter().position(|&id| id == focused));
        let next = match (current, forward) {
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.set_focus(Some(order[next]));
        self.focused
    }
}
