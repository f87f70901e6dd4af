//! Named option routing for declarative builders.

use super::RootPanel;
use crate::id::ControlId;
use crate::options::{OptionError, OptionResult, OptionValue};
use crate::tree::ControlNode;

impl RootPanel {
    /// Apply a named option to `id`.
    ///
    /// Names the kernel knows are handled first, then the widget's own
    /// options, then (for containers) the layout's.
    pub fn set_option(&mut self, id: ControlId, name: &str, value: &OptionValue) -> OptionResult {
        let mut bounds = self.bounds(id);
        match name {
            "id" => self.state_mut(id).set_id(value.as_text(name)?),
            "x" => {
                bounds.x = value.as_number(name)?;
                self.set_bounds(id, bounds);
            }
            "y" => {
                bounds.y = value.as_number(name)?;
                self.set_bounds(id, bounds);
            }
            "width" => {
                bounds.width = value.as_length(name)?;
                self.set_bounds(id, bounds);
            }
            "height" => {
                bounds.height = value.as_length(name)?;
                self.set_bounds(id, bounds);
            }
            "visible" => self.set_visible(id, value.as_bool(name)?),
            "enabled" => self.set_enabled(id, value.as_bool(name)?),
            "transparent" => self.set_transparent(id, value.as_bool(name)?),
            "topmost" => self.set_topmost(id, value.as_bool(name)?),
            "focusable" => self.state_mut(id).set_focusable(value.as_bool(name)?),
            "cursor" => {
                let cursor = value.as_text(name)?.to_string();
                self.state_mut(id).set_cursor(Some(cursor));
            }
            "font" => {
                let font = value.as_text(name)?.to_string();
                self.state_mut(id).set_font(Some(font));
            }
            "border" => {
                let borders = value.as_insets(name)?;
                self.state_mut(id).set_borders(borders);
            }
            "border_color" => {
                let color = value.as_color(name)?;
                self.state_mut(id).set_border_color(color);
            }
            _ => return self.set_extended_option(id, name, value),
        }
        Ok(())
    }

    fn set_extended_option(&mut self, id: ControlId, name: &str, value: &OptionValue) -> OptionResult {
        let ControlNode {
            state,
            widget,
            container,
        } = self.tree.node_mut(id);
        let mut result = widget.set_option(state, name, value);
        if matches!(result, Err(OptionError::UnknownOption(_))) {
            if let Some(container) = container {
                result = container.layout.set_option(name, value);
            }
        }
        if result.is_ok() {
            self.redraw(id);
            self.relayout(id);
        } else {
            tracing::debug!(control = %id, option = name, "option rejected");
        }
        result
    }

    /// Like [`RootPanel::set_option`] but panics on a bad option.
    pub fn option(&mut self, id: ControlId, name: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        if let Err(err) = self.set_option(id, name, &value) {
            panic!("option {} on control {}: {}", name, id, err);
        }
    }
}
