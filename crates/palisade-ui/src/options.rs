//! Named option values used by declarative builders.
//!
//! A markup-to-tree builder only knows option names and loosely typed values.
//! [`RootPanel::set_option`](crate::RootPanel::set_option) routes each name to
//! the control base, the widget, and finally the container's layout.

use palisade_core::Color;
use palisade_core::geometry::Insets;
use std::fmt;

/// Loosely typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f32),
    Text(String),
    Insets(Insets),
    Color(Color),
}

impl OptionValue {
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Number(_) => "number",
            OptionValue::Text(_) => "text",
            OptionValue::Insets(_) => "insets",
            OptionValue::Color(_) => "color",
        }
    }

    pub fn as_bool(&self, name: &str) -> Result<bool, OptionError> {
        match self {
            OptionValue::Bool(b) => Ok(*b),
            other => Err(OptionError::type_mismatch(name, "bool", other)),
        }
    }

    /// Numbers must be finite.
    pub fn as_number(&self, name: &str) -> Result<f32, OptionError> {
        match self {
            OptionValue::Number(n) if n.is_finite() => Ok(*n),
            OptionValue::Number(_) => Err(OptionError::InvalidValue {
                name: name.to_string(),
                value: format!("{:?}", self),
            }),
            other => Err(OptionError::type_mismatch(name, "number", other)),
        }
    }

    /// Finite and non-negative.
    pub fn as_length(&self, name: &str) -> Result<f32, OptionError> {
        let n = self.as_number(name)?;
        if n < 0.0 {
            return Err(OptionError::InvalidValue {
                name: name.to_string(),
                value: n.to_string(),
            });
        }
        Ok(n)
    }

    pub fn as_text(&self, name: &str) -> Result<&str, OptionError> {
        match self {
            OptionValue::Text(s) => Ok(s),
            other => Err(OptionError::type_mismatch(name, "text", other)),
        }
    }

    /// Accepts a single number (all edges) or explicit insets.
    pub fn as_insets(&self, name: &str) -> Result<Insets, OptionError> {
        let insets = match self {
            OptionValue::Insets(insets) => *insets,
            OptionValue::Number(_) => Insets::uniform(self.as_length(name)?),
            other => return Err(OptionError::type_mismatch(name, "insets", other)),
        };
        if !insets.is_valid() {
            return Err(OptionError::InvalidValue {
                name: name.to_string(),
                value: format!("{:?}", insets),
            });
        }
        Ok(insets)
    }

    /// Accepts a color or a hex string.
    pub fn as_color(&self, name: &str) -> Result<Color, OptionError> {
        match self {
            OptionValue::Color(c) => Ok(*c),
            OptionValue::Text(s) => Color::from_hex(s).ok_or_else(|| OptionError::InvalidValue {
                name: name.to_string(),
                value: s.clone(),
            }),
            other => Err(OptionError::type_mismatch(name, "color", other)),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Number(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value as f32)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Insets> for OptionValue {
    fn from(value: Insets) -> Self {
        OptionValue::Insets(value)
    }
}

impl From<Color> for OptionValue {
    fn from(value: Color) -> Self {
        OptionValue::Color(value)
    }
}

/// Configuration errors raised while applying named options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// No handler recognized the option name.
    UnknownOption(String),
    /// The value has the wrong kind for this option.
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The value has the right kind but is out of range or unrecognized.
    InvalidValue { name: String, value: String },
}

impl OptionError {
    pub fn unknown(name: &str) -> Self {
        OptionError::UnknownOption(name.to_string())
    }

    fn type_mismatch(name: &str, expected: &'static str, found: &OptionValue) -> Self {
        OptionError::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.kind(),
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption(name) => write!(f, "Unknown option: {}", name),
            OptionError::TypeMismatch {
                name,
                expected,
                found,
            } => write!(f, "Option {} expects a {} value, got {}", name, expected, found),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value for option {}: {}", name, value)
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// Result type for option setters.
pub type OptionResult<T = ()> = Result<T, OptionError>;
