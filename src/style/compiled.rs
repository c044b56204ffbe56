//! Compiled style output: canonical property names mapped to concrete values.
//!
//! A [`CompiledStyle`] never holds CSS shorthand strings and every absolute
//! length is a plain number. Gradients travel in a side channel next to the
//! property map because the target style model has no gradient property.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::value::coerce::format_number;

// ---------------------------------------------------------------------------
// StyleValue
// ---------------------------------------------------------------------------

/// A concrete, renderable style value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A length or other numeric value.
    Number(f64),
    /// An enumerated keyword, color, or relative length such as `50%`.
    Text(String),
    /// A keyword list (e.g. `fontVariant`).
    List(Vec<String>),
    /// A 2D offset (e.g. `shadowOffset`).
    Offset { width: f64, height: f64 },
    /// A value passed through untouched.
    Json(Value),
}

impl StyleValue {
    /// The numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", format_number(*n)),
            StyleValue::Text(s) => write!(f, "{s}"),
            StyleValue::List(items) => write!(f, "{}", items.join(" ")),
            StyleValue::Offset { width, height } => {
                write!(f, "{} {}", format_number(*width), format_number(*height))
            }
            StyleValue::Json(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Gradient
// ---------------------------------------------------------------------------

/// Gradient kind. Only linear gradients are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
}

/// Gradient descriptor extracted from a `background` value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Gradient {
    /// Color stops in order, without stop positions.
    pub colors: Vec<String>,
    /// Angle in degrees (CSS convention: 0 points up, 90 points right).
    pub angle: f64,
    #[serde(rename = "type")]
    pub kind: GradientKind,
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {})",
            format_number(self.angle),
            self.colors.join(", ")
        )
    }
}

// ---------------------------------------------------------------------------
// CompiledStyle
// ---------------------------------------------------------------------------

/// Canonical style object handed to renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledStyle {
    properties: BTreeMap<String, StyleValue>,
    gradient: Option<Gradient>,
}

impl CompiledStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value.
    pub fn insert(&mut self, property: impl Into<String>, value: StyleValue) {
        self.properties.insert(property.into(), value);
    }

    /// Remove a property.
    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.properties.remove(property)
    }

    /// Look up a property.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Look up a numeric property.
    pub fn number(&self, property: &str) -> Option<f64> {
        self.get(property).and_then(StyleValue::as_f64)
    }

    /// Look up a text property.
    pub fn text(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Number of properties (the gradient is not counted).
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` when neither properties nor a gradient are set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.gradient.is_none()
    }

    /// Iterate properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn gradient(&self) -> Option<&Gradient> {
        self.gradient.as_ref()
    }

    pub fn set_gradient(&mut self, gradient: Gradient) {
        self.gradient = Some(gradient);
    }

    /// Overlay `other` on top of `self`; properties in `other` win.
    pub fn merge(&mut self, other: CompiledStyle) {
        self.properties.extend(other.properties);
        if other.gradient.is_some() {
            self.gradient = other.gradient;
        }
    }

    /// Flatten into a JSON object, gradient under the `gradient` key.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for CompiledStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.properties.len() + usize::from(self.gradient.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.properties {
            map.serialize_entry(key, value)?;
        }
        if let Some(gradient) = &self.gradient {
            map.serialize_entry("gradient", gradient)?;
        }
        map.end()
    }
}

impl fmt::Display for CompiledStyle {
    /// One `property: value;` line per property, gradient last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.properties {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{key}: {value};")?;
        }
        if let Some(gradient) = &self.gradient {
            if !first {
                writeln!(f)?;
            }
            write!(f, "gradient: {gradient};")?;
        }
        Ok(())
    }
}
