//! Length units: parsing `12px`, `1.5em`, `50%` and converting to plain numbers.
//!
//! Lengths drop their unit suffix and keep the number as written. Only
//! `letterSpacing` scales `em` by the base font size, via [`Dimension::to_points`].

use serde_json::Value;

use crate::style::compiled::StyleValue;

/// A length unit suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Pt,
    Dp,
    Em,
    Rem,
    Percent,
    Deg,
    Vw,
    Vh,
}

impl Unit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "px" => Some(Unit::Px),
            "pt" => Some(Unit::Pt),
            "dp" => Some(Unit::Dp),
            "em" => Some(Unit::Em),
            "rem" => Some(Unit::Rem),
            "%" => Some(Unit::Percent),
            "deg" => Some(Unit::Deg),
            "vw" => Some(Unit::Vw),
            "vh" => Some(Unit::Vh),
            _ => None,
        }
    }
}

/// A number with an optional unit, e.g. `12`, `12px`, `50%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Option<Unit>,
}

impl Dimension {
    /// Parse a whole string as a dimension. Surrounding whitespace is ignored;
    /// anything else after the unit makes the parse fail.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);
        let number = number.trim_end();
        if number.is_empty() || !number.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = number.parse::<f64>().ok().filter(|v| v.is_finite())?;
        let unit = if suffix.is_empty() {
            None
        } else {
            Some(Unit::from_suffix(suffix)?)
        };
        Some(Self { value, unit })
    }

    /// Convert to an absolute number of points.
    ///
    /// Unitless, `px`, `pt` and `dp` map directly; `em`/`rem` scale by the base
    /// font size. Relative units (`%`, `vw`, `vh`) and angles have no absolute
    /// value here.
    pub fn to_points(&self, base_font_size: f64) -> Option<f64> {
        match self.unit {
            None | Some(Unit::Px) | Some(Unit::Pt) | Some(Unit::Dp) => Some(self.value),
            Some(Unit::Em) | Some(Unit::Rem) => Some(self.value * base_font_size),
            _ => None,
        }
    }

    /// Returns `true` if this is a percentage.
    pub fn is_percent(&self) -> bool {
        self.unit == Some(Unit::Percent)
    }
}

/// Lenient length conversion: numeric strings and unit-suffixed lengths
/// become numbers, everything else passes through unchanged.
pub fn length(value: &Value) -> StyleValue {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(StyleValue::Number)
            .unwrap_or_else(|| StyleValue::Json(value.clone())),
        Value::String(s) => Dimension::parse(s)
            .map(|d| StyleValue::Number(d.value))
            .unwrap_or_else(|| StyleValue::Text(s.clone())),
        other => StyleValue::Json(other.clone()),
    }
}

/// Strict conversion of one shorthand part. Only lengths and `auto` are
/// accepted.
pub fn length_part(part: &str) -> Option<StyleValue> {
    let part = part.trim();
    if part.eq_ignore_ascii_case("auto") {
        return Some(StyleValue::Text("auto".into()));
    }
    Dimension::parse(part).map(|d| StyleValue::Number(d.value))
}

/// Convert a unit-suffixed string to its number; `None` for anything else.
pub fn strip_unit(s: &str) -> Option<f64> {
    let dim = Dimension::parse(s)?;
    dim.unit.map(|_| dim.value)
}
