//! Shorthand expansion: box spacing, border, border radius, font, box shadow.
//!
//! Each function writes canonical properties into a [`CompiledStyle`] and
//! returns `Err` for malformed input, in which case nothing is written.

use serde_json::Value;

use crate::config::EngineConfig;
use crate::style::compiled::{CompiledStyle, StyleValue};
use crate::style::tokenizer::{is_color, tokenize, Token};
use crate::style::units::{length_part, Dimension};
use crate::style::StyleError;

const BORDER_STYLES: [&str; 3] = ["solid", "dashed", "dotted"];

fn invalid(property: &str, message: impl Into<String>) -> StyleError {
    StyleError::InvalidValue {
        property: property.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// padding / margin
// ---------------------------------------------------------------------------

/// Expand a 1-4 value `padding`/`margin` shorthand.
///
/// - 1 value: all sides (`padding`)
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn expand_box(
    out: &mut CompiledStyle,
    prefix: &str,
    value: &Value,
) -> Result<(), StyleError> {
    let text = match value {
        Value::Number(n) => {
            let n = n.as_f64().ok_or_else(|| invalid(prefix, "non-finite number"))?;
            out.insert(prefix, StyleValue::Number(n));
            return Ok(());
        }
        Value::String(s) => s,
        other => return Err(invalid(prefix, format!("expected number or string, got: {other}"))),
    };

    let parts = text
        .split_whitespace()
        .map(|part| length_part(part).ok_or_else(|| invalid(prefix, format!("bad length: {part}"))))
        .collect::<Result<Vec<_>, _>>()?;

    let side = |name: &str| format!("{prefix}{name}");
    let mut parts = parts.into_iter();
    match (parts.next(), parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(all), None, None, None, None) => {
            out.insert(prefix, all);
        }
        (Some(vertical), Some(horizontal), None, None, None) => {
            out.insert(side("Vertical"), vertical);
            out.insert(side("Horizontal"), horizontal);
        }
        (Some(top), Some(horizontal), Some(bottom), None, None) => {
            out.insert(side("Top"), top);
            out.insert(side("Horizontal"), horizontal);
            out.insert(side("Bottom"), bottom);
        }
        (Some(top), Some(right), Some(bottom), Some(left), None) => {
            out.insert(side("Top"), top);
            out.insert(side("Right"), right);
            out.insert(side("Bottom"), bottom);
            out.insert(side("Left"), left);
        }
        _ => return Err(invalid(prefix, "expected 1-4 values")),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// border
// ---------------------------------------------------------------------------

/// Expand `border` or a side-specific `border{Side}` shorthand.
///
/// Width, color and style tokens may appear in any order. Side keys write
/// `border{Side}Width`/`border{Side}Color` only.
pub fn expand_border(
    out: &mut CompiledStyle,
    property: &str,
    side: Option<&str>,
    value: &Value,
) -> Result<(), StyleError> {
    let side = side.unwrap_or("");
    let width_key = format!("border{side}Width");
    let color_key = format!("border{side}Color");

    let text = match value {
        Value::Number(n) => {
            let n = n.as_f64().ok_or_else(|| invalid(property, "non-finite number"))?;
            out.insert(width_key, StyleValue::Number(n));
            return Ok(());
        }
        Value::String(s) => s.trim(),
        other => return Err(invalid(property, format!("expected string, got: {other}"))),
    };

    if text.eq_ignore_ascii_case("none") {
        out.insert(width_key, StyleValue::Number(0.0));
        return Ok(());
    }

    let mut width = None;
    let mut color = None;
    let mut style = None;
    for (token, text) in tokenize(text) {
        match token {
            Token::Dimension | Token::Number => {
                if let Some(StyleValue::Number(n)) = length_part(&text) {
                    width = Some(n);
                }
            }
            _ if is_color(token, &text) => color = Some(text),
            Token::Ident if BORDER_STYLES.contains(&text.to_ascii_lowercase().as_str()) => {
                style = Some(text.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    if width.is_none() && color.is_none() && style.is_none() {
        return Err(invalid(property, format!("no width, color or style in: {text}")));
    }
    if let Some(width) = width {
        out.insert(width_key, StyleValue::Number(width));
    }
    if let Some(color) = color {
        out.insert(color_key, StyleValue::Text(color));
    }
    if let (Some(style), "") = (style, side) {
        out.insert("borderStyle", StyleValue::Text(style));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// border radius
// ---------------------------------------------------------------------------

/// Convert a single-radius `borderRadius`.
///
/// Percentages and radii at or above the rounded threshold become the pill
/// radius. Per-corner shorthand (several radii) is rejected.
pub fn border_radius(value: &Value, config: &EngineConfig) -> Result<f64, StyleError> {
    let pill = |n: f64| if n >= config.rounded_threshold { config.pill_radius } else { n };
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(pill)
            .ok_or_else(|| invalid("borderRadius", "non-finite number")),
        Value::String(s) => {
            let s = s.trim();
            if s.split_whitespace().nth(1).is_some() || s.contains('/') {
                return Err(invalid("borderRadius", format!("per-corner radii not supported: {s}")));
            }
            let radius = Dimension::parse(s).ok_or_else(|| invalid("borderRadius", format!("bad radius: {s}")))?;
            if radius.is_percent() {
                return Ok(config.pill_radius);
            }
            Ok(pill(radius.value))
        }
        other => Err(invalid("borderRadius", format!("expected number or string, got: {other}"))),
    }
}

// ---------------------------------------------------------------------------
// font
// ---------------------------------------------------------------------------

/// Expand the `font` shorthand: `[style] [variant] [weight] size[/line-height] family`.
///
/// Writes `fontStyle`, `fontVariant`, `fontWeight`, `fontSize`, `lineHeight`
/// and `fontFamily` as present. A missing size or family is an error.
pub fn expand_font(out: &mut CompiledStyle, value: &Value) -> Result<(), StyleError> {
    let text = match value {
        Value::String(s) => s.trim(),
        other => return Err(invalid("font", format!("expected string, got: {other}"))),
    };

    let mut words = text.split_whitespace();
    let mut style = None;
    let mut variants = Vec::new();
    let mut weight = None;
    let (size, line_height) = loop {
        let word = words
            .next()
            .ok_or_else(|| invalid("font", format!("no font size in: {text}")))?;
        let lower = word.to_ascii_lowercase();
        match lower.as_str() {
            "normal" => {}
            "italic" | "oblique" => style = Some("italic"),
            "small-caps" => variants.push("small-caps".to_owned()),
            "bold" | "bolder" | "lighter" => weight = Some(lower.clone()),
            w if is_numeric_weight(w) => weight = Some(w.to_owned()),
            _ => {
                let (size, line_height) = match word.split_once('/') {
                    Some((size, line_height)) => (size, Some(line_height)),
                    None => (word, None),
                };
                let size = Dimension::parse(size)
                    .ok_or_else(|| invalid("font", format!("unexpected token: {word}")))?;
                let line_height = line_height
                    .map(|lh| Dimension::parse(lh).ok_or_else(|| invalid("font", format!("bad line height: {lh}"))))
                    .transpose()?;
                break (size.value, line_height.map(|d| d.value));
            }
        }
    };

    let rest = words.collect::<Vec<_>>().join(" ");
    let family = rest
        .split(',')
        .next()
        .map(|s| s.trim().trim_matches(|c: char| c == '"' || c == '\'').trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("font", format!("no font family in: {text}")))?;

    if let Some(style) = style {
        out.insert("fontStyle", StyleValue::Text(style.into()));
    }
    if !variants.is_empty() {
        out.insert("fontVariant", StyleValue::List(variants));
    }
    if let Some(weight) = weight {
        out.insert("fontWeight", StyleValue::Text(weight));
    }
    out.insert("fontSize", StyleValue::Number(size));
    if let Some(line_height) = line_height {
        out.insert("lineHeight", StyleValue::Number(line_height));
    }
    out.insert("fontFamily", StyleValue::Text(family.to_owned()));
    Ok(())
}

/// `100` through `900` in steps of 100.
fn is_numeric_weight(word: &str) -> bool {
    word.parse::<u16>()
        .is_ok_and(|w| (100..=900).contains(&w) && w % 100 == 0)
}

// ---------------------------------------------------------------------------
// box shadow
// ---------------------------------------------------------------------------

/// Expand `boxShadow` into shadow primitives plus an elevation estimate.
///
/// Lengths in order are offset-x, offset-y and blur radius; spread and
/// `inset` are ignored.
pub fn expand_box_shadow(
    out: &mut CompiledStyle,
    value: &Value,
    config: &EngineConfig,
) -> Result<(), StyleError> {
    let text = match value {
        Value::String(s) => s.trim(),
        other => return Err(invalid("boxShadow", format!("expected string, got: {other}"))),
    };
    if text.eq_ignore_ascii_case("none") {
        return Err(invalid("boxShadow", "none"));
    }

    let mut lengths = Vec::new();
    let mut color = None;
    for (token, text) in tokenize(text) {
        match token {
            Token::Dimension | Token::Number => {
                if let Some(StyleValue::Number(n)) = length_part(&text) {
                    lengths.push(n);
                }
            }
            _ if color.is_none() && is_color(token, &text) => color = Some(text),
            _ => {}
        }
    }

    let (x, y) = match lengths.as_slice() {
        [x, y, ..] => (*x, *y),
        _ => return Err(invalid("boxShadow", format!("expected at least two offsets in: {text}"))),
    };
    let blur = lengths.get(2).copied().unwrap_or(0.0);

    out.insert("shadowOffset", StyleValue::Offset { width: x, height: y });
    out.insert("shadowRadius", StyleValue::Number(blur));
    out.insert("shadowOpacity", StyleValue::Number(config.shadow_opacity));
    if let Some(color) = color {
        out.insert("shadowColor", StyleValue::Text(color));
    }
    out.insert("elevation", StyleValue::Number((blur / 2.0).round().max(1.0)));
    Ok(())
}
