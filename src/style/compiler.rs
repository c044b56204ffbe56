//! Per-property compilation rules.
//!
//! Every key of a style dictionary is compiled independently. A key whose
//! value is malformed is dropped (and logged at debug level); compilation of
//! the dictionary as a whole always succeeds.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::EngineConfig;
use crate::style::compiled::{CompiledStyle, StyleValue};
use crate::style::gradient::{is_gradient, parse_linear_gradient};
use crate::style::shorthand::{border_radius, expand_border, expand_box, expand_box_shadow, expand_font};
use crate::style::tokenizer::first_color;
use crate::style::units::{length, strip_unit, Dimension};
use crate::style::StyleError;
use crate::value::coerce::{format_number, to_number};
use crate::value::Resolver;

/// Properties converted as lengths.
const LENGTH_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "minWidth",
    "maxWidth",
    "minHeight",
    "maxHeight",
    "top",
    "left",
    "right",
    "bottom",
    "start",
    "end",
    "fontSize",
    "lineHeight",
    "flexBasis",
    "borderWidth",
    "borderTopWidth",
    "borderRightWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "paddingVertical",
    "paddingHorizontal",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "marginVertical",
    "marginHorizontal",
    "shadowRadius",
];

/// Enumerated keyword properties passed through after trimming and lower-casing.
const KEYWORD_PROPERTIES: &[&str] = &[
    "textAlign",
    "flexDirection",
    "flexWrap",
    "justifyContent",
    "alignItems",
    "alignSelf",
    "alignContent",
    "position",
    "overflow",
    "display",
    "borderStyle",
    "textTransform",
    "writingDirection",
];

/// Numeric properties without units.
const UNITLESS_PROPERTIES: &[&str] = &["flex", "flexGrow", "flexShrink", "zIndex", "aspectRatio"];

/// Layout properties the target layout primitive cannot express.
const UNSUPPORTED_PROPERTIES: &[&str] = &["gap", "rowGap", "columnGap"];

fn invalid(property: &str, message: impl Into<String>) -> StyleError {
    StyleError::InvalidValue {
        property: property.into(),
        message: message.into(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `background-color` → `backgroundColor`. Keys without dashes are untouched.
fn camel_case(key: &str) -> String {
    if !key.contains('-') {
        return key.to_owned();
    }
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '-' {
            upper = !out.is_empty();
            continue;
        }
        if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// StyleCompiler
// ---------------------------------------------------------------------------

/// Compiles style dictionaries with a given [`EngineConfig`].
#[derive(Debug, Clone, Copy)]
pub struct StyleCompiler<'a> {
    config: &'a EngineConfig,
    resolver: Resolver,
}

impl<'a> StyleCompiler<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            resolver: Resolver::new(config.max_depth),
        }
    }

    /// Compile a style dictionary. Never fails; malformed keys are dropped.
    pub fn compile(&self, dict: &Map<String, Value>) -> CompiledStyle {
        let mut out = CompiledStyle::new();
        for (key, raw) in dict {
            let property = camel_case(key);
            let Some(value) = self.resolver.unwrap(raw) else {
                debug!(property = %property, "dropped unresolvable style property");
                continue;
            };
            if let Err(err) = self.apply(&mut out, &property, value) {
                debug!(property = %property, error = %err, "dropped style property");
            }
        }
        out
    }

    /// Compile a schema value that must resolve to a style dictionary.
    ///
    /// `null` or an absent value compiles to an empty style; any other
    /// non-object is a contract violation.
    pub fn compile_value(&self, value: &Value) -> Result<CompiledStyle, StyleError> {
        match self.resolver.unwrap(value) {
            None => Ok(CompiledStyle::new()),
            Some(Value::Object(map)) => Ok(self.compile(map)),
            Some(other) => Err(StyleError::NotAnObject(kind_name(other))),
        }
    }

    /// Compile the style dictionary found at `key` inside `props`.
    ///
    /// Lenient variant for renderers: a missing or non-object dictionary
    /// yields an empty style.
    pub fn compile_field(&self, props: &Value, key: &str) -> CompiledStyle {
        let Some(value) = self.resolver.field(props, key) else {
            return CompiledStyle::new();
        };
        self.compile_value(value).unwrap_or_else(|err| {
            debug!(field = key, error = %err, "ignored style field");
            CompiledStyle::new()
        })
    }

    /// Apply one resolved property to `out`.
    fn apply(&self, out: &mut CompiledStyle, property: &str, value: &Value) -> Result<(), StyleError> {
        let config = self.config;
        match property {
            p if UNSUPPORTED_PROPERTIES.contains(&p) => Err(StyleError::Unsupported(p.into())),

            // Spacing
            "padding" | "margin" => expand_box(out, property, value),
            "paddingX" => self.set_length(out, "paddingHorizontal", value),
            "paddingY" => self.set_length(out, "paddingVertical", value),
            "marginX" => self.set_length(out, "marginHorizontal", value),
            "marginY" => self.set_length(out, "marginVertical", value),

            // Border
            "border" => expand_border(out, property, None, value),
            "borderTop" | "borderRight" | "borderBottom" | "borderLeft" => {
                let side = &property["border".len()..];
                expand_border(out, property, Some(side), value)
            }
            "borderRadius" => {
                let radius = border_radius(value, config)?;
                out.insert("borderRadius", StyleValue::Number(radius));
                Ok(())
            }

            // Colors
            "background" | "backgroundColor" => self.background(out, property, value),
            "opacity" => {
                let opacity = to_number(value).ok_or_else(|| invalid(property, value.to_string()))?;
                out.insert("opacity", StyleValue::Number(opacity));
                Ok(())
            }
            "backgroundOpacity" => {
                let percent = to_number(value).ok_or_else(|| invalid(property, value.to_string()))?;
                out.insert("opacity", StyleValue::Number(percent / 100.0));
                Ok(())
            }
            "boxShadow" => expand_box_shadow(out, value, config),

            // Text
            "font" => expand_font(out, value),
            "fontFamily" => {
                let family = value
                    .as_str()
                    .and_then(|s| s.split(',').next())
                    .map(|s| s.trim().trim_matches(|c: char| c == '"' || c == '\'').trim())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| invalid(property, value.to_string()))?;
                out.insert("fontFamily", StyleValue::Text(family.to_owned()));
                Ok(())
            }
            "fontWeight" => {
                let weight = match value {
                    Value::Number(n) => n.as_f64().map(format_number),
                    Value::String(s) => Some(s.trim().to_ascii_lowercase()),
                    _ => None,
                }
                .filter(|s| !s.is_empty())
                .ok_or_else(|| invalid(property, value.to_string()))?;
                out.insert("fontWeight", StyleValue::Text(weight));
                Ok(())
            }
            "fontVariant" => {
                let variants: Vec<String> = match value {
                    Value::String(s) => s.split_whitespace().map(str::to_owned).collect(),
                    Value::Array(items) => items
                        .iter()
                        .filter_map(|item| self.resolver.unwrap(item))
                        .filter_map(|item| item.as_str().map(str::to_owned))
                        .collect(),
                    _ => Vec::new(),
                };
                if variants.is_empty() {
                    return Err(invalid(property, value.to_string()));
                }
                out.insert("fontVariant", StyleValue::List(variants));
                Ok(())
            }
            "fontStyle" => {
                let italic = value
                    .as_str()
                    .is_some_and(|s| s.trim().eq_ignore_ascii_case("italic"));
                let style = if italic { "italic" } else { "normal" };
                out.insert("fontStyle", StyleValue::Text(style.into()));
                Ok(())
            }
            "textDecoration" | "textDecorationLine" => {
                let text = value.as_str().unwrap_or_default().to_ascii_lowercase();
                let line = if text.contains("underline") {
                    "underline"
                } else if text.contains("line-through") {
                    "line-through"
                } else {
                    "none"
                };
                out.insert("textDecorationLine", StyleValue::Text(line.into()));
                Ok(())
            }
            "letterSpacing" => {
                let spacing = match value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => {
                        Dimension::parse(s).and_then(|d| d.to_points(config.base_font_size))
                    }
                    _ => None,
                }
                .ok_or_else(|| invalid(property, value.to_string()))?;
                out.insert("letterSpacing", StyleValue::Number(spacing));
                Ok(())
            }

            // Images
            "objectFit" => {
                let mode = match value.as_str().map(|s| s.trim().to_ascii_lowercase()).as_deref() {
                    Some("cover") => "cover",
                    Some("fill") => "stretch",
                    _ => "contain",
                };
                out.insert("resizeMode", StyleValue::Text(mode.into()));
                Ok(())
            }

            p if KEYWORD_PROPERTIES.contains(&p) => {
                let keyword = match value {
                    Value::String(s) => StyleValue::Text(s.trim().to_ascii_lowercase()),
                    other => StyleValue::Json(other.clone()),
                };
                out.insert(p, keyword);
                Ok(())
            }
            p if LENGTH_PROPERTIES.contains(&p) => self.set_length(out, p, value),
            p if UNITLESS_PROPERTIES.contains(&p) => {
                out.insert(p, unitless(value));
                Ok(())
            }

            // Anything else
            p => {
                let converted = match value {
                    Value::String(s) => strip_unit(s)
                        .map(StyleValue::Number)
                        .unwrap_or_else(|| StyleValue::Text(s.clone())),
                    other => length(other),
                };
                out.insert(p, converted);
                Ok(())
            }
        }
    }

    fn set_length(&self, out: &mut CompiledStyle, property: &str, value: &Value) -> Result<(), StyleError> {
        out.insert(property, length(value));
        Ok(())
    }

    /// `background`/`backgroundColor`, with gradient detection.
    fn background(&self, out: &mut CompiledStyle, property: &str, value: &Value) -> Result<(), StyleError> {
        let text = match value {
            Value::String(s) => s.trim(),
            other => {
                out.insert("backgroundColor", StyleValue::Json(other.clone()));
                return Ok(());
            }
        };

        if !is_gradient(text) {
            out.insert("backgroundColor", StyleValue::Text(text.to_owned()));
            return Ok(());
        }

        let gradient = parse_linear_gradient(text);
        let fallback = gradient
            .as_ref()
            .and_then(|g| g.colors.first().cloned())
            .or_else(|| first_color(text));
        if gradient.is_none() && fallback.is_none() {
            return Err(invalid(property, format!("unparseable gradient: {text}")));
        }
        if let Some(gradient) = gradient {
            out.set_gradient(gradient);
        }
        if let Some(color) = fallback {
            out.insert("backgroundColor", StyleValue::Text(color));
        }
        Ok(())
    }
}

/// Unitless numeric value; `16/9` style ratios are divided out.
fn unitless(value: &Value) -> StyleValue {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(StyleValue::Number)
            .unwrap_or_else(|| StyleValue::Json(value.clone())),
        Value::String(s) => {
            let ratio = s.split_once('/').and_then(|(a, b)| {
                let a = a.trim().parse::<f64>().ok()?;
                let b = b.trim().parse::<f64>().ok().filter(|b| *b != 0.0)?;
                Some(a / b)
            });
            ratio
                .or_else(|| s.trim().parse::<f64>().ok().filter(|n| n.is_finite()))
                .map(StyleValue::Number)
                .unwrap_or_else(|| StyleValue::Text(s.clone()))
        }
        other => StyleValue::Json(other.clone()),
    }
}

// ---------------------------------------------------------------------------
// Free functions (default config)
// ---------------------------------------------------------------------------

/// Compile a style dictionary with the default [`EngineConfig`].
pub fn compile(dict: &Map<String, Value>) -> CompiledStyle {
    StyleCompiler::new(&EngineConfig::default()).compile(dict)
}

/// Compile a schema value with the default [`EngineConfig`].
pub fn compile_value(value: &Value) -> Result<CompiledStyle, StyleError> {
    StyleCompiler::new(&EngineConfig::default()).compile_value(value)
}
