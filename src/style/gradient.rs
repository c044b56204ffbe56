//! `linear-gradient(...)` extraction for background values.

use crate::style::compiled::{Gradient, GradientKind};
use crate::style::units::{Dimension, Unit};

const FUNCTION: &str = "linear-gradient(";

/// CSS default direction (`to bottom`).
const DEFAULT_ANGLE: f64 = 180.0;

/// Returns `true` if the value uses gradient syntax.
pub fn is_gradient(input: &str) -> bool {
    input.to_ascii_lowercase().contains(FUNCTION)
}

/// Parse the first `linear-gradient(...)` in `input`.
///
/// Every color stop is kept in order, named colors included. Stop positions
/// and bare color hints are dropped. Returns `None` when there is no gradient
/// or it names no colors.
pub fn parse_linear_gradient(input: &str) -> Option<Gradient> {
    let start = input.to_ascii_lowercase().find(FUNCTION)? + FUNCTION.len();
    let body = balanced_body(&input[start..])?;
    let parts = split_top_level(body);

    let (angle, stops) = match parts.first().and_then(|first| parse_angle(first)) {
        Some(angle) => (angle, &parts[1..]),
        None => (DEFAULT_ANGLE, &parts[..]),
    };

    let colors: Vec<String> = stops.iter().filter_map(|stop| stop_color(stop)).map(str::to_owned).collect();
    if colors.is_empty() {
        return None;
    }

    Some(Gradient {
        colors,
        angle,
        kind: GradientKind::Linear,
    })
}

/// Content up to the parenthesis that closes the already-consumed open paren.
fn balanced_body(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(body[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// The color of one stop, without its trailing positions (`#fff 0% 40%`).
fn stop_color(stop: &str) -> Option<&str> {
    let mut color = stop.trim();
    while let Some((head, tail)) = color.rsplit_once(char::is_whitespace) {
        if Dimension::parse(tail).is_none() {
            break;
        }
        color = head.trim_end();
    }
    if color.is_empty() || Dimension::parse(color).is_some() {
        return None;
    }
    Some(color)
}

/// An angle (`90deg`) or direction keyword (`to right`).
fn parse_angle(token: &str) -> Option<f64> {
    let token = token.trim().to_ascii_lowercase();
    if let Some(direction) = token.strip_prefix("to ") {
        return match direction.trim() {
            "top" => Some(0.0),
            "right" => Some(90.0),
            "bottom" => Some(180.0),
            "left" => Some(270.0),
            "top right" | "right top" => Some(45.0),
            "bottom right" | "right bottom" => Some(135.0),
            "bottom left" | "left bottom" => Some(225.0),
            "top left" | "left top" => Some(315.0),
            _ => None,
        };
    }
    Dimension::parse(&token)
        .filter(|d| d.unit == Some(Unit::Deg))
        .map(|d| d.value)
}
