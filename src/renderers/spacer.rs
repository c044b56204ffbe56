//! Spacer and divider renderers: fixed vertical gaps and rules.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, RenderContext, Renderer, View};
use crate::style::StyleValue;

const DEFAULT_SPACER_HEIGHT: f64 = 16.0;
const DEFAULT_DIVIDER_THICKNESS: f64 = 1.0;
const DEFAULT_DIVIDER_COLOR: &str = "#e0e0e0";

// ---------------------------------------------------------------------------
// Spacer
// ---------------------------------------------------------------------------

/// Renders empty vertical space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpacerRenderer;

impl Renderer for SpacerRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Spacer
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let height = ctx
            .number(props, &["height", "size"])
            .filter(|h| *h >= 0.0)
            .unwrap_or(DEFAULT_SPACER_HEIGHT);

        let mut style = ctx.style(props, "style");
        style.insert("height", StyleValue::Number(height));
        View::new(ComponentKind::Spacer, Content::Spacer { height }).with_style(style)
    }
}

// ---------------------------------------------------------------------------
// Divider
// ---------------------------------------------------------------------------

/// Renders a horizontal rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DividerRenderer;

impl Renderer for DividerRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Divider
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let thickness = ctx
            .number(props, &["thickness", "height"])
            .filter(|t| *t > 0.0)
            .unwrap_or(DEFAULT_DIVIDER_THICKNESS);
        let color = ctx
            .text(props, &["color"])
            .unwrap_or_else(|| DEFAULT_DIVIDER_COLOR.to_owned());

        let mut style = ctx.style(props, "style");
        style.insert("height", StyleValue::Number(thickness));
        style.insert("backgroundColor", StyleValue::Text(color.clone()));
        View::new(ComponentKind::Divider, Content::Divider { thickness, color }).with_style(style)
    }
}
