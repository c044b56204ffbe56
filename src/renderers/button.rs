//! Button renderer: labelled action with container and label styles.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, RenderContext, Renderer, View};
use crate::style::StyleValue;

const LABEL_KEYS: [&str; 3] = ["label", "text", "title"];
const ACTION_KEYS: [&str; 4] = ["action", "url", "link", "href"];
const DEFAULT_LABEL: &str = "Button";
const DISABLED_OPACITY: f64 = 0.5;

/// Renders buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonRenderer;

impl Renderer for ButtonRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let disabled = ctx.flag(props, &["disabled", "isDisabled"], false);
        let mut style = ctx.style(props, "style");
        if disabled && !style.contains("opacity") {
            style.insert("opacity", StyleValue::Number(DISABLED_OPACITY));
        }

        let content = Content::Button {
            label: ctx
                .text(props, &LABEL_KEYS)
                .unwrap_or_else(|| DEFAULT_LABEL.to_owned()),
            action: ctx.text(props, &ACTION_KEYS),
            disabled,
            label_style: ctx.style(props, "textStyle"),
        };
        View::new(ComponentKind::Button, content).with_style(style)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
