//! Text renderer: a styled run of text with an optional line limit.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, RenderContext, Renderer, View};

const TEXT_KEYS: [&str; 3] = ["text", "content", "body"];
const MAX_LINES_KEYS: [&str; 3] = ["numberOfLines", "maxLines", "lines"];

/// Renders text, paragraphs and headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Text
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let max_lines = ctx
            .number(props, &MAX_LINES_KEYS)
            .filter(|n| *n >= 1.0)
            .map(|n| n.min(f64::from(u32::MAX)) as u32);

        let content = Content::Text {
            text: ctx.text(props, &TEXT_KEYS).unwrap_or_default(),
            max_lines,
        };
        View::new(ComponentKind::Text, content).with_style(ctx.style(props, "style"))
    }
}
