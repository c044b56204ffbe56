//! Image renderer.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, RenderContext, Renderer, View};
use crate::style::StyleValue;

const SOURCE_KEYS: [&str; 6] = ["src", "source", "image", "imageUrl", "uri", "url"];
const ALT_KEYS: [&str; 3] = ["alt", "alternativeText", "caption"];

/// Renders images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageRenderer;

impl ImageRenderer {
    /// Render a bare image URL, as used for string carousel slides.
    pub fn from_source(source: impl Into<String>) -> View {
        View::new(ComponentKind::Image, Content::Image {
            source: source.into(),
            alt: None,
            aspect_ratio: None,
        })
    }
}

impl Renderer for ImageRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Image
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let style = ctx.style(props, "style");
        // A ratio in the style wins over the loose prop.
        let aspect_ratio = style
            .get("aspectRatio")
            .and_then(StyleValue::as_f64)
            .or_else(|| ctx.number(props, &["aspectRatio", "ratio"]))
            .filter(|r| *r > 0.0);

        let content = Content::Image {
            source: ctx.text(props, &SOURCE_KEYS).unwrap_or_default(),
            alt: ctx.text(props, &ALT_KEYS),
            aspect_ratio,
        };
        View::new(ComponentKind::Image, content).with_style(style)
    }
}
