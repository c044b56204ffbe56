//! Carousel renderer: a row of slides.
//!
//! Object slides render as banners; string slides are taken as image URLs.
//! Entries that resolve to neither are skipped.

use serde_json::Value;
use tracing::debug;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, RenderContext, Renderer, View};
use crate::renderers::banner::BannerRenderer;
use crate::renderers::image::ImageRenderer;

const ITEM_KEYS: [&str; 3] = ["items", "slides", "images"];
const INTERVAL_KEYS: [&str; 3] = ["interval", "intervalMs", "autoplayInterval"];
const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Renders carousels and sliders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselRenderer;

impl CarouselRenderer {
    fn slide(&self, item: &Value, ctx: &RenderContext<'_>) -> Option<View> {
        match ctx.resolver().unwrap(item)? {
            Value::Object(_) => Some(BannerRenderer.render(item, ctx)),
            Value::String(url) if !url.trim().is_empty() => Some(ImageRenderer::from_source(url.trim())),
            other => {
                debug!(slide = %other, "skipped carousel slide");
                None
            }
        }
    }
}

impl Renderer for CarouselRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Carousel
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let slides: Vec<View> = ctx
            .items(props, &ITEM_KEYS)
            .iter()
            .filter_map(|item| self.slide(item, ctx))
            .collect();

        let interval_ms = ctx
            .number(props, &INTERVAL_KEYS)
            .filter(|n| n.is_finite() && *n > 0.0)
            .map_or(DEFAULT_INTERVAL_MS, |n| n.round() as u64);

        let content = Content::Carousel {
            autoplay: ctx.flag(props, &["autoplay", "autoPlay"], false),
            interval_ms,
            show_indicators: ctx.flag(props, &["showIndicators", "showDots", "dots"], true),
        };
        View::new(ComponentKind::Carousel, content)
            .with_style(ctx.style(props, "style"))
            .with_children(slides)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(props: Value) -> View {
        let config = EngineConfig::default();
        CarouselRenderer.render(&props, &RenderContext::new(&config))
    }

    #[test]
    fn mixed_slides() {
        let view = render(json!({
            "slides": [
                { "image": "a.png", "title": "A" },
                "b.png",
                { "value": "c.png" },
                42,
                null,
                "  "
            ],
            "autoPlay": true,
            "interval": "5000"
        }));
        let kinds: Vec<ComponentKind> = view.children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ComponentKind::Banner, ComponentKind::Image, ComponentKind::Image]);
        assert_eq!(
            view.content,
            Content::Carousel {
                autoplay: true,
                interval_ms: 5000,
                show_indicators: true,
            }
        );
    }

    #[test]
    fn defaults_without_items() {
        let view = render(json!({ "interval": -1 }));
        assert!(view.children.is_empty());
        assert_eq!(
            view.content,
            Content::Carousel {
                autoplay: false,
                interval_ms: DEFAULT_INTERVAL_MS,
                show_indicators: true,
            }
        );
    }
}
