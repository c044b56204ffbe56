//! Banner renderer: hero image with optional heading, subheading and link.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, RenderContext, Renderer, View};

const IMAGE_KEYS: [&str; 4] = ["image", "imageUrl", "src", "backgroundImage"];
const HEADING_KEYS: [&str; 2] = ["heading", "title"];
const SUBHEADING_KEYS: [&str; 3] = ["subheading", "subtitle", "description"];
const LINK_KEYS: [&str; 3] = ["link", "url", "href"];

/// Renders banners and carousel slides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerRenderer;

impl Renderer for BannerRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Banner
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let content = Content::Banner {
            image: ctx.text(props, &IMAGE_KEYS),
            heading: ctx.text(props, &HEADING_KEYS),
            subheading: ctx.text(props, &SUBHEADING_KEYS),
            link: ctx.text(props, &LINK_KEYS),
        };
        View::new(ComponentKind::Banner, content).with_style(ctx.style(props, "style"))
    }
}
