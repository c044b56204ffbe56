//! Footer renderer: closing text and a row of links.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, Link, RenderContext, Renderer, View};

const TEXT_KEYS: [&str; 3] = ["text", "copyright", "content"];
const LINK_LABEL_KEYS: [&str; 3] = ["label", "title", "text"];
const LINK_URL_KEYS: [&str; 3] = ["url", "href", "link"];

/// Renders footers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FooterRenderer;

impl Renderer for FooterRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Footer
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        // Links missing a label or a URL are dropped.
        let links = ctx
            .items(props, &["links", "items"])
            .iter()
            .filter_map(|item| {
                Some(Link {
                    label: ctx.text(item, &LINK_LABEL_KEYS)?,
                    url: ctx.text(item, &LINK_URL_KEYS)?,
                })
            })
            .collect();

        let content = Content::Footer {
            text: ctx.text(props, &TEXT_KEYS),
            links,
        };
        View::new(ComponentKind::Footer, content).with_style(ctx.style(props, "style"))
    }
}
