//! Header renderer: app header with title, optional subtitle and logo.
//!
//! The mobile variant is the same renderer in compact mode: search is off by
//! default and a default compact height is applied when the style sets none.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::{Content, RenderContext, Renderer, View};
use crate::style::StyleValue;

const TITLE_KEYS: [&str; 4] = ["title", "label", "name", "displayName"];
const SUBTITLE_KEYS: [&str; 2] = ["subtitle", "tagline"];
const LOGO_KEYS: [&str; 3] = ["logo", "logoUrl", "logoSrc"];

/// Height applied to compact headers without an explicit one.
const COMPACT_HEIGHT: f64 = 56.0;

// ---------------------------------------------------------------------------
// HeaderRenderer
// ---------------------------------------------------------------------------

/// Renders the header family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRenderer {
    compact: bool,
}

impl HeaderRenderer {
    pub const STANDARD: Self = Self { compact: false };
    pub const MOBILE: Self = Self { compact: true };

    pub fn is_compact(&self) -> bool {
        self.compact
    }
}

impl Renderer for HeaderRenderer {
    fn kind(&self) -> ComponentKind {
        if self.compact {
            ComponentKind::MobileHeader
        } else {
            ComponentKind::Header
        }
    }

    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        let mut style = ctx.style(props, "style");
        if self.compact && !style.contains("height") {
            style.insert("height", StyleValue::Number(COMPACT_HEIGHT));
        }

        let content = Content::Header {
            title: ctx.text(props, &TITLE_KEYS).unwrap_or_default(),
            subtitle: ctx.text(props, &SUBTITLE_KEYS),
            logo: ctx.text(props, &LOGO_KEYS),
            show_search: ctx.flag(props, &["showSearch", "search"], !self.compact),
            show_cart: ctx.flag(props, &["showCart", "cart"], true),
            compact: self.compact,
        };
        View::new(self.kind(), content).with_style(style)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
