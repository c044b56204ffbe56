//! Static renderer registry: lower-case component id → renderer.
//!
//! The table is built once on first use and never mutated. Supporting a new
//! DSL component means adding a [`ComponentKind`], its renderer arm in
//! [`renderer_for`], and an entry in [`ID_TABLE`].

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::dispatch::kind::ComponentKind;
use crate::renderer::{RenderContext, Renderer, View};
use crate::renderers::{
    BannerRenderer, ButtonRenderer, CarouselRenderer, DividerRenderer, FooterRenderer,
    HeaderRenderer, ImageRenderer, SpacerRenderer, TextRenderer,
};

/// Lower-case component identifiers accepted in the DSL.
const ID_TABLE: &[(&str, ComponentKind)] = &[
    ("header", ComponentKind::Header),
    ("navbar", ComponentKind::Header),
    ("app_header", ComponentKind::Header),
    ("mobile_header", ComponentKind::MobileHeader),
    ("header_mobile", ComponentKind::MobileHeader),
    ("mobileheader", ComponentKind::MobileHeader),
    ("banner", ComponentKind::Banner),
    ("hero", ComponentKind::Banner),
    ("carousel", ComponentKind::Carousel),
    ("slider", ComponentKind::Carousel),
    ("button", ComponentKind::Button),
    ("cta", ComponentKind::Button),
    ("text", ComponentKind::Text),
    ("paragraph", ComponentKind::Text),
    ("heading", ComponentKind::Text),
    ("image", ComponentKind::Image),
    ("spacer", ComponentKind::Spacer),
    ("divider", ComponentKind::Divider),
    ("footer", ComponentKind::Footer),
];

static HEADER: HeaderRenderer = HeaderRenderer::STANDARD;
static MOBILE_HEADER: HeaderRenderer = HeaderRenderer::MOBILE;
static BANNER: BannerRenderer = BannerRenderer;
static CAROUSEL: CarouselRenderer = CarouselRenderer;
static BUTTON: ButtonRenderer = ButtonRenderer;
static TEXT: TextRenderer = TextRenderer;
static IMAGE: ImageRenderer = ImageRenderer;
static SPACER: SpacerRenderer = SpacerRenderer;
static DIVIDER: DividerRenderer = DividerRenderer;
static FOOTER: FooterRenderer = FooterRenderer;

static GLOBAL: Lazy<RendererRegistry> = Lazy::new(RendererRegistry::builtin);

/// The renderer for each kind. Exhaustive, so a new kind without a renderer
/// does not compile.
fn renderer_for(kind: ComponentKind) -> &'static dyn Renderer {
    match kind {
        ComponentKind::Header => &HEADER,
        ComponentKind::MobileHeader => &MOBILE_HEADER,
        ComponentKind::Banner => &BANNER,
        ComponentKind::Carousel => &CAROUSEL,
        ComponentKind::Button => &BUTTON,
        ComponentKind::Text => &TEXT,
        ComponentKind::Image => &IMAGE,
        ComponentKind::Spacer => &SPACER,
        ComponentKind::Divider => &DIVIDER,
        ComponentKind::Footer => &FOOTER,
    }
}

// ---------------------------------------------------------------------------
// RendererHandle
// ---------------------------------------------------------------------------

/// A resolved renderer entry.
#[derive(Clone, Copy)]
pub struct RendererHandle {
    kind: ComponentKind,
    renderer: &'static dyn Renderer,
}

impl RendererHandle {
    /// The handle for a kind.
    pub fn for_kind(kind: ComponentKind) -> Self {
        Self {
            kind,
            renderer: renderer_for(kind),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Render a section's raw props.
    pub fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View {
        self.renderer.render(props, ctx)
    }
}

impl fmt::Debug for RendererHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererHandle").field("kind", &self.kind).finish()
    }
}

impl PartialEq for RendererHandle {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

// ---------------------------------------------------------------------------
// RendererRegistry
// ---------------------------------------------------------------------------

/// Immutable id → renderer table.
#[derive(Debug)]
pub struct RendererRegistry {
    entries: HashMap<&'static str, RendererHandle>,
}

impl RendererRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static RendererRegistry {
        &GLOBAL
    }

    fn builtin() -> Self {
        let entries = ID_TABLE
            .iter()
            .map(|(id, kind)| (*id, RendererHandle::for_kind(*kind)))
            .collect();
        Self { entries }
    }

    /// Look up a lower-case component id.
    pub fn get(&self, id: &str) -> Option<RendererHandle> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
