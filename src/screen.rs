//! Screen assembly: layout document → rendered views.
//!
//! [`Screen::build`] runs the whole pipeline for one fetched document: parse
//! sections, drop the ones hidden on mobile, dispatch the rest to renderers,
//! and collect the views in document order. Unrecognized components are
//! skipped with a single warning each; nothing in the pipeline fails.

use serde_json::Value;
use tracing::debug;

use crate::dispatch::{Dispatcher, RendererRegistry, Resolution};
use crate::renderer::{RenderContext, View};
use crate::section::{parse_document_with, Section};
use crate::visibility::VisibilityResolver;

// ---------------------------------------------------------------------------
// Skipped sections
// ---------------------------------------------------------------------------

/// Why a section produced no view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The visibility block hides it on mobile.
    Hidden,
    /// No renderer is registered for the normalized identifier.
    Unrecognized(String),
}

/// A section that produced no view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Index of the section among the parsed sections.
    pub index: usize,
    pub reason: SkipReason,
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// The rendered views of one layout document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    views: Vec<View>,
    skipped: Vec<Skipped>,
}

impl Screen {
    /// Build a screen using the global renderer registry.
    pub fn build(doc: &Value, ctx: &RenderContext<'_>) -> Self {
        let dispatcher = Dispatcher::new(RendererRegistry::global(), *ctx.resolver());
        Self::build_with(doc, ctx, &dispatcher)
    }

    /// Build a screen with an explicit dispatcher.
    pub fn build_with(doc: &Value, ctx: &RenderContext<'_>, dispatcher: &Dispatcher<'_>) -> Self {
        let sections = parse_document_with(doc, ctx.resolver());
        Self::from_sections(&sections, ctx, dispatcher)
    }

    /// Render already-parsed sections in order.
    pub fn from_sections(sections: &[Section], ctx: &RenderContext<'_>, dispatcher: &Dispatcher<'_>) -> Self {
        let visibility = VisibilityResolver::new(*ctx.resolver());
        let mut screen = Self::default();

        for (index, section) in sections.iter().enumerate() {
            if !visibility.should_render(section) {
                screen.skipped.push(Skipped {
                    index,
                    reason: SkipReason::Hidden,
                });
                continue;
            }
            match dispatcher.dispatch(section) {
                Resolution::Resolved(handle) => screen.views.push(handle.render(&section.props, ctx)),
                Resolution::Unrecognized(id) => screen.skipped.push(Skipped {
                    index,
                    reason: SkipReason::Unrecognized(id),
                }),
            }
        }

        debug!(
            rendered = screen.views.len(),
            skipped = screen.skipped.len(),
            "screen built"
        );
        screen
    }

    /// Rendered views in document order.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Consume the screen, returning its views.
    pub fn into_views(self) -> Vec<View> {
        self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// The views as a JSON array.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.views).unwrap_or(Value::Null)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
