//! Renderer trait: turn a section's raw props into a typed view.
//!
//! Every built-in component implements `Renderer`. Renderers receive the
//! section's props untouched and read them through the [`RenderContext`]
//! helpers, so wrapper resolution and coercion stay consistent across
//! components.

use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::renderer::context::RenderContext;
use crate::renderer::view::View;

/// Core trait implemented by all component renderers.
///
/// Object-safe and `Send + Sync` so renderers can live in the static
/// registry.
pub trait Renderer: Send + Sync {
    /// The component kind this renderer produces.
    fn kind(&self) -> ComponentKind;

    /// Render raw props into a view.
    ///
    /// Must not fail: missing or malformed props fall back to defaults.
    fn render(&self, props: &Value, ctx: &RenderContext<'_>) -> View;
}
