//! Component dispatch: map a section's component identifier to a renderer.
//!
//! Identifiers are resolved through the value resolver, trimmed, lower-cased
//! and looked up in the static [`RendererRegistry`]. Families with a
//! dedicated mobile variant (currently only the header) switch to it when the
//! section's display label or `variant` mentions "mobile".

pub mod kind;
pub mod registry;

pub use kind::ComponentKind;
pub use registry::{RendererHandle, RendererRegistry};

use serde_json::Value;
use tracing::{trace, warn};

use crate::section::Section;
use crate::value::Resolver;

/// Prop keys consulted for a section's display label, in order.
const LABEL_FIELDS: [&str; 4] = ["title", "label", "name", "displayName"];

/// Prop keys consulted for an explicit variant, in order.
const VARIANT_FIELDS: [&str; 2] = ["variant", "layoutVariant"];

/// Outcome of resolving a section's component.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A renderer is registered for the identifier.
    Resolved(RendererHandle),
    /// No renderer matches; carries the normalized identifier.
    Unrecognized(String),
}

impl Resolution {
    pub fn renderer(self) -> Option<RendererHandle> {
        match self {
            Resolution::Resolved(handle) => Some(handle),
            Resolution::Unrecognized(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Resolves sections to renderers.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r RendererRegistry,
    resolver: Resolver,
}

impl Dispatcher<'static> {
    /// A dispatcher over the global registry with the default resolver.
    pub fn global() -> Self {
        Self::new(RendererRegistry::global(), Resolver::default())
    }
}

impl Default for Dispatcher<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r RendererRegistry, resolver: Resolver) -> Self {
        Self { registry, resolver }
    }

    /// The normalized identifier a section dispatches on, after device
    /// variant inference.
    pub fn component_id(&self, section: &Section) -> String {
        let id = normalize_id(&self.resolver.string(Some(&section.component_id), ""));
        match self.registry.get(&id).and_then(|h| h.kind().mobile_variant()) {
            Some(mobile) if self.mentions_mobile(&section.props) => {
                trace!(from = %id, to = %mobile, "inferred mobile variant");
                mobile.as_str().to_owned()
            }
            _ => id,
        }
    }

    /// Resolve a section without side effects.
    pub fn resolve(&self, section: &Section) -> Resolution {
        let id = self.component_id(section);
        match self.registry.get(&id) {
            Some(handle) => Resolution::Resolved(handle),
            None => Resolution::Unrecognized(id),
        }
    }

    /// Resolve a section, emitting one warning when nothing matches.
    pub fn dispatch(&self, section: &Section) -> Resolution {
        let resolution = self.resolve(section);
        if let Resolution::Unrecognized(id) = &resolution {
            warn!(component = %id, "no renderer registered for component; section skipped");
        }
        resolution
    }

    /// The renderer for a section, or `None` (with one warning) when the
    /// identifier is unknown.
    pub fn resolve_renderer(&self, section: &Section) -> Option<RendererHandle> {
        self.dispatch(section).renderer()
    }

    fn mentions_mobile(&self, props: &Value) -> bool {
        let r = &self.resolver;
        let label = LABEL_FIELDS
            .iter()
            .find_map(|key| r.opt_string(r.field(props, key)));
        let variant = VARIANT_FIELDS
            .iter()
            .find_map(|key| r.opt_string(r.field(props, key)));
        [label, variant]
            .into_iter()
            .flatten()
            .any(|s| s.to_lowercase().contains("mobile"))
    }
}

/// Trim, lower-case, and fold `-` and spaces to `_`.
fn normalize_id(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn kind_of(section: &Section) -> Option<ComponentKind> {
        Dispatcher::global().resolve(section).renderer().map(|h| h.kind())
    }

    #[test]
    fn case_insensitive_lookup() {
        let section = Section::new("  Banner ", json!({}));
        assert_eq!(kind_of(&section), Some(ComponentKind::Banner));
        assert_eq!(kind_of(&Section::new("Mobile-Header", json!({}))), Some(ComponentKind::MobileHeader));
    }

    #[test]
    fn wrapped_identifier() {
        let section = Section::new(json!({ "value": { "const": "CAROUSEL" } }), json!({}));
        assert_eq!(kind_of(&section), Some(ComponentKind::Carousel));
    }

    #[test]
    fn mobile_label_selects_mobile_header() {
        let section = Section::new("header", json!({ "title": "Mobile Header" }));
        assert_eq!(kind_of(&section), Some(ComponentKind::MobileHeader));

        let named = Section::new("header", json!({ "displayName": { "value": "Header (mobile)" } }));
        assert_eq!(kind_of(&named), Some(ComponentKind::MobileHeader));
    }

    #[test]
    fn variant_field_selects_mobile_header() {
        let section = Section::new("Header", json!({ "title": "Shop", "variant": "mobile" }));
        assert_eq!(kind_of(&section), Some(ComponentKind::MobileHeader));
    }

    #[test]
    fn plain_header_stays_standard() {
        let section = Section::new("header", json!({ "title": "Shop" }));
        assert_eq!(kind_of(&section), Some(ComponentKind::Header));
    }

    #[test]
    fn mobile_label_ignored_without_variant_family() {
        let section = Section::new("banner", json!({ "title": "Mobile deals" }));
        assert_eq!(kind_of(&section), Some(ComponentKind::Banner));
    }

    #[test]
    fn unknown_component() {
        let section = Section::new("Totally_Unknown_Widget", json!({}));
        assert_eq!(
            Dispatcher::global().resolve(&section),
            Resolution::Unrecognized("totally_unknown_widget".into())
        );
        assert!(Dispatcher::global().resolve_renderer(&section).is_none());
    }

    #[test]
    fn empty_identifier_is_unrecognized() {
        let section = Section::new(Value::Null, json!({}));
        assert!(!Dispatcher::global().resolve(&section).is_resolved());
    }
}
