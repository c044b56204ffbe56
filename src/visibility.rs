//! Per-section mobile visibility.
//!
//! Precedence, highest first:
//! 1. an explicit hide flag (any alias) hides the section
//! 2. a desktop/web target hides the section
//! 3. the mobile-visible flag (default `true`) decides

use serde_json::Value;
use tracing::debug;

use crate::section::Section;
use crate::value::{coerce, Resolver};

const HIDE_ALIASES: [&str; 5] = [
    "hideOnMobile",
    "hiddenOnMobile",
    "hide_on_mobile",
    "isMobileHidden",
    "mobileHidden",
];

const SHOW_ALIASES: [&str; 6] = [
    "showOnMobile",
    "show_in_mobile",
    "visibleOnMobile",
    "mobileVisible",
    "mobile",
    "isMobileVisible",
];

const TARGET_ALIASES: [&str; 5] = ["target", "device", "platform", "for", "audience"];

/// Decides whether a section renders on mobile.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityResolver {
    resolver: Resolver,
}

impl VisibilityResolver {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// `true` if the section should render. Sections without a visibility
    /// block always render.
    pub fn should_render(&self, section: &Section) -> bool {
        match &section.visibility {
            None => true,
            Some(block) => self.evaluate(block),
        }
    }

    /// Evaluate a visibility block.
    ///
    /// A block that resolves to a bare boolean-like primitive is read as the
    /// mobile-visible flag.
    pub fn evaluate(&self, block: &Value) -> bool {
        let r = &self.resolver;

        if let Some(flag) = r.unwrap(block).filter(|v| !v.is_object()).and_then(coerce::to_bool) {
            return flag;
        }

        if r.bool(r.first_present(block, &HIDE_ALIASES), false) {
            debug!("section hidden by explicit mobile hide flag");
            return false;
        }

        let visible = r.bool(r.first_present(block, &SHOW_ALIASES), true);
        let target = r
            .string(r.first_present(block, &TARGET_ALIASES), "")
            .to_lowercase();

        if target.contains("desktop") || target.contains("web") {
            debug!(target = %target, "section hidden by non-mobile target");
            return false;
        }
        // A mobile/phone target defers to the visible flag, same as no target.
        visible
    }
}

/// Decide visibility with the default resolver.
pub fn should_render(section: &Section) -> bool {
    VisibilityResolver::default().should_render(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with(block: Value) -> Section {
        Section::new("text", json!({})).with_visibility(block)
    }

    #[test]
    fn no_block_renders() {
        assert!(should_render(&Section::new("text", json!({}))));
    }

    #[test]
    fn null_or_empty_block_renders() {
        assert!(should_render(&with(Value::Null)));
        assert!(should_render(&with(json!({}))));
    }

    #[test]
    fn explicit_hide_wins_over_show() {
        assert!(!should_render(&with(json!({ "hideOnMobile": true, "showOnMobile": true }))));
    }

    #[test]
    fn hide_aliases() {
        for alias in HIDE_ALIASES {
            let mut block = serde_json::Map::new();
            block.insert(alias.to_owned(), json!("yes"));
            assert!(!should_render(&with(Value::Object(block))), "{alias}");
        }
    }

    #[test]
    fn first_present_hide_alias_decides() {
        // hideOnMobile is present (false) so hiddenOnMobile is never consulted
        assert!(should_render(&with(json!({ "hideOnMobile": false, "hiddenOnMobile": true }))));
    }

    #[test]
    fn show_flag_false_hides() {
        assert!(!should_render(&with(json!({ "showOnMobile": false }))));
        assert!(!should_render(&with(json!({ "mobile": "no" }))));
        assert!(should_render(&with(json!({ "visibleOnMobile": 1 }))));
    }

    #[test]
    fn desktop_target_hides() {
        assert!(!should_render(&with(json!({ "target": "desktop" }))));
        assert!(!should_render(&with(json!({ "platform": "Web" }))));
        assert!(!should_render(&with(json!({ "device": "desktop", "showOnMobile": true }))));
    }

    #[test]
    fn mobile_target_defers_to_show_flag() {
        assert!(should_render(&with(json!({ "target": "mobile" }))));
        assert!(!should_render(&with(json!({ "target": "mobile", "showOnMobile": false }))));
        assert!(should_render(&with(json!({ "audience": "phone", "showOnMobile": "true" }))));
    }

    #[test]
    fn hide_beats_mobile_target() {
        assert!(!should_render(&with(json!({ "target": "mobile", "hideOnMobile": true }))));
    }

    #[test]
    fn wrapped_flags() {
        let block = json!({
            "properties": {
                "hideOnMobile": { "value": { "const": "false" } },
                "target": { "value": "MOBILE" }
            }
        });
        assert!(should_render(&with(block)));
    }

    #[test]
    fn unparseable_flags_use_defaults() {
        assert!(should_render(&with(json!({ "hideOnMobile": "perhaps", "showOnMobile": "perhaps" }))));
    }

    #[test]
    fn bare_boolean_block() {
        assert!(!should_render(&with(json!(false))));
        assert!(should_render(&with(json!({ "value": "yes" }))));
    }
}
