//! DSL sections and layout documents.
//!
//! A [`Section`] is one entry of a fetched layout: a component identifier, the
//! raw property subtree handed to its renderer, and an optional visibility
//! block. Sections are built fresh from each fetched document and never
//! patched in place.

use serde_json::{Map, Value};
use tracing::warn;

use crate::value::{Resolver, SchemaValue};

/// Keys holding the component identifier, in lookup order.
const COMPONENT_KEYS: [&str; 4] = ["component", "componentId", "type", "name"];

/// Keys holding the property subtree, in lookup order.
const PROPS_KEYS: [&str; 2] = ["props", "properties"];

/// Keys holding the section list of a layout document.
const DOCUMENT_KEYS: [&str; 3] = ["sections", "layout", "components"];

/// Errors from section parsing.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("section must be an object, got: {0}")]
    NotAnObject(String),
    #[error("section has no component identifier")]
    MissingComponent,
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One renderable entry of a layout document.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Component identifier, still in schema form.
    pub component_id: SchemaValue,
    /// Raw property subtree, passed to the renderer unmodified.
    pub props: SchemaValue,
    /// Visibility block, if the section carries one.
    pub visibility: Option<SchemaValue>,
}

impl Section {
    /// Create a section without a visibility block.
    pub fn new(component_id: impl Into<SchemaValue>, props: SchemaValue) -> Self {
        Self {
            component_id: component_id.into(),
            props,
            visibility: None,
        }
    }

    /// Attach a visibility block (builder pattern).
    pub fn with_visibility(mut self, visibility: SchemaValue) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Parse a section from its DSL form with the default resolver.
    pub fn from_value(value: &Value) -> Result<Self, SectionError> {
        Self::from_value_with(value, &Resolver::default())
    }

    /// Parse a section from its DSL form.
    ///
    /// Props come from `props`/`properties`, or the section object itself when
    /// neither is present. Visibility comes from the section's `visibility`
    /// key, falling back to a `visibility` key inside props.
    pub fn from_value_with(value: &Value, resolver: &Resolver) -> Result<Self, SectionError> {
        let map = section_object(value, resolver)?;

        let component_id = COMPONENT_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find(|id| resolver.opt_string(Some(*id)).is_some())
            .cloned()
            .ok_or(SectionError::MissingComponent)?;

        let props = PROPS_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .cloned()
            .unwrap_or_else(|| Value::Object(map.clone()));

        let visibility = map
            .get("visibility")
            .or_else(|| resolver.field(&props, "visibility"))
            .cloned();

        Ok(Self {
            component_id,
            props,
            visibility,
        })
    }
}

/// The object holding a section's keys.
///
/// An object that names a component is taken as-is (its `properties` key is
/// the props, not a wrapper). Anything else is unwrapped first.
fn section_object<'a>(value: &'a Value, resolver: &Resolver) -> Result<&'a Map<String, Value>, SectionError> {
    if let Value::Object(map) = value {
        if COMPONENT_KEYS.iter().any(|key| map.contains_key(*key)) {
            return Ok(map);
        }
    }
    match resolver.unwrap(value) {
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(SectionError::NotAnObject(other.to_string())),
        None => Err(SectionError::NotAnObject("null".into())),
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Parse every section of a layout document with the default resolver.
pub fn parse_document(doc: &Value) -> Vec<Section> {
    parse_document_with(doc, &Resolver::default())
}

/// Parse every section of a layout document.
///
/// The document is either a section array or an object holding one under
/// `sections`, `layout` or `components` (wrappers allowed at every level).
/// Malformed entries are skipped with a warning.
pub fn parse_document_with(doc: &Value, resolver: &Resolver) -> Vec<Section> {
    let Some(entries) = section_list(doc, resolver, 0) else {
        warn!("layout document has no section list");
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match Section::from_value_with(entry, resolver) {
            Ok(section) => Some(section),
            Err(err) => {
                warn!(index, error = %err, "skipped malformed section");
                None
            }
        })
        .collect()
}

fn section_list<'a>(doc: &'a Value, resolver: &Resolver, depth: usize) -> Option<&'a Vec<Value>> {
    if depth > resolver.max_depth() {
        return None;
    }
    match doc {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            if let Some(inner) = DOCUMENT_KEYS.iter().find_map(|key| map.get(*key)) {
                return section_list(inner, resolver, depth + 1);
            }
            let unwrapped = resolver.unwrap(doc)?;
            if std::ptr::eq(unwrapped, doc) {
                None
            } else {
                section_list(unwrapped, resolver, depth + 1)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parse_explicit_props() {
        let s = Section::from_value(&json!({
            "component": "Banner",
            "props": { "title": "Sale" },
            "visibility": { "hideOnMobile": false }
        }))
        .unwrap();
        assert_eq!(s.component_id, json!("Banner"));
        assert_eq!(s.props, json!({ "title": "Sale" }));
        assert_eq!(s.visibility, Some(json!({ "hideOnMobile": false })));
    }

    #[test]
    fn properties_key_is_props_not_wrapper() {
        let s = Section::from_value(&json!({
            "componentId": { "const": "header" },
            "properties": { "title": { "value": "Shop" } }
        }))
        .unwrap();
        assert_eq!(s.component_id, json!({ "const": "header" }));
        assert_eq!(s.props, json!({ "title": { "value": "Shop" } }));
        assert!(s.visibility.is_none());
    }

    #[test]
    fn inline_props_and_nested_visibility() {
        let s = Section::from_value(&json!({
            "type": "text",
            "text": "Hello",
            "visibility": null
        }))
        .unwrap();
        assert_eq!(s.props["text"], json!("Hello"));
        assert_eq!(s.visibility, Some(Value::Null));

        let nested = Section::from_value(&json!({
            "component": "text",
            "props": { "properties": { "visibility": { "value": { "mobile": false } } } }
        }))
        .unwrap();
        assert_eq!(nested.visibility, Some(json!({ "value": { "mobile": false } })));
    }

    #[test]
    fn wrapped_section() {
        let s = Section::from_value(&json!({ "value": { "component": "spacer" } })).unwrap();
        assert_eq!(s.component_id, json!("spacer"));
    }

    #[test]
    fn missing_component_is_an_error() {
        assert!(matches!(
            Section::from_value(&json!({ "props": {} })),
            Err(SectionError::MissingComponent)
        ));
        assert!(matches!(
            Section::from_value(&json!({ "component": "" })),
            Err(SectionError::MissingComponent)
        ));
        assert!(matches!(
            Section::from_value(&json!("header")),
            Err(SectionError::NotAnObject(_))
        ));
    }

    #[test]
    fn builder() {
        let s = Section::new("button", json!({ "label": "Go" }))
            .with_visibility(json!({ "showOnMobile": true }));
        assert_eq!(s.component_id, json!("button"));
        assert!(s.visibility.is_some());
    }

    #[test]
    fn document_shapes() {
        let sections = json!([{ "component": "a" }, { "component": "b" }]);
        assert_eq!(parse_document(&sections).len(), 2);

        let wrapped = json!({ "layout": { "value": { "sections": { "const": [{ "component": "a" }] } } } });
        assert_eq!(parse_document(&wrapped).len(), 1);

        let container = json!({ "properties": { "components": [{ "component": "a" }] } });
        assert_eq!(parse_document(&container).len(), 1);
    }

    #[test]
    fn document_skips_malformed_entries() {
        let doc = json!({ "sections": [{ "component": "a" }, 42, { "props": {} }, { "component": "b" }] });
        let sections = parse_document(&doc);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].component_id, json!("b"));
    }

    #[test]
    fn document_without_sections() {
        assert!(parse_document(&json!({ "title": "x" })).is_empty());
        assert!(parse_document(&json!("nope")).is_empty());
    }
}
