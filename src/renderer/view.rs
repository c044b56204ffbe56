//! Rendered view tree.
//!
//! A [`View`] is the typed, platform-neutral output of a renderer: its kind,
//! a compiled style, kind-specific [`Content`], and child views. Hosts map
//! views onto native widgets; the engine itself never draws.

use serde::Serialize;
use serde_json::Value;

use crate::dispatch::ComponentKind;
use crate::style::CompiledStyle;

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// A footer or navigation link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Kind-specific view content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    Header {
        title: String,
        subtitle: Option<String>,
        logo: Option<String>,
        show_search: bool,
        show_cart: bool,
        compact: bool,
    },
    Banner {
        image: Option<String>,
        heading: Option<String>,
        subheading: Option<String>,
        link: Option<String>,
    },
    Carousel {
        autoplay: bool,
        interval_ms: u64,
        show_indicators: bool,
    },
    Button {
        label: String,
        action: Option<String>,
        disabled: bool,
        label_style: CompiledStyle,
    },
    Text {
        text: String,
        max_lines: Option<u32>,
    },
    Image {
        source: String,
        alt: Option<String>,
        aspect_ratio: Option<f64>,
    },
    Spacer {
        height: f64,
    },
    Divider {
        thickness: f64,
        color: String,
    },
    Footer {
        text: Option<String>,
        links: Vec<Link>,
    },
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// One rendered component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub kind: ComponentKind,
    pub style: CompiledStyle,
    pub content: Content,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<View>,
}

impl View {
    /// Create a childless view with an empty style.
    pub fn new(kind: ComponentKind, content: Content) -> Self {
        Self {
            kind,
            style: CompiledStyle::new(),
            content,
            children: Vec::new(),
        }
    }

    /// Set the style (builder pattern).
    pub fn with_style(mut self, style: CompiledStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the children (builder pattern).
    pub fn with_children(mut self, children: Vec<View>) -> Self {
        self.children = children;
        self
    }

    /// Serialize to JSON for hosts that consume the tree as data.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;
    use serde_json::json;

    #[test]
    fn builder() {
        let mut style = CompiledStyle::new();
        style.insert("height", StyleValue::Number(8.0));
        let child = View::new(ComponentKind::Spacer, Content::Spacer { height: 8.0 });
        let view = View::new(ComponentKind::Carousel, Content::Carousel {
            autoplay: false,
            interval_ms: 3000,
            show_indicators: true,
        })
        .with_style(style)
        .with_children(vec![child]);

        assert_eq!(view.children.len(), 1);
        assert_eq!(view.style.number("height"), Some(8.0));
    }

    #[test]
    fn json_shape() {
        let view = View::new(ComponentKind::Text, Content::Text {
            text: "Hi".into(),
            max_lines: None,
        });
        assert_eq!(
            view.to_json(),
            json!({
                "kind": "text",
                "style": {},
                "content": { "type": "text", "text": "Hi", "max_lines": null }
            })
        );
    }
}
