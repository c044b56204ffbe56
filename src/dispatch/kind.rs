//! Known component kinds.

use std::fmt;

/// Every component kind the engine can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Header,
    MobileHeader,
    Banner,
    Carousel,
    Button,
    Text,
    Image,
    Spacer,
    Divider,
    Footer,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Header,
        ComponentKind::MobileHeader,
        ComponentKind::Banner,
        ComponentKind::Carousel,
        ComponentKind::Button,
        ComponentKind::Text,
        ComponentKind::Image,
        ComponentKind::Spacer,
        ComponentKind::Divider,
        ComponentKind::Footer,
    ];

    /// Canonical lower-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Header => "header",
            ComponentKind::MobileHeader => "mobile_header",
            ComponentKind::Banner => "banner",
            ComponentKind::Carousel => "carousel",
            ComponentKind::Button => "button",
            ComponentKind::Text => "text",
            ComponentKind::Image => "image",
            ComponentKind::Spacer => "spacer",
            ComponentKind::Divider => "divider",
            ComponentKind::Footer => "footer",
        }
    }

    /// The dedicated mobile variant of this kind, if the family has one.
    pub fn mobile_variant(&self) -> Option<ComponentKind> {
        match self {
            ComponentKind::Header => Some(ComponentKind::MobileHeader),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ids_are_lowercase_and_unique() {
        let mut ids: Vec<&str> = ComponentKind::ALL.iter().map(|k| k.as_str()).collect();
        assert!(ids.iter().all(|id| *id == id.to_lowercase()));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn only_header_has_mobile_variant() {
        assert_eq!(
            ComponentKind::Header.mobile_variant(),
            Some(ComponentKind::MobileHeader)
        );
        let with_variant = ComponentKind::ALL
            .iter()
            .filter(|k| k.mobile_variant().is_some())
            .count();
        assert_eq!(with_variant, 1);
    }

    #[test]
    fn display_uses_canonical_id() {
        assert_eq!(ComponentKind::MobileHeader.to_string(), "mobile_header");
    }
}
