//! Engine configuration: recursion bound and style conversion constants.

use crate::value::MAX_DEPTH;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Tunables shared by the resolver, the style compiler, and the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum wrapper depth the value resolver will unwrap.
    pub max_depth: usize,
    /// Base font size that scales `em` letter spacing.
    pub base_font_size: f64,
    /// Radius emitted for percentage or "fully rounded" border radii.
    pub pill_radius: f64,
    /// Pixel radius at or above which a border radius counts as fully rounded.
    pub rounded_threshold: f64,
    /// Fixed opacity applied to compiled box shadows.
    pub shadow_opacity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            base_font_size: 16.0,
            pill_radius: 9999.0,
            rounded_threshold: 999.0,
            shadow_opacity: 0.3,
        }
    }
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolver depth bound (builder).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the base font size for `em` letter spacing (builder).
    pub fn with_base_font_size(mut self, size: f64) -> Self {
        self.base_font_size = size;
        self
    }

    /// Set the pill radius (builder).
    pub fn with_pill_radius(mut self, radius: f64) -> Self {
        self.pill_radius = radius;
        self
    }

    /// Set the radius at which a border radius counts as fully rounded (builder).
    pub fn with_rounded_threshold(mut self, threshold: f64) -> Self {
        self.rounded_threshold = threshold;
        self
    }

    /// Set the shadow opacity (builder).
    pub fn with_shadow_opacity(mut self, opacity: f64) -> Self {
        self.shadow_opacity = opacity;
        self
    }
}
