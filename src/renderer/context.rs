//! Render context: configuration plus prop-reading helpers.

use serde_json::Value;

use crate::config::EngineConfig;
use crate::style::{CompiledStyle, StyleCompiler};
use crate::value::{coerce, Resolver};

/// Everything a renderer may read besides its props.
///
/// Passed explicitly to every render call; there is no ambient global state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a EngineConfig,
    resolver: Resolver,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            resolver: Resolver::new(config.max_depth),
        }
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// A style compiler sharing this context's config.
    pub fn compiler(&self) -> StyleCompiler<'a> {
        StyleCompiler::new(self.config)
    }

    // -- prop helpers -------------------------------------------------------

    /// The first alias that resolves to a non-empty string.
    pub fn text(&self, props: &Value, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.resolver.opt_string(self.resolver.field(props, key)))
    }

    /// The first alias that coerces to a number.
    pub fn number(&self, props: &Value, keys: &[&str]) -> Option<f64> {
        keys.iter().find_map(|key| {
            self.resolver
                .field(props, key)
                .and_then(|v| self.resolver.unwrap(v))
                .and_then(coerce::to_number)
        })
    }

    /// The first alias that coerces to a boolean, else `fallback`.
    pub fn flag(&self, props: &Value, keys: &[&str], fallback: bool) -> bool {
        keys.iter()
            .find_map(|key| {
                self.resolver
                    .field(props, key)
                    .and_then(|v| self.resolver.unwrap(v))
                    .and_then(coerce::to_bool)
            })
            .unwrap_or(fallback)
    }

    /// The first alias that resolves to an array.
    pub fn items<'v>(&self, props: &'v Value, keys: &[&str]) -> &'v [Value] {
        keys.iter()
            .find_map(|key| match self.resolver.field(props, key).and_then(|v| self.resolver.unwrap(v)) {
                Some(Value::Array(items)) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Compile the style dictionary at `key`; empty when absent or malformed.
    pub fn style(&self, props: &Value, key: &str) -> CompiledStyle {
        self.compiler().compile_field(props, key)
    }
}
