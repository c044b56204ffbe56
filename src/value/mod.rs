//! Value resolver: unwraps schema-shaped containers into primitives.
//!
//! Layout DSL values arrive wrapped in any mix of `{value: x}`, `{const: x}`
//! and `{properties: {...}}` containers. [`Resolver`] peels those wrappers in
//! fixed priority order (`value` > `const` > `properties`) and layers typed
//! coercions on top. Resolution never fails: every unresolvable shape yields
//! the caller's fallback.

pub mod coerce;

use serde_json::Value;
use tracing::trace;

/// A Layout DSL value: primitive, wrapper, container, or plain data.
pub type SchemaValue = Value;

/// Default bound on the number of wrappers unwrapped for a single value.
pub const MAX_DEPTH: usize = 32;

const WRAPPER_KEYS: [&str; 3] = ["value", "const", "properties"];

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Depth-bounded schema value resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    max_depth: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}

impl Resolver {
    /// Create a resolver that unwraps at most `max_depth` wrappers.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The wrapper depth bound.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Peel wrappers off `input` and return the terminal value.
    ///
    /// Returns `None` for `null` (at any level) and when the depth bound is
    /// exhausted. A plain object without wrapper keys is terminal.
    pub fn unwrap<'a>(&self, input: &'a Value) -> Option<&'a Value> {
        let mut current = input;
        let mut depth = 0;
        loop {
            match current {
                Value::Null => return None,
                Value::Object(map) => {
                    let inner = WRAPPER_KEYS.iter().find_map(|key| map.get(*key));
                    match inner {
                        Some(inner) => {
                            if depth == self.max_depth {
                                trace!(max_depth = self.max_depth, "schema value exceeded wrapper depth");
                                return None;
                            }
                            depth += 1;
                            current = inner;
                        }
                        None => return Some(current),
                    }
                }
                other => return Some(other),
            }
        }
    }

    /// Resolve `input` to its terminal value, or `fallback`.
    pub fn value<'a>(&self, input: Option<&'a Value>, fallback: &'a Value) -> &'a Value {
        input.and_then(|v| self.unwrap(v)).unwrap_or(fallback)
    }

    /// Resolve and coerce to a boolean.
    pub fn bool(&self, input: Option<&Value>, fallback: bool) -> bool {
        input
            .and_then(|v| self.unwrap(v))
            .and_then(coerce::to_bool)
            .unwrap_or(fallback)
    }

    /// Resolve and coerce to a number.
    pub fn number(&self, input: Option<&Value>, fallback: f64) -> f64 {
        input
            .and_then(|v| self.unwrap(v))
            .and_then(coerce::to_number)
            .unwrap_or(fallback)
    }

    /// Resolve and coerce to a string.
    pub fn string(&self, input: Option<&Value>, fallback: &str) -> String {
        self.opt_string(input).unwrap_or_else(|| fallback.to_owned())
    }

    /// Resolve and coerce to a string, `None` when absent or empty.
    pub fn opt_string(&self, input: Option<&Value>) -> Option<String> {
        input.and_then(|v| self.unwrap(v)).and_then(coerce::to_string)
    }

    /// Fetch `key` from the object `input` resolves to.
    pub fn field<'a>(&self, input: &'a Value, key: &str) -> Option<&'a Value> {
        match self.unwrap(input)? {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Follow a chain of keys through wrapped objects.
    pub fn field_path<'a>(&self, input: &'a Value, path: &[&str]) -> Option<&'a Value> {
        path.iter()
            .try_fold(input, |current, key| self.field(current, key))
    }

    /// The first alias key present in the object `block` resolves to.
    ///
    /// A key counts as present even when its value is `null`.
    pub fn first_present<'a>(&self, block: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
        match self.unwrap(block)? {
            Value::Object(map) => aliases.iter().find_map(|alias| map.get(*alias)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Free functions (default depth bound)
// ---------------------------------------------------------------------------

/// Resolve `input` to its terminal value, or `fallback`.
pub fn resolve<'a>(input: Option<&'a Value>, fallback: &'a Value) -> &'a Value {
    Resolver::default().value(input, fallback)
}

/// Resolve and coerce to a boolean.
pub fn resolve_bool(input: Option<&Value>, fallback: bool) -> bool {
    Resolver::default().bool(input, fallback)
}

/// Resolve and coerce to a number.
pub fn resolve_number(input: Option<&Value>, fallback: f64) -> f64 {
    Resolver::default().number(input, fallback)
}

/// Resolve and coerce to a string.
pub fn resolve_string(input: Option<&Value>, fallback: &str) -> String {
    Resolver::default().string(input, fallback)
}
