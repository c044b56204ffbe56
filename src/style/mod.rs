//! Style compiler: CSS-like style dictionaries → canonical style objects.

pub mod tokenizer;
pub mod units;
pub mod compiled;
pub mod gradient;
pub mod shorthand;
pub mod compiler;

pub use compiled::{CompiledStyle, Gradient, GradientKind, StyleValue};
pub use compiler::{compile, compile_value, StyleCompiler};

/// Errors from style compilation.
///
/// Only [`StyleError::NotAnObject`] ever leaves the compiler; the other
/// variants describe a single dropped property and are logged.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("style dictionary must be an object, got {0}")]
    NotAnObject(&'static str),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
    #[error("unsupported property: {0}")]
    Unsupported(String),
}
