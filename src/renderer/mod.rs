//! Renderer system: trait, context, view tree.

pub mod context;
pub mod traits;
pub mod view;

pub use context::RenderContext;
pub use traits::Renderer;
pub use view::{Content, Link, View};
