//! # layout-dsl
//!
//! Normalization and style compilation engine for a server-authored Layout
//! DSL rendered by mobile clients.
//!
//! A fetched layout document is a list of sections. Each section names a
//! component, carries a loosely-typed property tree (values wrapped in
//! `{value}`/`{const}`/`{properties}` containers, CSS-like style strings), and
//! optionally a visibility block. This crate turns that into typed,
//! platform-neutral views a host can map onto native widgets.
//!
//! ## Core Systems
//!
//! - **[`value`]**: Value resolver: wrapper unwrapping and typed coercion
//! - **[`style`]**: Style compiler: units, shorthands, gradients, shadows
//! - **[`section`]**: Section and document parsing
//! - **[`visibility`]**: Per-section mobile visibility
//! - **[`dispatch`]**: Component identifier → renderer lookup
//! - **[`renderer`]**: Renderer trait, render context, view tree
//! - **[`renderers`]**: Built-in component renderers
//! - **[`screen`]**: Whole-document pipeline
//! - **[`config`]**: Engine tunables
//!
//! ## Example
//!
//! ```
//! use layout_dsl::{EngineConfig, RenderContext, Screen};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "sections": [
//!         { "component": "Header", "props": { "title": { "value": "Shop" } } },
//!         { "component": "text", "props": { "text": "Hi" }, "visibility": { "hideOnMobile": true } }
//!     ]
//! });
//! let config = EngineConfig::default();
//! let screen = Screen::build(&doc, &RenderContext::new(&config));
//! assert_eq!(screen.len(), 1);
//! ```

// Foundation
pub mod config;
pub mod value;

// Normalization
pub mod section;
pub mod style;
pub mod visibility;

// Rendering
pub mod dispatch;
pub mod renderer;
pub mod renderers;
pub mod screen;

pub use config::EngineConfig;
pub use dispatch::{ComponentKind, Dispatcher, RendererHandle, RendererRegistry, Resolution};
pub use renderer::{Content, RenderContext, Renderer, View};
pub use screen::{Screen, SkipReason, Skipped};
pub use section::{parse_document, Section, SectionError};
pub use style::{CompiledStyle, StyleCompiler, StyleError, StyleValue};
pub use value::{Resolver, SchemaValue};
pub use visibility::VisibilityResolver;
