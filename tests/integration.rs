//! Integration tests for layout-dsl.
//!
//! These tests exercise the public API from outside the crate: value
//! resolution, style compilation, visibility, dispatch, and the whole
//! document-to-views pipeline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use layout_dsl::dispatch::{ComponentKind, Dispatcher, RendererRegistry};
use layout_dsl::renderer::{Content, RenderContext};
use layout_dsl::section::Section;
use layout_dsl::style::{compile, compile_value, StyleError, StyleValue};
use layout_dsl::value::{resolve, resolve_bool, resolve_number, resolve_string};
use layout_dsl::visibility::should_render;
use layout_dsl::{EngineConfig, Screen, SkipReason};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

fn dict(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// Counts WARN-level events.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

// ---------------------------------------------------------------------------
// Value resolution
// ---------------------------------------------------------------------------

#[test]
fn test_resolution_is_idempotent_on_primitives() {
    let fallback = json!("fb");
    for x in [json!(0), json!(false), json!("a"), json!(1.5)] {
        let once = resolve(Some(&x), &fallback).clone();
        let twice = resolve(Some(&once), &fallback).clone();
        assert_eq!(once, twice);
        assert_eq!(once, x);
    }
}

#[test]
fn test_fallback_totality() {
    let fallback = json!("fb");
    assert_eq!(resolve(None, &fallback), &fallback);
    assert_eq!(resolve(Some(&Value::Null), &fallback), &fallback);
    assert_eq!(resolve(Some(&json!({ "value": null })), &fallback), &fallback);

    assert!(resolve_bool(Some(&json!({ "a": 1 })), true));
    assert!(!resolve_bool(Some(&json!("maybe")), false));
    assert_eq!(resolve_number(Some(&json!("abc")), 5.0), 5.0);
    assert_eq!(resolve_number(Some(&json!([1, 2])), 5.0), 5.0);
    assert_eq!(resolve_string(Some(&json!({ "const": "" })), "fb"), "fb");
}

#[test]
fn test_wrapper_priority() {
    let input = json!({ "const": "c", "value": { "properties": { "x": 1 } } });
    assert_eq!(resolve(Some(&input), &Value::Null), &json!({ "x": 1 }));
    assert_eq!(resolve_number(Some(&json!({ "value": { "const": "12px" } })), 0.0), 12.0);
}

#[test]
fn test_cyclic_depth_is_bounded() {
    let mut deep = json!(true);
    for _ in 0..100 {
        deep = json!({ "value": deep });
    }
    assert!(!resolve_bool(Some(&deep), false));
}

// ---------------------------------------------------------------------------
// Style compilation
// ---------------------------------------------------------------------------

#[test]
fn test_padding_expansion() {
    let two = compile(&dict(json!({ "padding": "4px 8px" })));
    assert_eq!(two.to_json(), json!({ "paddingVertical": 4.0, "paddingHorizontal": 8.0 }));

    let four = compile(&dict(json!({ "padding": "1px 2px 3px 4px" })));
    assert_eq!(
        four.to_json(),
        json!({ "paddingTop": 1.0, "paddingRight": 2.0, "paddingBottom": 3.0, "paddingLeft": 4.0 })
    );
}

#[test]
fn test_gradient_extraction() {
    let style = compile(&dict(json!({ "background": "linear-gradient(90deg, #111111, #222222)" })));
    let gradient = style.gradient().expect("gradient descriptor");
    assert_eq!(gradient.angle, 90.0);
    assert_eq!(gradient.colors, vec!["#111111".to_string(), "#222222".to_string()]);
    assert_eq!(style.text("backgroundColor"), Some("#111111"));
    assert_eq!(style.to_json()["gradient"]["type"], json!("linear"));
}

#[test]
fn test_gradient_keeps_named_colors() {
    let style = compile(&dict(json!({ "background": "linear-gradient(90deg, pink, crimson)" })));
    let gradient = style.gradient().expect("gradient descriptor");
    assert_eq!(gradient.colors, vec!["pink".to_string(), "crimson".to_string()]);
    assert_eq!(style.text("backgroundColor"), Some("pink"));
}

#[test]
fn test_relative_units_become_numbers() {
    let style = compile(&dict(json!({
        "fontSize": "2em",
        "width": "50%",
        "tintSize": "50%",
        "borderRadius": "8PX",
        "letterSpacing": "0.5em"
    })));
    assert_eq!(style.number("fontSize"), Some(2.0));
    assert_eq!(style.number("width"), Some(50.0));
    assert_eq!(style.number("tintSize"), Some(50.0));
    assert_eq!(style.number("borderRadius"), Some(8.0));
    assert_eq!(style.number("letterSpacing"), Some(8.0));
}

#[test]
fn test_font_shorthand_expansion() {
    let style = compile(&dict(json!({ "font": "bold 14px Arial" })));
    assert_eq!(
        style.to_json(),
        json!({ "fontWeight": "bold", "fontSize": 14.0, "fontFamily": "Arial" })
    );
}

#[test]
fn test_border_radius_circularity() {
    let percent = compile(&dict(json!({ "borderRadius": "50%" })));
    let sentinel = compile(&dict(json!({ "borderRadius": "999px" })));
    assert_eq!(percent.number("borderRadius"), sentinel.number("borderRadius"));
    assert_eq!(percent.number("borderRadius"), Some(EngineConfig::default().pill_radius));

    let per_corner = compile(&dict(json!({ "borderRadius": "4px 8px" })));
    assert!(!per_corner.contains("borderRadius"));
}

#[test]
fn test_length_units_round_trip() {
    let style = compile(&dict(json!({ "width": "240px", "fontSize": "14" })));
    assert_eq!(style.get("width"), Some(&StyleValue::Number(240.0)));
    assert_eq!(style.get("fontSize"), Some(&StyleValue::Number(14.0)));
}

#[test]
fn test_no_shorthand_keys_in_output() {
    let style = compile(&dict(json!({
        "padding": "4px",
        "margin": "1px 2px",
        "border": "1px solid #ccc",
        "borderTop": "2px dashed red",
        "boxShadow": "0 2px 8px rgba(0, 0, 0, 0.2)",
        "gap": 8
    })));
    for key in ["margin", "border", "borderTop", "boxShadow", "gap"] {
        assert!(!style.contains(key), "{key} leaked into compiled style");
    }
    assert_eq!(style.number("borderTopWidth"), Some(2.0));
    assert_eq!(style.text("shadowColor"), Some("rgba(0, 0, 0, 0.2)"));
    assert_eq!(style.number("elevation"), Some(4.0));
}

#[test]
fn test_compile_value_boundary() {
    assert!(matches!(compile_value(&json!("red")), Err(StyleError::NotAnObject(_))));
    assert!(compile_value(&Value::Null).unwrap().is_empty());
    let wrapped = compile_value(&json!({ "value": { "height": "10px" } })).unwrap();
    assert_eq!(wrapped.number("height"), Some(10.0));
}

#[test]
fn test_compiled_style_display() {
    let style = compile(&dict(json!({
        "margin": "8px 16px",
        "fontStyle": "italic",
        "objectFit": "fill"
    })));
    insta::assert_snapshot!(style.to_string(), @r"
    fontStyle: italic;
    marginHorizontal: 16;
    marginVertical: 8;
    resizeMode: stretch;
    ");
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

fn section_with(visibility: Value) -> Section {
    Section::new("text", json!({})).with_visibility(visibility)
}

#[test]
fn test_visibility_precedence() {
    assert!(!should_render(&section_with(json!({ "hideOnMobile": true, "showOnMobile": true }))));
}

#[test]
fn test_target_device_override() {
    assert!(!should_render(&section_with(json!({ "target": "desktop" }))));
    assert!(should_render(&section_with(json!({ "target": "mobile", "showOnMobile": true }))));
    assert!(!should_render(&section_with(json!({ "target": "mobile", "showOnMobile": false }))));
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn test_dispatcher_fallback_logs_once() {
    let section = Section::new("totally_unknown_widget", json!({}));
    let mut handle = None;
    let warnings = count_warnings(|| {
        handle = Dispatcher::global().resolve_renderer(&section);
    });
    assert!(handle.is_none());
    assert_eq!(warnings, 1);
}

#[test]
fn test_known_component_logs_nothing() {
    let section = Section::new(json!({ "value": "Banner" }), json!({}));
    let mut kind = None;
    let warnings = count_warnings(|| {
        kind = Dispatcher::global().resolve_renderer(&section).map(|h| h.kind());
    });
    assert_eq!(kind, Some(ComponentKind::Banner));
    assert_eq!(warnings, 0);
}

#[test]
fn test_registry_shared_across_threads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = ComponentKind::ALL
            .into_iter()
            .map(|kind| scope.spawn(move || RendererRegistry::global().get(kind.as_str()).map(|h| h.kind())))
            .collect();
        for (handle, kind) in handles.into_iter().zip(ComponentKind::ALL) {
            assert_eq!(handle.join().unwrap(), Some(kind));
        }
    });
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_screen_from_document() {
    let doc = json!({
        "value": {
            "sections": [
                {
                    "component": { "const": "Header" },
                    "props": { "properties": { "title": { "value": "Mobile Shop" } } }
                },
                {
                    "component": "hero",
                    "props": {
                        "image": "https://cdn.example.com/hero.png",
                        "style": { "background": "linear-gradient(to right, #000, #fff)" }
                    }
                },
                {
                    "component": "text",
                    "props": { "text": "Desktop only" },
                    "visibility": { "target": "web" }
                },
                { "component": "totally_unknown_widget" },
                {
                    "component": "button",
                    "props": { "label": "Buy", "style": { "padding": "8px 16px" } }
                }
            ]
        }
    });

    let config = EngineConfig::default();
    let ctx = RenderContext::new(&config);
    let mut screen = Screen::default();
    let warnings = count_warnings(|| {
        screen = Screen::build(&doc, &ctx);
    });
    assert_eq!(warnings, 1);

    let kinds: Vec<ComponentKind> = screen.views().iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![ComponentKind::MobileHeader, ComponentKind::Banner, ComponentKind::Button]
    );

    let reasons: Vec<&SkipReason> = screen.skipped().iter().map(|s| &s.reason).collect();
    assert_eq!(
        reasons,
        vec![
            &SkipReason::Hidden,
            &SkipReason::Unrecognized("totally_unknown_widget".into())
        ]
    );

    let banner = &screen.views()[1];
    assert_eq!(banner.style.text("backgroundColor"), Some("#000"));
    assert_eq!(banner.style.gradient().map(|g| g.angle), Some(90.0));

    let Content::Button { label, .. } = &screen.views()[2].content else {
        panic!("expected button content");
    };
    assert_eq!(label, "Buy");
}

#[test]
fn test_screen_json_output() {
    let doc = json!([{ "component": "spacer", "props": { "height": 12 } }]);
    let config = EngineConfig::default();
    let screen = Screen::build(&doc, &RenderContext::new(&config));
    assert_eq!(
        screen.to_json(),
        json!([{
            "kind": "spacer",
            "style": { "height": 12.0 },
            "content": { "type": "spacer", "height": 12.0 }
        }])
    );
}

#[test]
fn test_custom_config_flows_to_renderers() {
    let doc = json!([{ "component": "button", "props": { "style": { "borderRadius": "100%" } } }]);
    let config = EngineConfig::default().with_pill_radius(500.0);
    let screen = Screen::build(&doc, &RenderContext::new(&config));
    assert_eq!(screen.views()[0].style.number("borderRadius"), Some(500.0));
}
