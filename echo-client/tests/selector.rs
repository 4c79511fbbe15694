use echo_client::components::selector::DHTML_SELECTION_STYLE;
use echo_client::prelude::*;
use serde_json::{Value, json};
use webdom::{ListenerTarget, ROOT_ID};

fn engine(quirks: PlatformQuirks) -> ClientEngine {
    let mut engine = ClientEngine::new(EngineConfig::new().with_quirks(quirks));
    engine
        .document_mut()
        .append(ROOT_ID, Element::div().id("s1_cell"))
        .unwrap();
    engine
}

fn send(engine: &mut ClientEngine, ops: Value) {
    let message = json!({"parts": [{"processor": "selector", "ops": ops}]});
    engine.process_json(&message.to_string()).unwrap();
}

fn content(styled: bool) -> Value {
    json!({"op": "load-content", "content-id": "l1", "styled": styled, "items": [
        {"value": "alpha"},
        {"value": "beta", "style": "color:#ff0000;"},
        {"value": "gamma"},
        {"value": "delta"}
    ]})
}

fn init(extra: Value) -> Value {
    let mut init = json!({"op": "init", "eid": "s1", "container-eid": "s1_cell", "content-id": "l1"});
    if let (Some(init), Some(extra)) = (init.as_object_mut(), extra.as_object()) {
        init.extend(extra.clone());
    }
    init
}

fn selection(engine: &ClientEngine) -> Option<Vec<usize>> {
    engine
        .outgoing()
        .property("s1", "selection")
        .map(PropertyValue::indices)
}

// ============================================================================
// Native rendering
// ============================================================================

#[test]
fn test_drop_down_renders_options() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([content(false), init(json!({"selection-index": 2}))]));

    let selector = engine.lookup::<Selector>("s1").unwrap();
    assert_eq!(selector.mode(), RenderMode::Native);
    assert_eq!(selector.values().len(), 4);

    let document = engine.document();
    assert_eq!(document.get("s1").unwrap().tag, "select");
    assert_eq!(document.parent("s1"), Some("s1_cell"));
    assert_eq!(document.text("s1_item_1"), Some("beta"));
    assert_eq!(document.selected_index("s1"), 2);
    assert!(!document.contains("s1_null"));
    assert!(document.listeners().has(&ListenerTarget::element("s1"), EventKind::Change));
}

#[test]
fn test_drop_down_ignores_list_box_attributes() {
    let mut engine = engine(PlatformQuirks::standard());
    send(
        &mut engine,
        json!([content(false), init(json!({
            "selection-index": 2,
            "multiple": true,
            "rollover-style": "color:#00ff00;"
        }))]),
    );

    let selector = engine.lookup::<Selector>("s1").unwrap();
    assert!(!selector.is_multiple_selection());
    assert_eq!(selector.selected_indices(), [2]);
    let document = engine.document();
    assert_eq!(document.selected_index("s1"), 2);
    assert_eq!(document.attribute("s1", "multiple"), None);
    assert!(!document.listeners().has(&ListenerTarget::element("s1"), EventKind::MouseOver));
}

#[test]
fn test_null_option_added_then_removed() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([content(false), init(json!({}))]));

    assert!(engine.lookup::<Selector>("s1").unwrap().null_option_active());
    assert_eq!(engine.document().options("s1")[0], "s1_null");
    assert!(engine.document().is_selected("s1_null"));

    // Option 2 is "beta": the null option sits in front.
    engine.document_mut().choose_option("s1", 2, false).unwrap();
    let result = engine.dispatch(DomEvent::change("s1"));

    assert_eq!(result, EventResult::Consumed);
    assert!(!engine.document().contains("s1_null"));
    assert!(!engine.lookup::<Selector>("s1").unwrap().null_option_active());
    assert_eq!(selection(&engine), Some(vec![1]));
    assert!(!engine.outgoing().connection_requested());
}

#[test]
fn test_null_option_not_needed_without_quirk() {
    let mut engine = engine(PlatformQuirks::none());
    send(&mut engine, json!([content(false), init(json!({}))]));
    assert!(!engine.document().contains("s1_null"));
    assert_eq!(engine.document().selected_index("s1"), -1);
}

#[test]
fn test_list_box_never_gets_null_option() {
    let mut engine = engine(PlatformQuirks::standard());
    send(
        &mut engine,
        json!([content(false), init(json!({"type": "list-box", "multiple": true}))]),
    );
    let document = engine.document();
    assert!(!document.contains("s1_null"));
    assert_eq!(document.attribute("s1", "size"), Some("5"));
    assert_eq!(document.attribute("s1", "multiple"), Some("multiple"));
}

#[test]
fn test_native_multiple_selection_is_read_back() {
    let mut engine = engine(PlatformQuirks::standard());
    send(
        &mut engine,
        json!([content(false), init(json!({
            "type": "list-box", "multiple": true, "selection": [{"index": 0}]
        }))]),
    );

    engine.document_mut().choose_option("s1", 3, true).unwrap();
    engine.dispatch(DomEvent::change("s1"));
    assert_eq!(selection(&engine), Some(vec![0, 3]));
}

#[test]
fn test_out_of_range_selection_dropped() {
    let mut engine = engine(PlatformQuirks::standard());
    send(
        &mut engine,
        json!([content(false), init(json!({
            "type": "list-box", "multiple": true, "selection": [{"index": 1}, {"index": 12}]
        }))]),
    );
    assert_eq!(engine.lookup::<Selector>("s1").unwrap().selected_indices(), [1]);
    assert!(engine.document().is_selected("s1_item_1"));
}

#[test]
fn test_rejected_input_reverts_selection() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([content(false), init(json!({"selection-index": 0}))]));
    engine.input_mut().disable("s1");

    engine.document_mut().choose_option("s1", 2, false).unwrap();
    let result = engine.dispatch(DomEvent::change("s1"));

    assert_eq!(result, EventResult::Ignored);
    assert!(engine.document().is_selected("s1_item_0"));
    assert!(!engine.document().is_selected("s1_item_2"));
    assert!(engine.outgoing().is_empty());
}

#[test]
fn test_server_notify_requests_connection() {
    let mut engine = engine(PlatformQuirks::standard());
    send(
        &mut engine,
        json!([content(false), init(json!({"server-notify": true, "selection-index": 0}))]),
    );

    engine.document_mut().choose_option("s1", 1, false).unwrap();
    engine.dispatch(DomEvent::change("s1"));

    let outgoing = engine.outgoing();
    assert!(outgoing.connection_requested());
    assert_eq!(outgoing.action().map(|a| a.eid.as_str()), Some("s1"));
    assert_eq!(selection(&engine), Some(vec![1]));
}

// ============================================================================
// Synthesized rendering
// ============================================================================

#[test]
fn test_list_box_synthesized_when_dom_update_broken() {
    let mut engine = engine(PlatformQuirks::trident());
    send(&mut engine, json!([content(true), init(json!({"type": "list-box"}))]));

    assert_eq!(engine.lookup::<Selector>("s1").unwrap().mode(), RenderMode::Dhtml);
    let document = engine.document();
    assert_eq!(document.get("s1").unwrap().tag, "div");
    assert_eq!(document.style_property("s1", "height"), Some("6em"));
    assert_eq!(document.style_property("s1_item_1", "color"), Some("#ff0000"));
    assert!(document.listeners().has(&ListenerTarget::element("s1"), EventKind::Click));
    assert!(document.listeners().has(&ListenerTarget::element("s1"), EventKind::SelectStart));
}

#[test]
fn test_drop_down_stays_native_when_dom_update_broken() {
    let mut engine = engine(PlatformQuirks::trident());
    send(&mut engine, json!([content(false), init(json!({}))]));
    assert_eq!(engine.lookup::<Selector>("s1").unwrap().mode(), RenderMode::Native);
}

#[test]
fn test_synthesized_ctrl_click_toggles() {
    let mut engine = engine(PlatformQuirks::trident());
    send(
        &mut engine,
        json!([content(false), init(json!({
            "type": "list-box", "multiple": true, "selection": [{"index": 0}]
        }))]),
    );

    let result = engine.dispatch(DomEvent::click("s1_item_2").with_modifiers(Modifiers::ctrl()));
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(selection(&engine), Some(vec![0, 2]));
    assert_eq!(
        engine.document().style_property("s1_item_2", "background-color"),
        Some("#0a246a")
    );

    engine.dispatch(DomEvent::click("s1_item_0").with_modifiers(Modifiers::meta()));
    assert_eq!(selection(&engine), Some(vec![2]));
    assert_eq!(engine.document().style_property("s1_item_0", "background-color"), None);

    engine.dispatch(DomEvent::click("s1_item_3"));
    assert_eq!(selection(&engine), Some(vec![3]));
    assert_eq!(engine.document().style_property("s1_item_2", "background-color"), None);
}

#[test]
fn test_synthesized_single_select_ignores_toggle() {
    let mut engine = engine(PlatformQuirks::trident());
    send(
        &mut engine,
        json!([content(false), init(json!({"type": "list-box", "selection-index": 1}))]),
    );
    engine.dispatch(DomEvent::click("s1_item_2").with_modifiers(Modifiers::ctrl()));
    assert_eq!(selection(&engine), Some(vec![2]));
}

#[test]
fn test_synthesized_select_start_suppressed() {
    let mut engine = engine(PlatformQuirks::trident());
    send(&mut engine, json!([content(false), init(json!({"type": "list-box"}))]));
    let result = engine.dispatch(DomEvent::select_start(Some("s1_item_1".to_string())));
    assert_eq!(result, EventResult::Consumed);
}

#[test]
fn test_rollover_restores_selection_style() {
    let mut engine = engine(PlatformQuirks::trident());
    send(
        &mut engine,
        json!([content(true), init(json!({
            "type": "list-box",
            "selection-index": 1,
            "rollover-style": "background-color:#ffff00;"
        }))]),
    );

    engine.dispatch(DomEvent::mouse_over("s1_item_1"));
    assert_eq!(engine.lookup::<Selector>("s1").unwrap().rollover_index(), Some(1));
    assert_eq!(
        engine.document().style_property("s1_item_1", "background-color"),
        Some("#ffff00")
    );

    engine.dispatch(DomEvent::mouse_out("s1_item_1"));
    assert_eq!(engine.lookup::<Selector>("s1").unwrap().rollover_index(), None);
    let document = engine.document();
    assert_eq!(document.style_property("s1_item_1", "background-color"), Some("#0a246a"));
    assert!(DHTML_SELECTION_STYLE.contains("#0a246a"));
}

#[test]
fn test_rollover_on_unselected_item_restores_item_style() {
    let mut engine = engine(PlatformQuirks::standard());
    send(
        &mut engine,
        json!([content(true), init(json!({
            "type": "list-box",
            "rollover-style": "color:#00ff00;"
        }))]),
    );

    engine.dispatch(DomEvent::mouse_over("s1_item_1"));
    assert_eq!(engine.document().style_property("s1_item_1", "color"), Some("#00ff00"));
    engine.dispatch(DomEvent::mouse_out("s1_item_1"));
    assert_eq!(engine.document().style_property("s1_item_1", "color"), Some("#ff0000"));
}

// ============================================================================
// Content and lifecycle
// ============================================================================

#[test]
fn test_content_shared_between_selectors() {
    let mut engine = engine(PlatformQuirks::standard());
    engine
        .document_mut()
        .append(ROOT_ID, Element::div().id("s2_cell"))
        .unwrap();
    send(
        &mut engine,
        json!([
            content(false),
            init(json!({"selection-index": 0})),
            {"op": "init", "eid": "s2", "container-eid": "s2_cell", "content-id": "l1",
             "selection-index": 3}
        ]),
    );
    assert_eq!(engine.document().options("s1").len(), 4);
    assert_eq!(engine.document().options("s2").len(), 4);
    assert_eq!(engine.document().text("s2_item_3"), Some("delta"));
}

#[test]
fn test_content_does_not_outlive_message() {
    let mut engine = engine(PlatformQuirks::none());
    send(&mut engine, json!([content(false)]));
    send(&mut engine, json!([init(json!({}))]));
    assert!(engine.lookup::<Selector>("s1").unwrap().values().is_empty());
}

#[test]
fn test_dispose_unregisters() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([content(false), init(json!({}))]));
    send(&mut engine, json!([{"op": "dispose", "eid": "s1"}]));

    assert!(!engine.registry().contains("s1"));
    assert!(!engine.document().listeners().has(&ListenerTarget::element("s1"), EventKind::Change));
    assert_eq!(engine.dispatch(DomEvent::change("s1")), EventResult::Ignored);
}

#[test]
fn test_missing_container_fails() {
    let mut engine = engine(PlatformQuirks::standard());
    let message = json!({"parts": [{"processor": "selector", "ops": [
        {"op": "init", "eid": "s9", "container-eid": "nowhere"}
    ]}]});
    let err = engine.process_json(&message.to_string()).unwrap_err();
    assert!(matches!(err, ClientError::ContainerNotFound(id) if id == "nowhere"));
    assert!(!engine.registry().contains("s9"));
}
