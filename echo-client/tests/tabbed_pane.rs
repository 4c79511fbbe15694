use echo_client::prelude::*;
use serde_json::{Value, json};
use webdom::{ListenerTarget, Mutation, ROOT_ID};

fn send(engine: &mut ClientEngine, ops: Value) -> Result<(), ClientError> {
    let message = json!({"parts": [{"processor": "tabbed-pane", "ops": ops}]});
    engine.process_json(&message.to_string())
}

fn add_tab(id: &str, index: usize, rendered: bool) -> Value {
    json!({
        "op": "add-tab", "eid": "tp", "tab-id": id, "tab-index": index,
        "title": id.to_uppercase(), "rendered": rendered
    })
}

/// Pane `tp` with rendered tabs `a` (active) and `b`, and unrendered `c`.
fn engine(quirks: PlatformQuirks) -> ClientEngine {
    let mut engine = ClientEngine::new(EngineConfig::new().with_quirks(quirks));
    engine
        .document_mut()
        .append(ROOT_ID, Element::div().id("tp_cell"))
        .unwrap();
    send(
        &mut engine,
        json!([
            {"op": "init", "eid": "tp", "container-eid": "tp_cell", "active-tab": "a"},
            add_tab("a", 0, true),
            add_tab("b", 1, true),
            add_tab("c", 2, false)
        ]),
    )
    .unwrap();
    engine
}

fn pane(engine: &ClientEngine) -> &TabbedPane {
    engine.lookup::<TabbedPane>("tp").unwrap()
}

fn visible_panels(engine: &ClientEngine) -> Vec<String> {
    pane(engine)
        .tabs()
        .iter()
        .filter(|tab| {
            engine
                .document()
                .style_property(&format!("tp_content_{}", tab.id), "display")
                == Some("block")
        })
        .map(|tab| tab.id.clone())
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_create_builds_header_and_content() {
    let engine = engine(PlatformQuirks::standard());
    let document = engine.document();
    assert_eq!(document.parent("tp"), Some("tp_cell"));
    assert_eq!(document.parent("tp_header"), Some("tp"));
    assert_eq!(document.parent("tp_content"), Some("tp"));
    assert_eq!(document.style_property("tp_content", "top"), Some("32px"));
    assert_eq!(document.style_property("tp_header", "height"), Some("33px"));
    assert_eq!(document.style_property("tp", "top"), Some("2px"));
    assert_eq!(document.style_property("tp", "left"), Some("0px"));
    assert!(document.listeners().has(&ListenerTarget::element("tp_header"), EventKind::Click));
}

#[test]
fn test_tabs_render_in_index_order() {
    let mut engine = engine(PlatformQuirks::none());
    send(&mut engine, json!([add_tab("d", 1, true)])).unwrap();

    assert_eq!(
        engine.document().children("tp_header_tr"),
        ["tp_header_td_a", "tp_header_td_d", "tp_header_td_b", "tp_header_td_c"]
    );
    let ids: Vec<&str> = pane(&engine).tabs().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "d", "b", "c"]);
    assert_eq!(engine.document().text("tp_header_div_d"), Some("D"));
}

#[test]
fn test_untitled_tab_shows_placeholder() {
    let mut engine = engine(PlatformQuirks::none());
    send(&mut engine, json!([{"op": "add-tab", "eid": "tp", "tab-id": "x", "tab-index": 9}]))
        .unwrap();
    assert_eq!(engine.document().text("tp_header_div_x"), Some("*"));
    assert_eq!(pane(&engine).tabs().last().map(|t| t.id.as_str()), Some("x"));
}

#[test]
fn test_pane_tab_has_no_content_insets() {
    let mut engine = engine(PlatformQuirks::none());
    send(
        &mut engine,
        json!([{"op": "add-tab", "eid": "tp", "tab-id": "p", "tab-index": 0, "pane": true}]),
    )
    .unwrap();
    assert_eq!(
        engine.document().style_property("tp_content_p", "padding"),
        Some("0px 0px 0px 0px")
    );
}

#[test]
fn test_bottom_tabs_surround_border() {
    let mut engine = ClientEngine::default();
    engine
        .document_mut()
        .append(ROOT_ID, Element::div().id("cell"))
        .unwrap();
    send(
        &mut engine,
        json!([{"op": "init", "eid": "tp", "container-eid": "cell",
                "tab-position": "bottom", "border-type": "surround", "insets": "3px"}]),
    )
    .unwrap();
    let document = engine.document();
    assert_eq!(document.style_property("tp_header", "bottom"), Some("0px"));
    assert_eq!(document.style_property("tp_content", "bottom"), Some("32px"));
    assert_eq!(document.style_property("tp", "left"), Some("3px"));
    assert!(document.style_property("tp_content", "border").is_some());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_active_tab_displayed_on_add() {
    let engine = engine(PlatformQuirks::standard());
    assert_eq!(pane(&engine).active_tab(), Some("a"));
    assert_eq!(visible_panels(&engine), ["a"]);
    let document = engine.document();
    assert_eq!(document.style_property("tp_header_div_a", "cursor"), Some("default"));
    assert_eq!(document.style_property("tp_header_div_b", "cursor"), Some("pointer"));
    assert_eq!(document.style_property("tp_header_div_a", "height"), Some("26px"));
    assert_eq!(document.style_property("tp_header_div_b", "height"), Some("23px"));
}

#[test]
fn test_select_tab_is_idempotent() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([{"op": "set-active-tab", "eid": "tp", "active-tab": "a"}])).unwrap();
    assert_eq!(visible_panels(&engine), ["a"]);
    assert_eq!(
        engine.document().style_property("tp_header_div_a", "cursor"),
        Some("default")
    );

    send(&mut engine, json!([{"op": "set-active-tab", "eid": "tp", "active-tab": "b"}])).unwrap();
    assert_eq!(visible_panels(&engine), ["b"]);
    assert_eq!(pane(&engine).active_tab(), Some("b"));
}

#[test]
fn test_set_active_tab_marks_rendered() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([{"op": "set-active-tab", "eid": "tp", "active-tab": "c"}])).unwrap();
    assert!(pane(&engine).tab("c").unwrap().rendered);
    assert_eq!(visible_panels(&engine), ["c"]);
}

#[test]
fn test_select_requests_layout_redraw() {
    let mut engine = engine(PlatformQuirks::standard());
    let before = engine.document().layout_redraws();
    send(&mut engine, json!([{"op": "set-active-tab", "eid": "tp", "active-tab": "b"}])).unwrap();
    assert_eq!(engine.document().layout_redraws(), before + 1);
}

#[test]
fn test_remove_active_tab_clears_selection() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([{"op": "remove-tab", "eid": "tp", "tab-id": "a"}])).unwrap();

    assert_eq!(pane(&engine).active_tab(), None);
    assert!(visible_panels(&engine).is_empty());
    assert!(!engine.document().contains("tp_content_a"));
    assert!(!engine.document().contains("tp_header_td_a"));
    assert_eq!(pane(&engine).tabs().len(), 2);
}

#[test]
fn test_remove_inactive_tab_keeps_selection() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([{"op": "remove-tab", "eid": "tp", "tab-id": "b"}])).unwrap();
    assert_eq!(pane(&engine).active_tab(), Some("a"));
    assert_eq!(visible_panels(&engine), ["a"]);
}

#[test]
fn test_reflow_reappends_header_when_enabled() {
    let mut engine = engine(PlatformQuirks::standard());
    engine.document_mut().take_mutations();
    send(&mut engine, json!([{"op": "set-active-tab", "eid": "tp", "active-tab": "b"}])).unwrap();

    let mutations = engine.document_mut().take_mutations();
    assert!(mutations.contains(&Mutation::ChildRemoved {
        parent: "tp_header_td_b".to_string(),
        child: "tp_header_div_b".to_string(),
    }));
    assert!(mutations.contains(&Mutation::ChildAdded {
        parent: "tp_header_td_b".to_string(),
        child: "tp_header_div_b".to_string(),
        index: 0,
    }));
    assert_eq!(engine.document().parent("tp_header_div_b"), Some("tp_header_td_b"));
}

#[test]
fn test_no_reflow_without_quirk() {
    let mut engine = engine(PlatformQuirks::none());
    engine.document_mut().take_mutations();
    send(&mut engine, json!([{"op": "set-active-tab", "eid": "tp", "active-tab": "b"}])).unwrap();
    assert!(engine.document().mutations().is_empty());
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_click_rendered_tab_switches_locally() {
    let mut engine = engine(PlatformQuirks::standard());
    let result = engine.dispatch(DomEvent::click("tp_header_div_b"));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(visible_panels(&engine), ["b"]);
    let outgoing = engine.outgoing();
    assert_eq!(
        outgoing.property("tp", "activeTab").and_then(|v| v.as_text()),
        Some("b")
    );
    assert!(!outgoing.connection_requested());
}

#[test]
fn test_click_unrendered_tab_requests_connection() {
    let mut engine = engine(PlatformQuirks::standard());
    engine.dispatch(DomEvent::click("tp_header_div_c"));

    let outgoing = engine.outgoing();
    assert_eq!(
        outgoing.property("tp", "activeTab").and_then(|v| v.as_text()),
        Some("c")
    );
    assert!(outgoing.connection_requested());
    assert_eq!(visible_panels(&engine), ["a"]);
}

#[test]
fn test_click_outside_headers_ignored() {
    let mut engine = engine(PlatformQuirks::standard());
    assert_eq!(engine.dispatch(DomEvent::click("tp_header_tr")), EventResult::Ignored);
    assert!(engine.outgoing().is_empty());
}

#[test]
fn test_disabled_pane_ignores_clicks() {
    let mut engine = ClientEngine::default();
    engine
        .document_mut()
        .append(ROOT_ID, Element::div().id("cell"))
        .unwrap();
    send(
        &mut engine,
        json!([
            {"op": "init", "eid": "tp", "container-eid": "cell", "enabled": false},
            {"op": "add-tab", "eid": "tp", "tab-id": "a", "rendered": true}
        ]),
    )
    .unwrap();
    assert_eq!(engine.dispatch(DomEvent::click("tp_header_div_a")), EventResult::Ignored);
    assert_eq!(pane(&engine).active_tab(), None);
}

// ============================================================================
// Errors and lifecycle
// ============================================================================

#[test]
fn test_add_tab_to_unknown_pane_fails() {
    let mut engine = engine(PlatformQuirks::standard());
    let err = send(
        &mut engine,
        json!([{"op": "add-tab", "eid": "nope", "tab-id": "z"}]),
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::ComponentNotFound { id, .. } if id == "nope"));
}

#[test]
fn test_unknown_tab_operations_ignored() {
    let mut engine = engine(PlatformQuirks::standard());
    send(
        &mut engine,
        json!([
            {"op": "remove-tab", "eid": "tp", "tab-id": "zz"},
            {"op": "set-active-tab", "eid": "tp", "active-tab": "zz"},
            {"op": "set-active-tab", "eid": "other", "active-tab": "a"}
        ]),
    )
    .unwrap();
    assert_eq!(pane(&engine).active_tab(), Some("a"));
}

#[test]
fn test_invalid_colour_rejected() {
    let mut engine = ClientEngine::default();
    engine
        .document_mut()
        .append(ROOT_ID, Element::div().id("cell"))
        .unwrap();
    let err = send(
        &mut engine,
        json!([{"op": "init", "eid": "tp", "container-eid": "cell",
                "tab-active-background": "nope"}]),
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::InvalidAttribute { name, .. } if name == "tab-active-background"));
    assert!(!engine.registry().contains("tp"));
}

#[test]
fn test_dispose_removes_listener() {
    let mut engine = engine(PlatformQuirks::standard());
    send(&mut engine, json!([{"op": "dispose", "eid": "tp"}])).unwrap();
    assert!(!engine.registry().contains("tp"));
    assert!(!engine
        .document()
        .listeners()
        .has(&ListenerTarget::element("tp_header"), EventKind::Click));
}
