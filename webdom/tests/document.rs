use webdom::{
    Document, DomError, DomEvent, Element, EventKind, ListenerTarget, Modifiers, Mutation, ROOT_ID,
};

fn list_document() -> Document {
    let mut document = Document::new();
    document
        .append(
            ROOT_ID,
            Element::div().id("list").children([
                Element::div().id("a").text("A"),
                Element::div().id("b").text("B"),
                Element::div().id("c").text("C"),
            ]),
        )
        .unwrap();
    document.take_mutations();
    document
}

// ============================================================================
// Tree
// ============================================================================

#[test]
fn test_builder_children_are_attached_in_order() {
    let document = list_document();
    assert_eq!(document.children("list"), ["a", "b", "c"]);
    assert_eq!(document.parent("b"), Some("list"));
    assert!(document.is_attached("c"));
    assert_eq!(document.ancestors("c"), ["c", "list", ROOT_ID]);
}

#[test]
fn test_duplicate_id_rejected() {
    let mut document = list_document();
    let err = document.append(ROOT_ID, Element::div().id("a")).unwrap_err();
    assert_eq!(err, DomError::DuplicateId("a".to_string()));
}

#[test]
fn test_nested_duplicate_id_leaves_document_untouched() {
    let mut document = list_document();
    let subtree = Element::div()
        .id("panel")
        .child(Element::div().id("panel_body"))
        .child(Element::div().id("b"));
    let err = document.append(ROOT_ID, subtree).unwrap_err();

    assert_eq!(err, DomError::DuplicateId("b".to_string()));
    assert!(!document.contains("panel"));
    assert!(!document.contains("panel_body"));
    assert_eq!(document.parent("b"), Some("list"));
}

#[test]
fn test_duplicate_id_within_subtree_rejected() {
    let mut document = list_document();
    let subtree = Element::div()
        .id("pair")
        .child(Element::div().id("twin"))
        .child(Element::div().id("twin"));
    let err = document.insert(subtree).unwrap_err();

    assert_eq!(err, DomError::DuplicateId("twin".to_string()));
    assert!(!document.contains("pair"));
}

#[test]
fn test_insert_before_and_at() {
    let mut document = list_document();
    document.insert(Element::div().id("z")).unwrap();
    document.insert_before("list", "z", "b").unwrap();
    assert_eq!(document.children("list"), ["a", "z", "b", "c"]);

    document.insert_at("list", "z", 99).unwrap();
    assert_eq!(document.children("list"), ["a", "b", "c", "z"]);

    let err = document.insert_before("list", "z", ROOT_ID).unwrap_err();
    assert!(matches!(err, DomError::NotAChild { .. }));
}

#[test]
fn test_cycle_rejected() {
    let mut document = list_document();
    let err = document.append_child("a", "list").unwrap_err();
    assert_eq!(err, DomError::HierarchyCycle("list".to_string()));
}

#[test]
fn test_detach_and_reappend_is_journaled() {
    let mut document = list_document();
    document.detach("a").unwrap();
    assert!(document.contains("a"));
    assert!(!document.is_attached("a"));
    document.append_child("list", "a").unwrap();
    assert_eq!(document.children("list"), ["b", "c", "a"]);

    assert_eq!(
        document.take_mutations(),
        vec![
            Mutation::ChildRemoved {
                parent: "list".to_string(),
                child: "a".to_string(),
            },
            Mutation::ChildAdded {
                parent: "list".to_string(),
                child: "a".to_string(),
                index: 2,
            },
        ]
    );
    assert!(document.mutations().is_empty());
}

#[test]
fn test_remove_drops_subtree_and_listeners() {
    let mut document = list_document();
    document
        .listeners_mut()
        .add(ListenerTarget::element("b"), EventKind::Click, "list");
    document
        .listeners_mut()
        .add(ListenerTarget::Document, EventKind::MouseUp, "list");

    document.remove("list").unwrap();
    assert!(!document.contains("list"));
    assert!(!document.contains("b"));
    assert!(!document.listeners().has(&ListenerTarget::element("b"), EventKind::Click));
    assert!(document.listeners().has(&ListenerTarget::Document, EventKind::MouseUp));
}

#[test]
fn test_clear_children() {
    let mut document = list_document();
    document.clear_children("list").unwrap();
    assert!(document.children("list").is_empty());
    assert!(!document.contains("a"));
}

// ============================================================================
// Style
// ============================================================================

#[test]
fn test_temporary_style_restores_original() {
    let mut document = list_document();
    document.set_css_text("a", "color:#000000;").unwrap();

    document.apply_temporary_style("a", "background-color:#0a246a;").unwrap();
    document.apply_temporary_style("a", "color:#ffffff;").unwrap();
    assert_eq!(document.style_property("a", "color"), Some("#ffffff"));
    assert_eq!(document.style_property("a", "background-color"), Some("#0a246a"));

    document.restore_original_style("a").unwrap();
    assert_eq!(document.style_property("a", "color"), Some("#000000"));
    assert_eq!(document.style_property("a", "background-color"), None);

    // Nothing saved: restoring is a no-op.
    document.restore_original_style("a").unwrap();
    assert_eq!(document.style_property("a", "color"), Some("#000000"));
}

// ============================================================================
// Form state
// ============================================================================

fn select_document(multiple: bool) -> Document {
    let mut document = Document::new();
    let mut select = Element::new("select").id("s");
    if multiple {
        select = select.attr("multiple", "multiple");
    }
    let select = select.children((0..3).map(|i| Element::new("option").id(format!("o{i}"))));
    document.append(ROOT_ID, select).unwrap();
    document
}

#[test]
fn test_choose_option_single() {
    let mut document = select_document(false);
    document.choose_option("s", 1, true).unwrap();
    document.choose_option("s", 2, true).unwrap();
    assert_eq!(document.selected_index("s"), 2);
    assert!(!document.is_selected("o1"));

    document.set_selected_index("s", -1).unwrap();
    assert_eq!(document.selected_index("s"), -1);
}

#[test]
fn test_choose_option_multiple_extend_toggles() {
    let mut document = select_document(true);
    document.choose_option("s", 0, false).unwrap();
    document.choose_option("s", 2, true).unwrap();
    assert!(document.is_selected("o0"));
    assert!(document.is_selected("o2"));

    document.choose_option("s", 0, true).unwrap();
    assert!(!document.is_selected("o0"));
    assert_eq!(document.selected_index("s"), 2);

    assert!(matches!(
        document.choose_option("s", 7, false),
        Err(DomError::NoSuchElement(_))
    ));
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_event_round_trips_through_json() {
    let event = DomEvent::click("a").with_modifiers(Modifiers::shift()).at(3, 4);
    let json = serde_json::to_string(&event).unwrap();
    let parsed: DomEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, event);

    let parsed: DomEvent = serde_json::from_str(r#"{"kind": "mouse-up", "client_y": 9}"#).unwrap();
    assert_eq!(parsed.kind, EventKind::MouseUp);
    assert_eq!(parsed.client_y, 9);
    assert_eq!(parsed.target, None);
}
