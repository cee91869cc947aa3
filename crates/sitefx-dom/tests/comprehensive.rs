//! Comprehensive tests for sitefx-dom
//!
//! Builds small page fragments by hand and exercises the queries the page
//! behaviors rely on.

use sitefx_dom::{Document, DomError, NodeId, ScrollMetrics};

fn element(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let id = doc.append_element(parent, tag).unwrap();
    let elem = doc.tree_mut().element_mut(id).unwrap();
    for (name, value) in attrs {
        elem.set_attr(name, value);
    }
    id
}

// ============================================================================
// TOAST-SHAPED TREES
// ============================================================================

#[test]
fn test_toast_container_children_count() {
    let mut doc = Document::default();
    let body = doc.body();
    let container = element(&mut doc, body, "div", &[("id", "toast-container")]);
    let first = element(&mut doc, container, "div", &[("class", "toast-item toast-enter")]);
    element(&mut doc, container, "div", &[("class", "toast-item toast-enter")]);

    // Text nodes do not count as children
    let text = doc.tree_mut().create_text("  ");
    doc.tree_mut().append_child(container, text).unwrap();

    assert_eq!(doc.tree().child_element_count(container), 2);
    doc.tree_mut().detach(first).unwrap();
    assert_eq!(doc.tree().child_element_count(container), 1);
}

#[test]
fn test_close_button_finds_its_toast() {
    let mut doc = Document::default();
    let body = doc.body();
    let container = element(&mut doc, body, "div", &[("id", "toast-container")]);
    let toast = element(&mut doc, container, "div", &[("class", "toast-item")]);
    let button = element(&mut doc, toast, "button", &[("class", "toast-close")]);
    let icon = element(&mut doc, button, "svg", &[]);

    assert_eq!(doc.tree().closest_with_class(icon, "toast-item"), Some(toast));
    assert_eq!(doc.tree().closest_with_class(icon, "toast-close"), Some(button));
    assert_eq!(doc.tree().descendants_with_class(container, "toast-item"), vec![toast]);
}

#[test]
fn test_removed_toast_keeps_its_handle() {
    let mut doc = Document::default();
    let body = doc.body();
    let toast = element(&mut doc, body, "div", &[("class", "toast-item")]);
    doc.tree_mut().detach(toast).unwrap();

    assert!(!doc.tree().is_connected(toast));
    assert!(doc.tree().element(toast).is_some_and(|e| e.has_class("toast-item")));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_unknown_node_errors() {
    let mut doc = Document::default();
    let bogus = NodeId::NONE;
    assert_eq!(doc.tree_mut().detach(bogus), Err(DomError::NotFound(bogus)));
    assert!(doc.tree_mut().set_text_content(bogus, "x").is_err());
}

#[test]
fn test_root_cannot_be_appended() {
    let mut doc = Document::default();
    let body = doc.body();
    let err = doc.tree_mut().append_child(body, NodeId::ROOT).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest { .. }));
}

// ============================================================================
// VIEWPORT
// ============================================================================

#[test]
fn test_scroll_metrics_roundtrip() {
    let mut doc = Document::default();
    doc.set_scroll_metrics(ScrollMetrics::new(0.0, 2000.0, 500.0));
    doc.set_scroll_top(320.0);

    let metrics = doc.scroll_metrics();
    assert_eq!(metrics.scroll_top, 320.0);
    assert_eq!(metrics.scrollable_height(), 1500.0);
}

#[test]
fn test_duplicate_ids_resolve_to_first() {
    let mut doc = Document::default();
    let body = doc.body();
    let first = element(&mut doc, body, "span", &[("id", "year")]);
    element(&mut doc, body, "span", &[("id", "year")]);
    assert_eq!(doc.get_element_by_id("year"), Some(first));
}
