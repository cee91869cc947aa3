//! Page behavior tests
//!
//! Loads a page shaped like the site templates, wires up the interaction
//! layer and drives it with scroll, click and timer events.

use sitefx::dom::{Document, NodeId, ScrollBehavior, ScrollLogicalPosition, ScrollMetrics, ScrollTarget};
use sitefx::{Config, Feature, FixedClock, PageEvent, PageHost, PageInteraction, ToastTimings};
use std::time::Duration;

const PAGE: &str = r##"
<!DOCTYPE html>
<html>
  <body>
    <div id="scroll-progress" style="width: 0%"></div>
    <nav id="navbar">
      <div id="navbar-bg" class="border-transparent"></div>
      <a id="services-link" href="#services"><span id="services-label">Services</span></a>
      <a id="broken-link" href="#nowhere">Nowhere</a>
      <a id="empty-link" href="#">Top</a>
      <a id="external-link" href="/contact/">Contact</a>
      <button id="navBtn"><svg id="navIconOpen"></svg><svg id="navIconClose" class="hidden"></svg></button>
    </nav>
    <div id="mobileNav" class="hidden"></div>
    <div id="toast-container">
      <div id="toast-1" class="toast-item toast-enter">Saved<button id="close-1" class="toast-close"><svg id="close-1-icon"></svg></button></div>
      <div id="toast-2" class="toast-item toast-enter">Sent<button id="close-2" class="toast-close">x</button></div>
    </div>
    <section id="services"></section>
    <button id="back-to-top" class="opacity-0 pointer-events-none">Top</button>
    <footer><span id="year"></span></footer>
  </body>
</html>
"##;

const SINGLE_TOAST: &str = r#"
<div id="toast-container">
  <div id="toast-1" class="toast-item toast-enter">Saved<button id="close-1" class="toast-close">x</button></div>
</div>
"#;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn load(markup: &str) -> (Document, PageInteraction) {
    let mut doc = sitefx::html::parse(markup).unwrap();
    doc.set_scroll_metrics(ScrollMetrics::new(0.0, 3000.0, 1000.0));
    let page = PageInteraction::setup(&mut doc, Config::default(), &FixedClock(2026));
    (doc, page)
}

fn id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id).unwrap_or_else(|| panic!("#{id} not in page"))
}

fn scroll_to(page: &mut PageInteraction, doc: &mut Document, offset: f64) {
    doc.set_scroll_top(offset);
    page.dispatch(doc, PageEvent::Scroll);
}

fn click(page: &mut PageInteraction, doc: &mut Document, target: &str) -> sitefx::EventOutcome {
    let target = id(doc, target);
    page.dispatch(doc, PageEvent::Click { target })
}

fn style(doc: &Document, node: &str, property: &str) -> Option<String> {
    let node = id(doc, node);
    doc.tree().element(node)?.style.property(property).map(str::to_string)
}

// ============================================================================
// SETUP
// ============================================================================

#[test]
fn test_all_features_active_on_full_page() {
    let (_, page) = load(PAGE);
    for feature in Feature::ALL {
        assert!(page.report().is_active(feature), "{feature} should be active");
    }
}

#[test]
fn test_footer_year_written_once() {
    let (mut doc, mut page) = load(PAGE);
    let year = id(&doc, "year");
    assert_eq!(doc.tree().text_content(year), "2026");

    scroll_to(&mut page, &mut doc, 400.0);
    page.advance(&mut doc, ms(5000));
    assert_eq!(doc.tree().text_content(year), "2026");
}

#[test]
fn test_empty_page_skips_everything_quietly() {
    let (mut doc, mut page) = load("<p>nothing here</p>");
    let skipped: Vec<Feature> = page.report().skipped().collect();
    assert_eq!(skipped.len(), 6);
    assert!(page.report().is_active(Feature::AnchorScroll));

    let outcome = page.dispatch(&mut doc, PageEvent::Scroll);
    assert!(outcome.handled_by().is_empty());
    let body = doc.body();
    let outcome = page.dispatch(&mut doc, PageEvent::Click { target: body });
    assert!(outcome.handled_by().is_empty());
    assert_eq!(page.run_until_idle(&mut doc), 0);
}

#[test]
fn test_setup_applies_current_scroll_offset() {
    let mut doc = sitefx::html::parse(PAGE).unwrap();
    doc.set_scroll_metrics(ScrollMetrics::new(1000.0, 3000.0, 1000.0));
    let _page = PageInteraction::setup(&mut doc, Config::default(), &FixedClock(2026));

    assert!(!doc.has_class(id(&doc, "navbar-bg"), "border-transparent"));
    assert_eq!(style(&doc, "navbar-bg", "background-color").as_deref(), Some("#0F2229"));
    assert_eq!(style(&doc, "scroll-progress", "width").as_deref(), Some("50%"));
    assert!(doc.has_class(id(&doc, "back-to-top"), "opacity-100"));
}

#[test]
fn test_back_to_top_hidden_at_setup_without_marker_classes() {
    let markup = r#"<button id="back-to-top">Top</button>"#;
    let (mut doc, mut page) = load(markup);
    let control = id(&doc, "back-to-top");
    assert!(doc.has_class(control, "pointer-events-none"));
    assert!(doc.has_class(control, "opacity-0"));

    let outcome = click(&mut page, &mut doc, "back-to-top");
    assert!(!outcome.was_handled_by(Feature::BackToTop));
    assert!(doc.scroll_requests().is_empty());
}

#[test]
fn test_partial_mobile_nav_is_skipped() {
    let markup = r#"<button id="navBtn"></button><div id="mobileNav" class="hidden"></div>"#;
    let (mut doc, mut page) = load(markup);
    assert!(!page.report().is_active(Feature::MobileNav));

    click(&mut page, &mut doc, "navBtn");
    assert!(doc.has_class(id(&doc, "mobileNav"), "hidden"));
}

// ============================================================================
// NAVBAR
// ============================================================================

#[test]
fn test_navbar_transparent_up_to_threshold() {
    let (mut doc, mut page) = load(PAGE);
    let bg = id(&doc, "navbar-bg");

    for offset in [0.0, 10.0, 49.9, 50.0] {
        scroll_to(&mut page, &mut doc, offset);
        assert!(doc.has_class(bg, "border-transparent"), "offset {offset}");
        assert_eq!(style(&doc, "navbar-bg", "background-color").as_deref(), Some("transparent"));
        assert_eq!(style(&doc, "navbar-bg", "border-bottom-color").as_deref(), Some("transparent"));
    }
}

#[test]
fn test_navbar_opaque_past_threshold() {
    let (mut doc, mut page) = load(PAGE);
    let bg = id(&doc, "navbar-bg");

    for offset in [50.01, 51.0, 400.0, 2000.0] {
        scroll_to(&mut page, &mut doc, offset);
        assert!(!doc.has_class(bg, "border-transparent"), "offset {offset}");
        assert_eq!(style(&doc, "navbar-bg", "background-color").as_deref(), Some("#0F2229"));
    }

    scroll_to(&mut page, &mut doc, 0.0);
    assert!(doc.has_class(bg, "border-transparent"));
}

// ============================================================================
// MOBILE NAV
// ============================================================================

#[test]
fn test_mobile_nav_double_toggle_round_trips() {
    let (mut doc, mut page) = load(PAGE);
    let (panel, open, close) = (id(&doc, "mobileNav"), id(&doc, "navIconOpen"), id(&doc, "navIconClose"));

    let outcome = click(&mut page, &mut doc, "navBtn");
    assert!(outcome.was_handled_by(Feature::MobileNav));
    assert!(!doc.has_class(panel, "hidden"));
    assert!(doc.has_class(open, "hidden"));
    assert!(!doc.has_class(close, "hidden"));

    click(&mut page, &mut doc, "navBtn");
    assert!(doc.has_class(panel, "hidden"));
    assert!(!doc.has_class(open, "hidden"));
    assert!(doc.has_class(close, "hidden"));
}

#[test]
fn test_click_on_icon_bubbles_to_button() {
    let (mut doc, mut page) = load(PAGE);
    click(&mut page, &mut doc, "navIconOpen");
    assert!(!doc.has_class(id(&doc, "mobileNav"), "hidden"));
}

// ============================================================================
// TOASTS
// ============================================================================

#[test]
fn test_single_toast_close_removes_container_after_exit_delay() {
    let (mut doc, mut page) = load(SINGLE_TOAST);
    let toast = id(&doc, "toast-1");
    let container = id(&doc, "toast-container");

    let close = id(&doc, "close-1");
    assert!(page.close_toast(&mut doc, close));
    assert!(doc.has_class(toast, "toast-exit"));
    assert!(!doc.has_class(toast, "toast-enter"));

    page.advance(&mut doc, ms(299));
    assert!(doc.is_connected(toast));

    page.advance(&mut doc, ms(1));
    assert!(!doc.is_connected(toast));
    assert!(!doc.is_connected(container));
    assert!(doc.get_element_by_id("toast-container").is_none());
}

#[test]
fn test_closing_one_of_two_keeps_container() {
    let (mut doc, mut page) = load(PAGE);
    let container = id(&doc, "toast-container");

    let outcome = click(&mut page, &mut doc, "close-1-icon");
    assert!(outcome.was_handled_by(Feature::Toasts));
    page.advance(&mut doc, ms(300));

    assert!(doc.is_connected(container));
    assert_eq!(doc.child_element_count(container), 1);
    assert!(doc.get_element_by_id("toast-1").is_none());
    assert!(doc.get_element_by_id("toast-2").is_some());
}

#[test]
fn test_auto_close_dismisses_every_toast() {
    let (mut doc, mut page) = load(PAGE);
    let toast = id(&doc, "toast-2");
    assert_eq!(page.pending_auto_close(), 2);

    page.advance(&mut doc, ms(1499));
    assert!(doc.has_class(toast, "toast-enter"));

    page.advance(&mut doc, ms(1));
    assert!(doc.has_class(toast, "toast-exit"));
    assert_eq!(page.pending_auto_close(), 0);

    page.advance(&mut doc, ms(300));
    assert!(doc.get_element_by_id("toast-container").is_none());
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn test_one_long_wait_runs_chained_timers() {
    let (mut doc, mut page) = load(PAGE);
    // auto-close at 1500 schedules removal at 1800; both land in one advance
    assert_eq!(page.advance(&mut doc, ms(5000)), 4);
    assert!(doc.get_element_by_id("toast-container").is_none());
    assert_eq!(page.elapsed(), ms(5000));
}

#[test]
fn test_manual_close_cancels_auto_close() {
    let (mut doc, mut page) = load(SINGLE_TOAST);
    assert_eq!(page.pending_timers(), 1);

    page.advance(&mut doc, ms(100));
    let close = id(&doc, "close-1");
    page.close_toast(&mut doc, close);
    // auto-close cancelled, removal pending
    assert_eq!(page.pending_timers(), 1);
    assert_eq!(page.pending_auto_close(), 0);

    assert_eq!(page.run_until_idle(&mut doc), 1);
    assert_eq!(page.elapsed(), ms(400));
}

#[test]
fn test_closing_twice_is_noop() {
    let (mut doc, mut page) = load(SINGLE_TOAST);
    let close = id(&doc, "close-1");
    assert!(page.close_toast(&mut doc, close));
    assert!(!page.close_toast(&mut doc, close));
    assert_eq!(page.pending_timers(), 1);
}

#[test]
fn test_stale_auto_close_after_external_removal() {
    let (mut doc, mut page) = load(PAGE);
    let toast = id(&doc, "toast-1");
    doc.remove(toast);

    page.run_until_idle(&mut doc);
    assert!(!doc.is_connected(toast));
    assert!(!doc.has_class(toast, "toast-exit"));
    assert!(doc.get_element_by_id("toast-container").is_none());
}

#[test]
fn test_close_control_without_toast_is_noop() {
    let markup = r#"<div id="toast-container"></div><button id="stray" class="toast-close">x</button>"#;
    let (mut doc, mut page) = load(markup);
    let outcome = click(&mut page, &mut doc, "stray");
    assert!(!outcome.was_handled_by(Feature::Toasts));
    assert_eq!(page.pending_timers(), 0);
    assert!(doc.get_element_by_id("toast-container").is_some());
}

#[test]
fn test_toast_close_works_without_container() {
    let markup = r#"<div id="toast-1" class="toast-item toast-enter">Saved<button id="close-1" class="toast-close">x</button></div>"#;
    let (mut doc, mut page) = load(markup);
    let toast = id(&doc, "toast-1");
    assert!(!page.report().is_active(Feature::Toasts));
    assert_eq!(page.pending_timers(), 0);

    let outcome = click(&mut page, &mut doc, "close-1");
    assert!(outcome.was_handled_by(Feature::Toasts));
    assert!(doc.has_class(toast, "toast-exit"));

    assert_eq!(page.advance(&mut doc, ms(300)), 1);
    assert!(!doc.is_connected(toast));
    assert!(doc.get_element_by_id("toast-1").is_none());
}

#[test]
fn test_relaxed_timings() {
    let mut doc = sitefx::html::parse(SINGLE_TOAST).unwrap();
    let config = Config::default().with_toast_timings(ToastTimings::RELAXED);
    let mut page = PageInteraction::setup(&mut doc, config, &FixedClock(2026));
    let toast = id(&doc, "toast-1");

    page.advance(&mut doc, ms(1999));
    assert!(doc.has_class(toast, "toast-enter"));
    page.advance(&mut doc, ms(1));
    assert!(doc.has_class(toast, "toast-exit"));
    page.advance(&mut doc, ms(399));
    assert!(doc.is_connected(toast));
    page.advance(&mut doc, ms(1));
    assert!(!doc.is_connected(toast));
}

// ============================================================================
// SCROLL PROGRESS & BACK TO TOP
// ============================================================================

#[test]
fn test_progress_width_tracks_scroll() {
    let (mut doc, mut page) = load(PAGE);

    scroll_to(&mut page, &mut doc, 0.0);
    assert_eq!(style(&doc, "scroll-progress", "width").as_deref(), Some("0%"));

    scroll_to(&mut page, &mut doc, 1000.0);
    assert_eq!(style(&doc, "scroll-progress", "width").as_deref(), Some("50%"));

    scroll_to(&mut page, &mut doc, 2000.0);
    assert_eq!(style(&doc, "scroll-progress", "width").as_deref(), Some("100%"));
}

#[test]
fn test_progress_on_page_shorter_than_viewport() {
    let (mut doc, mut page) = load(PAGE);
    doc.set_scroll_metrics(ScrollMetrics::new(0.0, 700.0, 700.0));
    page.dispatch(&mut doc, PageEvent::Scroll);
    assert_eq!(style(&doc, "scroll-progress", "width").as_deref(), Some("0%"));
}

#[test]
fn test_back_to_top_interactive_only_past_threshold() {
    let (mut doc, mut page) = load(PAGE);
    let control = id(&doc, "back-to-top");

    for (offset, visible) in [(0.0, false), (300.0, false), (300.5, true), (1200.0, true), (10.0, false)] {
        scroll_to(&mut page, &mut doc, offset);
        assert_eq!(!doc.has_class(control, "pointer-events-none"), visible, "offset {offset}");
        assert_eq!(doc.has_class(control, "opacity-100"), visible);
        assert_eq!(doc.has_class(control, "opacity-0"), !visible);
    }
}

#[test]
fn test_back_to_top_click() {
    let (mut doc, mut page) = load(PAGE);

    // Hidden: click ignored
    let outcome = click(&mut page, &mut doc, "back-to-top");
    assert!(!outcome.was_handled_by(Feature::BackToTop));
    assert!(doc.scroll_requests().is_empty());

    scroll_to(&mut page, &mut doc, 900.0);
    let outcome = click(&mut page, &mut doc, "back-to-top");
    assert!(outcome.was_handled_by(Feature::BackToTop));
    let requests = doc.take_scroll_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, ScrollTarget::Top);
    assert_eq!(requests[0].options.behavior, ScrollBehavior::Smooth);
}

// ============================================================================
// ANCHORS
// ============================================================================

#[test]
fn test_only_fragment_links_registered() {
    let (doc, page) = load(PAGE);
    let links = page.anchor_links();
    assert_eq!(links.len(), 3);
    assert!(!links.contains(&id(&doc, "external-link")));
}

#[test]
fn test_anchor_scrolls_to_section() {
    let (mut doc, mut page) = load(PAGE);
    let outcome = click(&mut page, &mut doc, "services-label");

    assert!(outcome.is_default_prevented());
    let requests = doc.take_scroll_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, ScrollTarget::Element(id(&doc, "services")));
    assert_eq!(requests[0].options.behavior, ScrollBehavior::Smooth);
    assert_eq!(requests[0].options.block, ScrollLogicalPosition::Start);
}

#[test]
fn test_unmatched_anchor_is_suppressed_without_scroll() {
    let (mut doc, mut page) = load(PAGE);
    for link in ["broken-link", "empty-link"] {
        let outcome = click(&mut page, &mut doc, link);
        assert!(outcome.is_default_prevented(), "{link}");
        assert!(doc.scroll_requests().is_empty(), "{link}");
    }
}

#[test]
fn test_external_link_untouched() {
    let (mut doc, mut page) = load(PAGE);
    let outcome = click(&mut page, &mut doc, "external-link");
    assert!(!outcome.is_default_prevented());
    assert!(outcome.handled_by().is_empty());
}
