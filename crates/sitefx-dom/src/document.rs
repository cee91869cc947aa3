//! Document - High-level document API

use crate::{
    DomResult, DomTree, NodeId, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollMetrics, ScrollRequest, ScrollTarget,
};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Current viewport scroll state
    metrics: ScrollMetrics,
    /// Scroll requests not yet taken by the embedder
    scroll_requests: Vec<ScrollRequest>,
}

impl Document {
    /// Create a document with an empty `<html><head><body>` skeleton
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let tree = &mut doc.tree;
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh nodes under a fresh root cannot fail
        let _ = tree.append_child(NodeId::ROOT, html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        doc.finalize();
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
            metrics: ScrollMetrics::default(),
            scroll_requests: Vec::new(),
        }
    }

    /// Locate `<html>` and `<body>` after the tree has been built
    pub fn finalize(&mut self) {
        self.html_element = self
            .tree
            .element_children(NodeId::ROOT)
            .find(|&id| self.tree.element(id).is_some_and(|e| e.tag == "html"))
            .unwrap_or(NodeId::NONE);
        self.body_element = self
            .tree
            .element_children(self.html_element)
            .find(|&id| self.tree.element(id).is_some_and(|e| e.tag == "body"))
            .unwrap_or(NodeId::NONE);
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element (NONE if the document has none)
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get a connected element by ID (first in document order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&node| self.tree.element(node).and_then(|e| e.id.as_deref()) == Some(id))
    }

    /// Append a new element under `parent` and return it
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Current scroll metrics
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Replace the scroll metrics (viewport resize or content change)
    pub fn set_scroll_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
    }

    /// Move the viewport to a new vertical offset
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.metrics.scroll_top = scroll_top;
    }

    /// Request that `node` be scrolled into view
    pub fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions) {
        tracing::trace!("scroll into view {} ({:?})", node, options.behavior);
        self.scroll_requests.push(ScrollRequest { target: ScrollTarget::Element(node), options });
    }

    /// Request a scroll back to offset 0
    pub fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions {
            behavior,
            block: ScrollLogicalPosition::Start,
            inline: ScrollLogicalPosition::Nearest,
        };
        self.scroll_requests.push(ScrollRequest { target: ScrollTarget::Top, options });
    }

    /// Pending scroll requests, oldest first
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// Drain pending scroll requests
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
