//! Page host capability
//!
//! Everything the page behaviors read or change goes through [`PageHost`].
//! Calls naming a node that does not exist (or is not an element) do
//! nothing; behaviors never need to check first.

use sitefx_dom::{Document, NodeId, ScrollBehavior, ScrollIntoViewOptions, ScrollMetrics};

/// Document operations used by the page behaviors
pub trait PageHost {
    /// Connected element with this id
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// True while the node is attached to the document
    fn is_connected(&self, node: NodeId) -> bool;

    /// Inclusive ancestry check, used to route bubbling clicks
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Flip a class and return whether it is now present
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
    fn set_text(&mut self, node: NodeId, text: &str);
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Nearest inclusive ancestor element carrying `class`
    fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId>;

    /// Nearest inclusive ancestor element with this tag
    fn closest_with_tag(&self, node: NodeId, tag: &str) -> Option<NodeId>;

    /// Descendant elements carrying `class`, in document order
    fn descendants_with_class(&self, root: NodeId, class: &str) -> Vec<NodeId>;

    /// All connected `<a>` elements, in document order
    fn links(&self) -> Vec<NodeId>;

    /// Element children only
    fn child_element_count(&self, node: NodeId) -> usize;

    /// Detach a node from the document
    fn remove(&mut self, node: NodeId);

    /// Fresh viewport metrics
    fn scroll_metrics(&self) -> ScrollMetrics;

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions);
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}

impl PageHost for Document {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.tree().is_connected(node)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree().is_inclusive_ancestor(ancestor, node)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree().element(node).is_some_and(|e| e.has_class(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(elem) = self.tree_mut().element_mut(node) {
            elem.classes.add(class);
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(elem) = self.tree_mut().element_mut(node) {
            elem.classes.remove(class);
        }
    }

    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        self.tree_mut()
            .element_mut(node)
            .is_some_and(|elem| elem.classes.toggle(class, None))
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(elem) = self.tree_mut().element_mut(node) {
            elem.style.set_property(property, value);
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Err(err) = self.tree_mut().set_text_content(node, text) {
            tracing::debug!("set_text skipped: {}", err);
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree().element(node).and_then(|e| e.attr(name))
    }

    fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.tree().closest_with_class(node, class)
    }

    fn closest_with_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.tree().closest_with_tag(node, tag)
    }

    fn descendants_with_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.tree().descendants_with_class(root, class)
    }

    fn links(&self) -> Vec<NodeId> {
        let tree = self.tree();
        tree.descendants(tree.root())
            .into_iter()
            .filter(|&id| tree.element(id).is_some_and(|e| e.tag == "a"))
            .collect()
    }

    fn child_element_count(&self, node: NodeId) -> usize {
        self.tree().child_element_count(node)
    }

    fn remove(&mut self, node: NodeId) {
        if let Err(err) = self.tree_mut().detach(node) {
            tracing::debug!("remove skipped: {}", err);
        }
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        Document::scroll_metrics(self)
    }

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions) {
        Document::scroll_into_view(self, node, options);
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        Document::scroll_to_top(self, behavior);
    }
}
