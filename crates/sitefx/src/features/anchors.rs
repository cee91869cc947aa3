//! Smooth scrolling for in-page anchor links

use crate::PageHost;
use sitefx_dom::{NodeId, ScrollIntoViewOptions};

/// Every `<a href="#...">` present at setup
#[derive(Debug, Clone, Default)]
pub struct AnchorScroll {
    links: Vec<NodeId>,
}

impl AnchorScroll {
    pub fn setup<H: PageHost + ?Sized>(host: &H) -> Self {
        let links: Vec<NodeId> = host
            .links()
            .into_iter()
            .filter(|&link| host.attribute(link, "href").is_some_and(|href| href.starts_with('#')))
            .collect();
        tracing::debug!("Found {} in-page links", links.len());
        Self { links }
    }

    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    /// The registered link a click on `target` bubbles through, if any
    pub fn link_for<H: PageHost + ?Sized>(&self, host: &H, target: NodeId) -> Option<NodeId> {
        let link = host.closest_with_tag(target, "a")?;
        self.links.contains(&link).then_some(link)
    }

    /// Scroll to the link's fragment target. Returns false if nothing matches;
    /// the click is suppressed either way.
    pub fn follow<H: PageHost + ?Sized>(&self, host: &mut H, link: NodeId) -> bool {
        let href = host.attribute(link, "href").unwrap_or_default();
        let fragment = href.strip_prefix('#').unwrap_or_default();
        if fragment.is_empty() {
            return false;
        }
        match host.element_by_id(fragment) {
            Some(target) => {
                host.scroll_into_view(target, ScrollIntoViewOptions::smooth_start());
                true
            }
            None => {
                tracing::debug!("No element for fragment #{}", fragment);
                false
            }
        }
    }
}
