//! Navbar background toggle
//!
//! A pure function of the current scroll offset: above the threshold the
//! background layer is opaque, at or below it the layer is transparent.

use super::require;
use crate::{names, NavbarConfig, PageError, PageHost};
use sitefx_dom::NodeId;

#[derive(Debug, Clone, Copy)]
pub struct NavbarBackground {
    pub navbar: NodeId,
    pub background: NodeId,
}

impl NavbarBackground {
    /// Needs both `#navbar` and `#navbar-bg`
    pub fn setup<H: PageHost + ?Sized>(host: &H) -> Result<Self, PageError> {
        Ok(Self {
            navbar: require(host, names::NAVBAR)?,
            background: require(host, names::NAVBAR_BG)?,
        })
    }

    /// Returns true when the scrolled (opaque) style was applied
    pub fn apply<H: PageHost + ?Sized>(&self, host: &mut H, config: &NavbarConfig, scroll_top: f64) -> bool {
        let scrolled = scroll_top > config.threshold_px;
        if scrolled {
            host.set_style(self.background, "background-color", &config.scrolled_background);
            host.set_style(self.background, "border-bottom-color", &config.scrolled_border);
            host.remove_class(self.background, names::BORDER_TRANSPARENT);
        } else {
            host.set_style(self.background, "background-color", "transparent");
            host.set_style(self.background, "border-bottom-color", "transparent");
            host.add_class(self.background, names::BORDER_TRANSPARENT);
        }
        tracing::trace!("navbar at {}px: scrolled={}", scroll_top, scrolled);
        scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitefx_dom::Document;

    fn navbar_doc() -> (Document, NodeId) {
        let mut doc = Document::default();
        let body = doc.body();
        let nav = doc.append_element(body, "nav").unwrap();
        doc.tree_mut().element_mut(nav).unwrap().set_attr("id", "navbar");
        let bg = doc.append_element(nav, "div").unwrap();
        doc.tree_mut().element_mut(bg).unwrap().set_attr("id", "navbar-bg");
        (doc, bg)
    }

    #[test]
    fn test_threshold_boundary() {
        let (mut doc, bg) = navbar_doc();
        let navbar = NavbarBackground::setup(&doc).unwrap();
        let config = NavbarConfig::default();

        assert!(!navbar.apply(&mut doc, &config, 50.0));
        assert!(doc.has_class(bg, "border-transparent"));

        assert!(navbar.apply(&mut doc, &config, 50.5));
        assert!(!doc.has_class(bg, "border-transparent"));
        let style = &doc.tree().element(bg).unwrap().style;
        assert_eq!(style.property("background-color"), Some("#0F2229"));
        assert_eq!(style.property("border-bottom-color"), Some("rgba(6, 182, 212, 0.2)"));
    }

    #[test]
    fn test_needs_both_elements() {
        let (mut doc, bg) = navbar_doc();
        doc.remove(bg);
        assert_eq!(
            NavbarBackground::setup(&doc).unwrap_err(),
            PageError::MissingElement { id: "navbar-bg" }
        );
    }
}
