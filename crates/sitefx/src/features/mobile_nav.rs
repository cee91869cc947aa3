//! Mobile navigation drawer

use super::require;
use crate::{names, PageError, PageHost};
use sitefx_dom::NodeId;

/// Toggles `#mobileNav` and swaps the open/close icons in lock-step.
/// Visibility lives only in the `hidden` class of each element.
#[derive(Debug, Clone, Copy)]
pub struct MobileNav {
    pub button: NodeId,
    pub panel: NodeId,
    pub icon_open: NodeId,
    pub icon_close: NodeId,
}

impl MobileNav {
    pub fn setup<H: PageHost + ?Sized>(host: &H) -> Result<Self, PageError> {
        Ok(Self {
            button: require(host, names::NAV_BUTTON)?,
            panel: require(host, names::MOBILE_NAV)?,
            icon_open: require(host, names::NAV_ICON_OPEN)?,
            icon_close: require(host, names::NAV_ICON_CLOSE)?,
        })
    }

    /// Clicks on the button or anything inside it
    pub fn handles<H: PageHost + ?Sized>(&self, host: &H, target: NodeId) -> bool {
        host.contains(self.button, target)
    }

    /// Returns true when the panel is now open
    pub fn toggle<H: PageHost + ?Sized>(&self, host: &mut H) -> bool {
        let hidden = host.toggle_class(self.panel, names::HIDDEN);
        host.toggle_class(self.icon_open, names::HIDDEN);
        host.toggle_class(self.icon_close, names::HIDDEN);
        tracing::debug!("mobile nav {}", if hidden { "closed" } else { "opened" });
        !hidden
    }
}
