//! Scroll progress bar and back-to-top control

use super::require;
use crate::{names, PageError, PageHost};
use sitefx_dom::{NodeId, ScrollBehavior, ScrollMetrics};

/// Percentage of the scrollable distance covered, clamped to `0..=100`.
///
/// A page no taller than its viewport has nothing to scroll and reports 0.
pub fn scroll_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scrollable_height();
    if scrollable <= 0.0 || !metrics.scroll_top.is_finite() {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Sets `#scroll-progress` width to the scroll percentage
#[derive(Debug, Clone, Copy)]
pub struct ScrollProgress {
    pub bar: NodeId,
}

impl ScrollProgress {
    pub fn setup<H: PageHost + ?Sized>(host: &H) -> Result<Self, PageError> {
        Ok(Self { bar: require(host, names::SCROLL_PROGRESS)? })
    }

    pub fn apply<H: PageHost + ?Sized>(&self, host: &mut H, metrics: ScrollMetrics) -> f64 {
        let percent = scroll_percent(metrics);
        host.set_style(self.bar, "width", &format!("{percent}%"));
        percent
    }
}

/// Shows `#back-to-top` past the threshold and scrolls home when clicked
#[derive(Debug, Clone, Copy)]
pub struct BackToTop {
    pub control: NodeId,
}

impl BackToTop {
    pub fn setup<H: PageHost + ?Sized>(host: &H) -> Result<Self, PageError> {
        Ok(Self { control: require(host, names::BACK_TO_TOP)? })
    }

    /// Returns true when the control is now visible and clickable
    pub fn apply<H: PageHost + ?Sized>(&self, host: &mut H, threshold_px: f64, scroll_top: f64) -> bool {
        let visible = scroll_top > threshold_px;
        if visible {
            host.remove_class(self.control, names::OPACITY_0);
            host.remove_class(self.control, names::POINTER_EVENTS_NONE);
            host.add_class(self.control, names::OPACITY_100);
        } else {
            host.add_class(self.control, names::OPACITY_0);
            host.add_class(self.control, names::POINTER_EVENTS_NONE);
            host.remove_class(self.control, names::OPACITY_100);
        }
        visible
    }

    /// True when the control currently accepts clicks
    pub fn is_interactive<H: PageHost + ?Sized>(&self, host: &H) -> bool {
        !host.has_class(self.control, names::POINTER_EVENTS_NONE)
    }

    pub fn handles<H: PageHost + ?Sized>(&self, host: &H, target: NodeId) -> bool {
        host.contains(self.control, target)
    }

    pub fn scroll_home<H: PageHost + ?Sized>(&self, host: &mut H) {
        host.scroll_to_top(ScrollBehavior::Smooth);
    }
}
