//! Viewport scroll state
//!
//! The document does not animate anything itself. It holds the current
//! scroll metrics and records every scroll request so the embedder (or a
//! test) can see what was asked for.

/// Scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
    Instant,
}

/// Logical scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLogicalPosition {
    Start,
    Center,
    End,
    #[default]
    Nearest,
}

/// Scroll into view options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollLogicalPosition,
    pub inline: ScrollLogicalPosition,
}

impl ScrollIntoViewOptions {
    /// `{ behavior: "smooth", block: "start" }`
    pub fn smooth_start() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollLogicalPosition::Start,
            inline: ScrollLogicalPosition::Nearest,
        }
    }
}

/// Vertical scroll metrics of the document element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical offset (`scrollTop`)
    pub scroll_top: f64,
    /// Total content height (`scrollHeight`)
    pub scroll_height: f64,
    /// Visible viewport height (`clientHeight`)
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self { scroll_top, scroll_height, client_height }
    }

    /// Distance that can actually be scrolled; never negative
    pub fn scrollable_height(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Where a scroll request points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Bring an element into view
    Element(crate::NodeId),
    /// Scroll to offset 0
    Top,
}

/// A recorded scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub options: ScrollIntoViewOptions,
}
