//! Page events and dispatch results

use crate::Feature;
use sitefx_dom::NodeId;

/// Events the page interaction layer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The viewport scrolled; metrics are read fresh from the host
    Scroll,
    /// A click landed on `target` and bubbles through its ancestors
    Click { target: NodeId },
}

/// What happened while dispatching one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    default_prevented: bool,
    handled_by: Vec<Feature>,
}

impl EventOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the browser's default action (e.g. fragment navigation)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub(crate) fn handled(&mut self, feature: Feature) {
        self.handled_by.push(feature);
    }

    /// Features that reacted, in dispatch order
    pub fn handled_by(&self) -> &[Feature] {
        &self.handled_by
    }

    pub fn was_handled_by(&self, feature: Feature) -> bool {
        self.handled_by.contains(&feature)
    }
}
