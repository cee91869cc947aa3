//! Page behaviors
//!
//! Each behavior resolves its elements once at setup. A behavior whose
//! elements are missing is recorded as skipped and never runs.

mod anchors;
mod footer_year;
mod mobile_nav;
mod navbar;
mod scroll_progress;
mod toast;

pub use anchors::AnchorScroll;
pub use footer_year::FooterYear;
pub use mobile_nav::MobileNav;
pub use navbar::NavbarBackground;
pub use scroll_progress::{scroll_percent, BackToTop, ScrollProgress};
pub use toast::Toasts;

use crate::{PageError, PageHost};
use sitefx_dom::NodeId;

/// Page behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    FooterYear,
    NavbarBackground,
    MobileNav,
    Toasts,
    ScrollProgress,
    BackToTop,
    AnchorScroll,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::FooterYear,
        Feature::NavbarBackground,
        Feature::MobileNav,
        Feature::Toasts,
        Feature::ScrollProgress,
        Feature::BackToTop,
        Feature::AnchorScroll,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::FooterYear => "footer-year",
            Feature::NavbarBackground => "navbar-background",
            Feature::MobileNav => "mobile-nav",
            Feature::Toasts => "toasts",
            Feature::ScrollProgress => "scroll-progress",
            Feature::BackToTop => "back-to-top",
            Feature::AnchorScroll => "anchor-scroll",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a behavior was wired up at setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureStatus {
    Active,
    Skipped(PageError),
}

/// Per-feature result of setup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    entries: Vec<(Feature, FeatureStatus)>,
}

impl SetupReport {
    pub(crate) fn record<T>(&mut self, feature: Feature, resolved: Result<T, PageError>) -> Option<T> {
        match resolved {
            Ok(value) => {
                self.entries.push((feature, FeatureStatus::Active));
                Some(value)
            }
            Err(err) => {
                tracing::debug!("{} disabled: {}", feature, err);
                self.entries.push((feature, FeatureStatus::Skipped(err)));
                None
            }
        }
    }

    pub fn status(&self, feature: Feature) -> Option<&FeatureStatus> {
        self.entries.iter().find(|(f, _)| *f == feature).map(|(_, s)| s)
    }

    pub fn is_active(&self, feature: Feature) -> bool {
        matches!(self.status(feature), Some(FeatureStatus::Active))
    }

    /// Features that were skipped, in setup order
    pub fn skipped(&self) -> impl Iterator<Item = Feature> + '_ {
        self.entries
            .iter()
            .filter(|(_, s)| matches!(s, FeatureStatus::Skipped(_)))
            .map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Feature, FeatureStatus)> {
        self.entries.iter()
    }
}

/// Resolve an element id or report it missing
pub(crate) fn require<H: PageHost + ?Sized>(host: &H, id: &'static str) -> Result<NodeId, PageError> {
    host.element_by_id(id).ok_or(PageError::MissingElement { id })
}
