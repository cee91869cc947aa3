//! sitefx - Page Interaction Layer
//!
//! Cosmetic, event-driven page behaviors run against an injected document:
//!
//! - footer year injection
//! - navbar background toggle on scroll
//! - mobile navigation drawer
//! - toast auto-dismiss
//! - scroll progress bar and back-to-top control
//! - smooth scrolling for in-page anchors
//!
//! All state lives in the document's classes and inline styles. A behavior
//! whose elements are missing from the page is skipped, never an error.

mod clock;
mod config;
mod error;
mod events;
mod features;
mod host;
pub mod names;
mod page;
pub mod replay;
pub mod timers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    Config, NavbarConfig, ToastTimings, BACK_TO_TOP_THRESHOLD_PX, NAVBAR_SCROLLED_BACKGROUND,
    NAVBAR_SCROLLED_BORDER, NAVBAR_SCROLL_THRESHOLD_PX,
};
pub use error::{ConfigError, PageError, StepError};
pub use events::{EventOutcome, PageEvent};
pub use features::{
    scroll_percent, AnchorScroll, BackToTop, Feature, FeatureStatus, FooterYear, MobileNav,
    NavbarBackground, ScrollProgress, SetupReport, Toasts,
};
pub use host::PageHost;
pub use page::PageInteraction;

pub use sitefx_dom as dom;
pub use sitefx_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
