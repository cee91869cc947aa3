//! Page interaction layer
//!
//! [`PageInteraction::setup`] runs once when the page has loaded. After that
//! the embedder feeds it events and elapsed time:
//!
//! ```rust,ignore
//! let mut page = PageInteraction::setup(&mut doc, Config::default(), &SystemClock);
//! doc.set_scroll_top(120.0);
//! page.dispatch(&mut doc, PageEvent::Scroll);
//! page.advance(&mut doc, Duration::from_millis(16));
//! ```

use crate::features::{
    require, AnchorScroll, BackToTop, Feature, FooterYear, MobileNav, NavbarBackground,
    ScrollProgress, SetupReport, Toasts,
};
use crate::timers::{TimerQueue, TimerTask};
use crate::{names, Clock, Config, EventOutcome, PageEvent, PageHost};
use sitefx_dom::NodeId;
use std::time::Duration;

/// The wired-up page behaviors
#[derive(Debug)]
pub struct PageInteraction {
    config: Config,
    report: SetupReport,
    navbar: Option<NavbarBackground>,
    mobile_nav: Option<MobileNav>,
    progress: Option<ScrollProgress>,
    back_to_top: Option<BackToTop>,
    anchors: AnchorScroll,
    toasts: Toasts,
    timers: TimerQueue,
}

impl PageInteraction {
    /// Resolve elements and register every behavior whose elements exist
    pub fn setup<H: PageHost + ?Sized>(host: &mut H, config: Config, clock: &dyn Clock) -> Self {
        let mut report = SetupReport::default();

        report.record(Feature::FooterYear, FooterYear::setup(host, clock));
        let navbar = report.record(Feature::NavbarBackground, NavbarBackground::setup(host));
        let mobile_nav = report.record(Feature::MobileNav, MobileNav::setup(host));

        let mut timers = TimerQueue::new();
        let mut toasts = Toasts::new(config.toast);
        // Manual close works without a container; auto-close needs one
        if let Some(container) = report.record(Feature::Toasts, require(host, names::TOAST_CONTAINER)) {
            toasts.schedule_auto_close(host, container, &mut timers);
        }

        let progress = report.record(Feature::ScrollProgress, ScrollProgress::setup(host));
        let back_to_top = report.record(Feature::BackToTop, BackToTop::setup(host));
        let anchors = report
            .record(Feature::AnchorScroll, Ok(AnchorScroll::setup(host)))
            .unwrap_or_default();

        tracing::info!(
            "page interaction ready ({} of {} features active)",
            Feature::ALL.iter().filter(|&&f| report.is_active(f)).count(),
            Feature::ALL.len()
        );

        let mut page = Self {
            config,
            report,
            navbar,
            mobile_nav,
            progress,
            back_to_top,
            anchors,
            toasts,
            timers,
        };
        // A page can load already scrolled
        page.on_scroll(host);
        page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Which behaviors were wired up
    pub fn report(&self) -> &SetupReport {
        &self.report
    }

    /// Run every behavior that reacts to `event`
    pub fn dispatch<H: PageHost + ?Sized>(&mut self, host: &mut H, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Scroll => self.on_scroll(host),
            PageEvent::Click { target } => self.on_click(host, target),
        }
    }

    fn on_scroll<H: PageHost + ?Sized>(&mut self, host: &mut H) -> EventOutcome {
        let mut outcome = EventOutcome::new();
        let metrics = host.scroll_metrics();

        if let Some(navbar) = &self.navbar {
            navbar.apply(host, &self.config.navbar, metrics.scroll_top);
            outcome.handled(Feature::NavbarBackground);
        }
        if let Some(progress) = &self.progress {
            progress.apply(host, metrics);
            outcome.handled(Feature::ScrollProgress);
        }
        if let Some(back_to_top) = &self.back_to_top {
            back_to_top.apply(host, self.config.back_to_top_threshold_px, metrics.scroll_top);
            outcome.handled(Feature::BackToTop);
        }
        outcome
    }

    fn on_click<H: PageHost + ?Sized>(&mut self, host: &mut H, target: NodeId) -> EventOutcome {
        let mut outcome = EventOutcome::new();

        if let Some(nav) = self.mobile_nav {
            if nav.handles(host, target) {
                nav.toggle(host);
                outcome.handled(Feature::MobileNav);
            }
        }

        if let Some(control) = self.toasts.close_control(host, target) {
            if self.toasts.close(host, &mut self.timers, control) {
                outcome.handled(Feature::Toasts);
            }
        }

        if let Some(back_to_top) = self.back_to_top {
            if back_to_top.handles(host, target) && back_to_top.is_interactive(host) {
                back_to_top.scroll_home(host);
                outcome.handled(Feature::BackToTop);
            }
        }

        if let Some(link) = self.anchors.link_for(host, target) {
            outcome.prevent_default();
            self.anchors.follow(host, link);
            outcome.handled(Feature::AnchorScroll);
        }

        outcome
    }

    /// Close the toast owning `control`, as its close button does
    pub fn close_toast<H: PageHost + ?Sized>(&mut self, host: &mut H, control: NodeId) -> bool {
        self.toasts.close(host, &mut self.timers, control)
    }

    /// Let `elapsed` pass, firing due timers in order. Returns how many fired.
    pub fn advance<H: PageHost + ?Sized>(&mut self, host: &mut H, elapsed: Duration) -> usize {
        let until = self.timers.now() + elapsed;
        let mut fired = 0;
        while let Some(task) = self.timers.next_due(until) {
            self.run_task(host, task);
            fired += 1;
        }
        self.timers.advance_to(until);
        fired
    }

    /// Fire timers until none remain. Returns how many fired.
    pub fn run_until_idle<H: PageHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let mut fired = 0;
        while let Some(wait) = self.timers.time_until_next() {
            fired += self.advance(host, wait);
        }
        fired
    }

    fn run_task<H: PageHost + ?Sized>(&mut self, host: &mut H, task: TimerTask) {
        match task {
            TimerTask::AutoCloseToast { toast } => {
                self.toasts.auto_close(host, &mut self.timers, toast);
            }
            TimerTask::RemoveToast { toast } => self.toasts.remove(host, toast),
        }
    }

    /// Time since setup on the layer's clock
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Toasts whose auto-close has not fired or been cancelled
    pub fn pending_auto_close(&self) -> usize {
        self.toasts.pending_auto_close()
    }

    /// In-page links registered at setup
    pub fn anchor_links(&self) -> &[NodeId] {
        self.anchors.links()
    }
}
