//! Toast notifications
//!
//! Toasts arrive in the server-rendered markup inside `#toast-container`.
//! Closing one swaps `toast-enter` for `toast-exit`, waits for the exit
//! transition, then detaches it; the container goes too once empty.
//! Every timer re-derives its nodes when it fires, so a timer that outlives
//! its toast does nothing.

use crate::timers::{TimerId, TimerQueue, TimerTask};
use crate::{names, PageHost, ToastTimings};
use sitefx_dom::NodeId;
use std::collections::HashMap;

#[derive(Debug)]
pub struct Toasts {
    timings: ToastTimings,
    /// Auto-close timers not yet fired, by toast
    pending_auto_close: HashMap<NodeId, TimerId>,
}

impl Toasts {
    pub fn new(timings: ToastTimings) -> Self {
        Self { timings, pending_auto_close: HashMap::new() }
    }

    /// Schedule auto-close for every toast currently in the container.
    /// Returns how many were scheduled.
    pub fn schedule_auto_close<H: PageHost + ?Sized>(
        &mut self,
        host: &H,
        container: NodeId,
        timers: &mut TimerQueue,
    ) -> usize {
        let toasts = host.descendants_with_class(container, names::TOAST_ITEM);
        tracing::debug!("Found toasts: {}", toasts.len());

        for &toast in &toasts {
            let id = timers.schedule(self.timings.auto_close_delay(), TimerTask::AutoCloseToast { toast });
            self.pending_auto_close.insert(toast, id);
        }
        toasts.len()
    }

    /// Clicks inside a `.toast-close` control, resolved to that control
    pub fn close_control<H: PageHost + ?Sized>(&self, host: &H, target: NodeId) -> Option<NodeId> {
        host.closest_with_class(target, names::TOAST_CLOSE)
    }

    /// Start closing the toast that owns `control`.
    ///
    /// Returns false when there is no live toast around the control, or it
    /// is already on its way out.
    pub fn close<H: PageHost + ?Sized>(&mut self, host: &mut H, timers: &mut TimerQueue, control: NodeId) -> bool {
        let Some(toast) = host.closest_with_class(control, names::TOAST_ITEM) else {
            tracing::debug!("Toast not found for close control {}", control);
            return false;
        };
        if !host.is_connected(toast) || host.has_class(toast, names::TOAST_EXIT) {
            return false;
        }

        if let Some(timer) = self.pending_auto_close.remove(&toast) {
            timers.cancel(timer);
        }

        tracing::debug!("Closing toast {}", toast);
        host.remove_class(toast, names::TOAST_ENTER);
        host.add_class(toast, names::TOAST_EXIT);
        timers.schedule(self.timings.exit_delay(), TimerTask::RemoveToast { toast });
        true
    }

    /// Auto-close timer fired
    pub fn auto_close<H: PageHost + ?Sized>(&mut self, host: &mut H, timers: &mut TimerQueue, toast: NodeId) -> bool {
        self.pending_auto_close.remove(&toast);
        if !host.is_connected(toast) {
            return false;
        }
        match host.descendants_with_class(toast, names::TOAST_CLOSE).first() {
            Some(&control) => self.close(host, timers, control),
            None => false,
        }
    }

    /// Exit transition finished: detach the toast, then the container if empty
    pub fn remove<H: PageHost + ?Sized>(&mut self, host: &mut H, toast: NodeId) {
        if host.is_connected(toast) {
            tracing::debug!("Removing toast {}", toast);
            host.remove(toast);
        }
        if let Some(container) = host.element_by_id(names::TOAST_CONTAINER) {
            if host.child_element_count(container) == 0 {
                tracing::debug!("Removing empty toast container");
                host.remove(container);
            }
        }
    }

    /// Number of toasts still waiting to auto-close
    pub fn pending_auto_close(&self) -> usize {
        self.pending_auto_close.len()
    }
}
