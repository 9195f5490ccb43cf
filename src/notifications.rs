//! Toast Notifications
//!
//! Transient messages that expire on their own. Toasts stack independently:
//! no deduplication, no throttling.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ToastTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A toast is `Showing` for the display window, then `Leaving` while it fades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

/// Step applied to a toast once its wait is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    BeginExit,
    Dismiss,
}

/// Waits, in order, before each expiry step
pub fn expiry_schedule(timing: ToastTiming) -> [(u32, Expiry); 2] {
    [
        (timing.display_ms, Expiry::BeginExit),
        (timing.exit_ms, Expiry::Dismiss),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: String, severity: Severity) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message,
            severity,
            phase: ToastPhase::Showing,
        });
        self.next_id
    }

    pub fn begin_exit(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = ToastPhase::Leaving;
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn expire(&mut self, id: u64, step: Expiry) {
        match step {
            Expiry::BeginExit => self.begin_exit(id),
            Expiry::Dismiss => self.dismiss(id),
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Context handle for raising toasts from anywhere in the UI
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    timing: ToastTiming,
}

impl Notifier {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timing,
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    /// Show `message`, then fade it out and drop it once its time is up
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Success | Severity::Info => log::info!("{}", message),
        }

        let Some(id) = self.queue.try_update(|q| q.push(message, severity)) else {
            return;
        };

        let queue = self.queue;
        let timing = self.timing;
        spawn_local(async move {
            for (wait_ms, step) in expiry_schedule(timing) {
                TimeoutFuture::new(wait_ms).await;
                queue.try_update(|q| q.expire(id, step));
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }
}

/// Get the notifier from context
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_without_dedup() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Failed to load presets".to_string(), Severity::Error);
        let second = queue.push("Failed to load presets".to_string(), Severity::Error);

        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut queue = ToastQueue::default();
        let a = queue.push("Loaded preset: Small Delivery".to_string(), Severity::Success);
        let b = queue.push("Solution computed successfully!".to_string(), Severity::Success);

        queue.begin_exit(a);
        let phases: Vec<ToastPhase> = queue.toasts().iter().map(|t| t.phase).collect();
        assert_eq!(phases, vec![ToastPhase::Leaving, ToastPhase::Showing]);

        queue.dismiss(a);
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn test_expiry_follows_timing() {
        let timing = ToastTiming::default();
        let schedule = expiry_schedule(timing);
        let waits: Vec<u32> = schedule.iter().map(|(ms, _)| *ms).collect();
        assert_eq!(waits, vec![3000, 300]);

        let mut queue = ToastQueue::default();
        let id = queue.push("All items cleared".to_string(), Severity::Info);

        let (_, first) = schedule[0];
        queue.expire(id, first);
        assert_eq!(queue.toasts()[0].phase, ToastPhase::Leaving);

        let (_, second) = schedule[1];
        queue.expire(id, second);
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_expiry_uses_configured_waits() {
        let timing = ToastTiming { display_ms: 1200, exit_ms: 50 };
        assert_eq!(
            expiry_schedule(timing),
            [(1200, Expiry::BeginExit), (50, Expiry::Dismiss)]
        );
    }
}
