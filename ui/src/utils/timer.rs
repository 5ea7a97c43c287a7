//! Cancellable delayed actions
//!
//! Wraps `gloo_timers::callback::Timeout` so components schedule and cancel
//! a pending close in one place instead of juggling raw timer handles.

use gloo_timers::callback::Timeout;

/// A single pending delayed action. Scheduling again replaces the previous
/// one; dropping cancels whatever is pending.
#[derive(Default)]
pub struct DelayedAction {
    pending: Option<Timeout>,
}

impl DelayedAction {
    /// Run `action` after `delay_ms`, cancelling any previously scheduled run.
    pub fn schedule<F>(&mut self, delay_ms: u32, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, action));
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_pending() {
        let timer = DelayedAction::default();
        assert!(!timer.is_pending());
    }
}
